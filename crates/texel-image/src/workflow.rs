/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A load, process, save chain
//!
//! A workflow loads one texture, runs operations in insertion order
//! and saves the result, logging how long each step took.
use std::path::PathBuf;
use std::time::Instant;

use log::Level::Info;
use log::{info, log_enabled};
use texel_core::options::IoContext;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum WorkFlowState {
    Initialized,
    Decode,
    Operations,
    Encode,
    Finished
}

impl WorkFlowState {
    fn next(self) -> Option<Self> {
        match self {
            WorkFlowState::Initialized => Some(WorkFlowState::Decode),
            WorkFlowState::Decode => Some(WorkFlowState::Operations),
            WorkFlowState::Operations => Some(WorkFlowState::Encode),
            WorkFlowState::Encode => Some(WorkFlowState::Finished),
            WorkFlowState::Finished => None
        }
    }
}

pub struct WorkFlow {
    input:      Option<PathBuf>,
    output:     Option<PathBuf>,
    state:      Option<WorkFlowState>,
    image:      Image,
    operations: Vec<Box<dyn OperationsTrait>>,
    context:    IoContext
}

impl WorkFlow {
    /// Create a workflow that resolves its files through `context`
    pub fn new(context: IoContext) -> WorkFlow {
        WorkFlow {
            input: None,
            output: None,
            state: Some(WorkFlowState::Initialized),
            image: Image::default(),
            operations: vec![],
            context
        }
    }

    /// Set the texture to load, relative to the root path
    pub fn add_input<P: Into<PathBuf>>(&mut self, file: P) {
        self.input = Some(file.into());
    }

    /// Set where the result is saved, relative to the root path
    ///
    /// Without an output the workflow only loads and processes.
    pub fn add_output<P: Into<PathBuf>>(&mut self, file: P) {
        self.output = Some(file.into());
    }

    /// Add an operation, operations run in insertion order
    pub fn add_operation(&mut self, operation: Box<dyn OperationsTrait>) {
        self.operations.push(operation);
    }

    /// Move to the next state, doing that state's work
    ///
    /// # Errors
    /// Load, operation and save failures stop the workflow
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        if log_enabled!(Info) {
            info!("Current state: {:?}", state);
        }
        match state {
            WorkFlowState::Decode => {
                if let Some(file) = &self.input {
                    let start = Instant::now();

                    self.image.load(file, &self.context)?;

                    info!("Finished decoding in {} ms", start.elapsed().as_millis());
                }
            }
            WorkFlowState::Operations => {
                for operation in &self.operations {
                    let operation_name = operation.name();

                    info!("Running {}", operation_name);

                    let start = Instant::now();

                    operation.execute(&mut self.image)?;

                    info!(
                        "Finished running `{operation_name}` in {} ms",
                        start.elapsed().as_millis()
                    );
                }
            }
            WorkFlowState::Encode => {
                if let Some(file) = &self.output {
                    let start = Instant::now();

                    self.image.save(file, &self.context)?;

                    info!("Finished encoding in {} ms", start.elapsed().as_millis());
                }
            }
            WorkFlowState::Initialized | WorkFlowState::Finished => {}
        }
        self.state = state.next();

        Ok(())
    }

    /// Run every remaining state
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }

    /// The image as it currently stands
    pub const fn image(&self) -> &Image {
        &self.image
    }

    pub fn into_image(self) -> Image {
        self.image
    }
}
