/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image I/O options
//!
//! File names handed to the image loaders and savers are relative to a
//! root path, this module holds that setting together with decode limits.
use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostics;

/// I/O options
///
/// To remove the annoyance of getters and setters
/// all exposed options are declared public.
#[derive(Debug, Clone)]
pub struct IoOptions {
    /// Directory which relative file names are resolved against
    ///
    /// - Default value: empty, i.e the current working directory
    pub root_path:  PathBuf,
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    pub max_width:  usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    pub max_height: usize
}

impl Default for IoOptions {
    fn default() -> Self {
        Self {
            root_path:  PathBuf::new(),
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }
}

impl IoOptions {
    pub fn get_root_path(&self) -> &Path {
        &self.root_path
    }

    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Set the directory relative file names are resolved against
    pub fn set_root_path<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root_path = root.into();
        self
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Resolve `file` against the root path
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve<P: AsRef<Path>>(&self, file: P) -> PathBuf {
        self.root_path.join(file)
    }
}

/// Collaborators shared by every load and save call
#[derive(Default)]
pub struct IoContext {
    pub options:     IoOptions,
    pub diagnostics: Diagnostics
}

impl IoContext {
    pub fn new(options: IoOptions, diagnostics: Diagnostics) -> IoContext {
        IoContext {
            options,
            diagnostics
        }
    }
}
