/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Terminal output for the diagnostics sink
use std::io::{stdout, Write};

use texel_core::diagnostics::Console;

/// Writes diagnostics straight to standard output
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write(&self, text: &str) {
        let mut out = stdout().lock();
        // nothing sensible to do if the terminal is gone
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}
