/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Contains image manipulation algorithms
//!
//! This contains structs that implement `OperationsTrait`
//! meaning they can manipulate images
pub mod luma;
pub mod premul_alpha;
pub mod srgb;
pub mod yuv;
