/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by image operations
use log::warn;

use crate::errors::ImageErrors;
use crate::image::Image;

/// This encapsulates an image operation.
///
/// All operations that can be stored in a workflow
/// need to implement this trait.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Carry out the operation on a non-empty image
    ///
    /// Implementers may assume the pixel buffer matches the image's
    /// dimensions and pixel format.
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute an operation on the image
    ///
    /// Operations on an empty image do nothing and return `Ok`.
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    ///
    /// # Example
    /// ```
    /// use texel_image::image::Image;
    /// use texel_image::filters::premul_alpha::PremultiplyAlpha;
    /// use texel_image::traits::OperationsTrait;
    ///
    /// let mut image = Image::default();
    /// PremultiplyAlpha::new().execute(&mut image).unwrap();
    /// ```
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if image.is_empty() {
            warn!("No image loaded, `{}` is a no-op", self.name());
            return Ok(());
        }
        self.execute_impl(image)
    }
}
