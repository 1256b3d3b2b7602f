//! Proportional logo scaling.

use crate::{CoreError, Result as CoreResult};

use std::io::Cursor;
use std::panic::Location;

use error_location::ErrorLocation;
use image::{ImageFormat, imageops::FilterType};

/// Widest logo a resize may produce
pub const MAX_RESIZE_WIDTH: u32 = 2000;
/// Tallest logo a resize may produce
pub const MAX_RESIZE_HEIGHT: u32 = 2000;

/// A logo scaled to a target width, encoded as PNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedLogo {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// True for any `image/*` content type
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}

/// Decode `bytes`, scale to `target_width` keeping the aspect ratio, and
/// re-encode as PNG. The height is rounded to the nearest pixel (at least 1).
///
/// Both output dimensions are bounded by [`MAX_RESIZE_WIDTH`] and
/// [`MAX_RESIZE_HEIGHT`]; a source whose aspect ratio would exceed the height
/// bound is rejected before any pixels are allocated.
#[track_caller]
pub fn resize_to_width(bytes: &[u8], target_width: u32) -> CoreResult<ResizedLogo> {
    if target_width == 0 || target_width > MAX_RESIZE_WIDTH {
        return Err(CoreError::Validation {
            message: format!("Width must be between 1 and {}", MAX_RESIZE_WIDTH),
            field: Some("width".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let source = image::load_from_memory(bytes).map_err(|e| CoreError::Image {
        message: format!("Could not decode image: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let (source_width, source_height) = (source.width(), source.height());
    if source_width == 0 || source_height == 0 {
        return Err(CoreError::Image {
            message: "Image has no pixels".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let target_height = scaled_height(source_width, source_height, target_width);
    if target_height > MAX_RESIZE_HEIGHT {
        return Err(CoreError::Validation {
            message: format!(
                "Resized logo would be {} pixels tall (maximum {}); use a smaller width",
                target_height, MAX_RESIZE_HEIGHT
            ),
            field: Some("width".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let scaled = source.resize_exact(target_width, target_height, FilterType::Triangle);

    let mut encoded = Cursor::new(Vec::new());
    scaled
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|e| CoreError::Image {
            message: format!("Could not encode PNG: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(ResizedLogo {
        bytes: encoded.into_inner(),
        width: target_width,
        height: target_height,
    })
}

fn scaled_height(source_width: u32, source_height: u32, target_width: u32) -> u32 {
    let ratio = f64::from(source_height) / f64::from(source_width);
    let height = (f64::from(target_width) * ratio).round();
    (height as u32).max(1)
}
