//! Replace near-white pixels in PNG images with full transparency.
//!
//! Logos exported on a white background can be made transparent by turning
//! every pixel whose red, green and blue channels all exceed 240 into fully
//! transparent white. Every other pixel is left exactly as it was.
//!
//! # Quick Start
//!
//! ```no_run
//! use png_whiteout::{whiten_to_transparent, save_png};
//!
//! let mut img = image::open("logo.png").unwrap().to_rgba8();
//! let replaced = whiten_to_transparent(&mut img);
//! save_png(&img, "logo.png".as_ref()).unwrap();
//! println!("{replaced} pixels made transparent");
//! ```
//!
//! # Files and directories
//!
//! [`process_file`] wraps load, recolor and save, reporting failures in a
//! [`ProcessResult`] instead of returning early, so batches keep going.
//!
//! ```no_run
//! use png_whiteout::{process_in_place, ProcessOptions};
//!
//! let result = process_in_place("logo.png".as_ref(), &ProcessOptions::default());
//! assert!(result.success, "{}", result.message);
//! ```

#![deny(missing_docs)]

mod engine;
pub mod error;
pub mod recolor;

pub use engine::{
    is_png, process_directory, process_file, process_in_place, save_png, ProcessOptions,
    ProcessResult,
};
pub use error::{Error, Result};
pub use recolor::{
    is_near_white, recolor_pixel, recolor_pixels, whiten_to_transparent, BRIGHTNESS_THRESHOLD,
    TRANSPARENT_WHITE,
};
