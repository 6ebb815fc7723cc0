// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can stop a carve.

use crate::seamcarver::Carve;
use failure::Fail;
use std::process;

#[derive(Debug, Fail)]
pub enum SeamError {
    /// Bad or missing command-line arguments.
    #[fail(display = "{}", _0)]
    Arguments(#[cause] clap::Error),

    #[fail(display = "cannot read image {}", path)]
    Input {
        path: String,
        #[cause]
        cause: image::ImageError,
    },

    /// More seams were requested than the image has pixels to give.
    #[fail(
        display = "cannot remove {} seams from an image {} pixels in {}",
        requested, available, direction
    )]
    DimensionExhausted {
        direction: Carve,
        requested: u32,
        available: u32,
    },

    #[fail(display = "cannot write image {}", path)]
    Output {
        path: String,
        #[cause]
        cause: image::ImageError,
    },
}

/// Report an error on stderr, with its chain of causes, and exit.
/// Argument errors are handed back to clap, which also takes care of
/// `--help` and `--version` exiting successfully.
pub fn exit_with(err: SeamError) -> ! {
    if let SeamError::Arguments(ref e) = err {
        e.exit();
    }
    eprintln!("error: {}", err);
    let mut cause = err.cause();
    while let Some(c) = cause {
        eprintln!("  caused by: {}", c);
        cause = c.cause();
    }
    process::exit(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_and_output_errors_keep_the_image_error_as_cause() {
        let unreadable = || {
            image::ImageError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
        };
        let input = SeamError::Input {
            path: "a.png".to_string(),
            cause: unreadable(),
        };
        let output = SeamError::Output {
            path: "b.png".to_string(),
            cause: unreadable(),
        };
        assert_eq!(input.to_string(), "cannot read image a.png");
        assert_eq!(output.to_string(), "cannot write image b.png");
        assert!(input.cause().is_some());
        assert!(output.cause().is_some());
    }

    #[test]
    fn exhaustion_names_the_direction() {
        let err = SeamError::DimensionExhausted {
            direction: Carve::Height,
            requested: 4,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "cannot remove 4 seams from an image 4 pixels in height"
        );
    }
}
