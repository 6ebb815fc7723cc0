// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing image files.  The format is whatever the file
//! extension says; use a lossless one (PNG) for output if the result
//! is going to be compared pixel for pixel.

use crate::error::SeamError;
use crate::seamcarver::PixelGrid;
use image::DynamicImage;
use log::debug;
use std::path::Path;

/// Load an image from disk as an 8-bit RGB grid.
pub fn load_grid(path: &Path) -> Result<PixelGrid, SeamError> {
    let image = image::open(path).map_err(|cause| SeamError::Input {
        path: path.display().to_string(),
        cause,
    })?;
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgb8())
}

/// Write an image to disk.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<(), SeamError> {
    image.save(path).map_err(|cause| SeamError::Output {
        path: path.display().to_string(),
        cause,
    })?;
    debug!(
        "wrote {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn grids_survive_a_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let grid = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 60, y as u8 * 80, 7]));
        save_image(&DynamicImage::ImageRgb8(grid.clone()), &path).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
    }

    #[test]
    fn missing_files_are_input_errors() {
        let dir = tempfile::tempdir().unwrap();
        match load_grid(&dir.path().join("absent.png")) {
            Err(SeamError::Input { path, .. }) => assert!(path.ends_with("absent.png")),
            other => panic!("expected an input error, got {:?}", other),
        }
    }

    #[test]
    fn unwritable_paths_are_output_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.png");
        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        match save_image(&image, &path) {
            Err(SeamError::Output { .. }) => (),
            other => panic!("expected an output error, got {:?}", other),
        }
    }
}
