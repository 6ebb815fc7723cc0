// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The carver removes vertical seams one at a time, then turns the
//! image on its side and removes the horizontal ones the same way.
//! Every seam is found on a freshly computed energy map: removing a
//! seam shifts every column to its right, so no energy survives a
//! carve unchanged.

use crate::error::SeamError;
use crate::flipper::transpose;
use crate::seam::Seam;
use crate::seamfinder::{GradientSeams, SeamFinder};
use image::{ImageBuffer, Pixel, RgbImage};
use log::{debug, info, trace};
use std::fmt;

/// The image being carved: 8-bit RGB, at least one pixel each way.
pub type PixelGrid = RgbImage;

/// Which dimension a run of seams shrinks.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl fmt::Display for Carve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Carve::Width => write!(f, "width"),
            Carve::Height => write!(f, "height"),
        }
    }
}

/// Delete one pixel per row at the seam's column, shift the rest of
/// the row left, and drop the last column.  The buffer is compacted in
/// place.  The caller guarantees the image is at least two pixels wide
/// and that the seam has one in-range column per row.
pub fn remove_vertical_seam<P>(
    image: ImageBuffer<P, Vec<P::Subpixel>>,
    seam: &Seam,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
{
    let (width, height) = image.dimensions();
    debug_assert_eq!(seam.len(), height as usize);
    debug_assert!(seam.columns().iter().all(|x| *x < width));

    let channels = usize::from(P::CHANNEL_COUNT);
    let stride = width as usize * channels;
    let mut samples = image.into_raw();

    // Rows only ever move toward the front of the buffer, so each copy
    // reads samples that haven't been overwritten yet.
    let mut write = 0;
    for (y, column) in seam.columns().iter().enumerate() {
        let row = y * stride;
        let cut = row + *column as usize * channels;
        let end = row + stride;
        samples.copy_within(row..cut, write);
        write += cut - row;
        samples.copy_within(cut + channels..end, write);
        write += end - cut - channels;
    }
    samples.truncate(write);

    match ImageBuffer::from_raw(width - 1, height, samples) {
        Some(carved) => carved,
        None => unreachable!("a carved row is exactly one pixel shorter"),
    }
}

// Remove `count` vertical seams, one at a time.
fn carve_columns(mut image: PixelGrid, count: u32, direction: Carve) -> PixelGrid {
    if count > 0 {
        info!("carving {} {} seams from {}x{}", count, direction, image.width(), image.height());
    }
    for n in 0..count {
        let seam = GradientSeams::new(&image).find_vertical_seam();
        debug_assert!(seam.is_connected());
        debug!("{} seam {}/{}", direction, n + 1, count);
        trace!("{:?}", seam.columns());
        image = remove_vertical_seam(image, &seam);
    }
    image
}

fn ensure_removable(direction: Carve, requested: u32, available: u32) -> Result<(), SeamError> {
    if requested >= available {
        return Err(SeamError::DimensionExhausted {
            direction,
            requested,
            available,
        });
    }
    Ok(())
}

/// A struct for holding the image to be carved.  The carver owns the
/// image outright; carving consumes it and hands back the result.
pub struct SeamCarver {
    image: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: PixelGrid) -> Self {
        Self { image }
    }

    /// Remove `width_reduction` vertical seams, then `height_reduction`
    /// horizontal ones.  Asking for as many seams as the image has
    /// columns (or rows) is refused before any carving starts.
    pub fn carve(self, width_reduction: u32, height_reduction: u32) -> Result<PixelGrid, SeamError> {
        let (width, height) = self.image.dimensions();
        ensure_removable(Carve::Width, width_reduction, width)?;
        ensure_removable(Carve::Height, height_reduction, height)?;

        let narrowed = carve_columns(self.image, width_reduction, Carve::Width);
        let carved = if height_reduction == 0 {
            narrowed
        } else {
            let turned = carve_columns(transpose(&narrowed), height_reduction, Carve::Height);
            transpose(&turned)
        };
        info!("carved {}x{} to {}x{}", width, height, carved.width(), carved.height());
        Ok(carved)
    }
}

/// A convenience wrapper: carve `width_reduction` columns and
/// `height_reduction` rows out of an image.
pub fn seamcarve(
    image: PixelGrid,
    width_reduction: u32,
    height_reduction: u32,
) -> Result<PixelGrid, SeamError> {
    SeamCarver::new(image).carve(width_reduction, height_reduction)
}
