// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! A proxy for the ImageRS `GenericImageView` trait that maps the
//! width to the original height, and vice versa, as well as every x to
//! y and vice versa.  Anything that finds a vertical seam on a
//! `Flipper` has found a horizontal seam on the image underneath.
//!
//! `transpose` materializes the flipped view into a new buffer, which
//! is what the carver uses to turn rows into columns and back.

use image::{GenericImageView, ImageBuffer, Pixel};

/// A borrowed image, seen with its axes swapped.
#[derive(Debug, Clone, Copy)]
pub struct Flipper<'a, I> {
    image: &'a I,
}

impl<'a, I> Flipper<'a, I> {
    pub fn new(image: &'a I) -> Self {
        Flipper { image }
    }
}

impl<'a, I, P> GenericImageView for Flipper<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel,
{
    type Pixel = P;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        let (x, y, width, height) = self.image.bounds();
        (y, x, height, width)
    }

    fn get_pixel(&self, x: u32, y: u32) -> P {
        self.image.get_pixel(y, x)
    }
}

/// Copy an image into a new buffer with width and height swapped, so
/// that pixel (x, y) of the result is pixel (y, x) of the source.
pub fn transpose<I, P>(image: &I) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
{
    let flipped = Flipper::new(image);
    let (width, height) = flipped.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| flipped.get_pixel(x, y))
}
