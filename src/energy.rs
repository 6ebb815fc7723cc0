// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the color gradient across
//! it: the squared RGB distance between its left and right neighbors,
//! plus the squared distance between its upper and lower neighbors,
//! square-rooted.  This is the rusty expression of:
//!
//! ```text
//!  |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!  |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//! e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! Pixels on a border borrow the gradient computed one step inward.

use crate::cq;
use crate::field::EnergyField;
use crate::neighbors::neighbors;
use crate::pixelpairs::squared_color_distance;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive};
use itertools::{iproduct, Itertools, MinMaxResult};

// The pair of indices whose difference is the gradient at `index`.
// Borders reuse the gradient of the next pixel inward, so x = 0
// compares columns 0 and 2.  A dimension of two compares its only two
// pixels; a dimension of one compares a pixel with itself, which is a
// zero gradient.
#[inline]
fn gradient_pair(index: u32, bound: u32) -> (u32, u32) {
    let center = cq!(bound >= 3, index.max(1).min(bound - 2), index);
    neighbors(center, bound)
}

// (Image, x, y) -> Energy
#[inline]
fn energy_at<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (left, right) = gradient_pair(x, width);
    let (up, down) = gradient_pair(y, height);
    let dx = squared_color_distance(&image.get_pixel(left, y), &image.get_pixel(right, y));
    let dy = squared_color_distance(&image.get_pixel(x, up), &image.get_pixel(x, down));
    (dx + dy).sqrt()
}

// Fill one band of whole rows, starting at `first_row`.
fn fill_band<I, P, S>(image: &I, first_row: u32, band: &mut [f64])
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let width = image.width();
    let last_row = first_row + (band.len() / width.max(1) as usize) as u32;
    for ((y, x), cell) in iproduct!(first_row..last_row, 0..width).zip(band.iter_mut()) {
        *cell = energy_at(image, x, y);
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_energy<I, P, S>(image: &I, field: &mut EnergyField)
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let height = field.height();
    for (first_row, band) in field.bands_mut(height) {
        fill_band(image, first_row, band);
    }
}

// Every band reads the same immutable image and writes a disjoint
// slice of the field, so the workers need no coordination beyond the
// scope join.
#[cfg(feature = "threaded")]
fn fill_energy<I, P, S>(image: &I, field: &mut EnergyField)
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let workers = num_cpus::get().max(1) as u32;
    let rows_per_band = (field.height() + workers - 1) / workers;
    let joined = crossbeam::scope(|scope| {
        for (first_row, band) in field.bands_mut(rows_per_band) {
            scope.spawn(move |_| fill_band(image, first_row, band));
        }
    });
    if let Err(panic) = joined {
        std::panic::resume_unwind(panic);
    }
}

/// Compute the energy of every pixel in an image.  This is generic on
/// the image type: any pixel is viewed through its RGB conversion, so
/// a grayscale image counts its one channel three times.
pub fn calculate_energy<I, P, S>(image: &I) -> EnergyField
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut field = EnergyField::new(width, height);
    fill_energy(image, &mut field);
    field
}

/// Render an energy field as a grayscale image, scaled so that the
/// most energetic pixel is white.  A field with no energy at all is
/// black.
pub fn energy_to_image(energy: &EnergyField) -> GrayImage {
    let peak = match energy.as_slice().iter().cloned().minmax() {
        MinMaxResult::NoElements => 0.0,
        MinMaxResult::OneElement(e) => e,
        MinMaxResult::MinMax(_, max) => max,
    };
    let (width, height) = energy.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| {
        let scaled = cq!(peak > 0.0, energy[(x, y)] * 255.0 / peak, 0.0);
        Luma([scaled.round().max(0.0).min(255.0) as u8])
    })
}
