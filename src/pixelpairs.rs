// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between the colors that make them up:
//!
//! ```text
//! |Δ|² = (Δr)² + (Δg)² + (Δb)²
//! ```
//!
//! Channels are widened to `f64` before subtracting, so the result is
//! exact for 8-bit and 16-bit images alike.

use image::{Pixel, Primitive};
use num_traits::ToPrimitive;

/// (Pixel, Pixel) -> squared RGB distance
#[inline]
pub fn squared_color_distance<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    // `Rgb<S>` is only a `Pixel` for enlargeable subpixels; read the array.
    c1.0.iter()
        .zip(c2.0.iter())
        .map(|(a, b)| {
            let d = widen(*a) - widen(*b);
            d * d
        })
        .sum()
}

#[inline]
fn widen<S: Primitive>(channel: S) -> f64 {
    channel.to_f64().unwrap_or(0.0)
}
