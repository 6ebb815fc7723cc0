// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::cost::cumulative_cost;
use crate::energy::calculate_energy;
use crate::flipper::Flipper;
use crate::seam::{trace_seam, Seam};
use image::{GenericImageView, Pixel, Primitive};

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for more than one
/// seam finder.
pub trait SeamFinder {
    /// Request a top-to-bottom seam: one column per row.
    fn find_vertical_seam(&self) -> Seam;

    /// Request a left-to-right seam: one row per column.
    fn find_horizontal_seam(&self) -> Seam;
}

/// The gradient seam engine: a borrowed image, and the energy, cost,
/// and trace passes run over it on request.  Nothing is cached; every
/// request recomputes the whole energy map.
pub struct GradientSeams<'a, I> {
    image: &'a I,
}

impl<'a, I> GradientSeams<'a, I> {
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        GradientSeams { image }
    }
}

impl<'a, I, P, S> SeamFinder for GradientSeams<'a, I>
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_vertical_seam(&self) -> Seam {
        trace_seam(&cumulative_cost(&calculate_energy(self.image)))
    }

    fn find_horizontal_seam(&self) -> Seam {
        trace_seam(&cumulative_cost(&calculate_energy(&Flipper::new(self.image))))
    }
}
