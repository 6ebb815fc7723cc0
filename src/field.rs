// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A row-major, addressable two-dimensional field of values, one per
//! pixel.  Used for both the energy map and the cumulative cost map.

use std::ops::{Index, IndexMut};

/// Defines the basic two-dimensional field: one value per pixel of a
/// specific image snapshot, addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

/// Per-pixel gradient magnitude.
pub type EnergyField = Field<f64>;

/// Per-pixel minimum accumulated energy of any top-to-bottom path
/// ending at that pixel.
pub type CostField = Field<f64>;

impl<P: Default + Copy> Field<P> {
    /// Define a new field, every cell holding the default value.
    pub fn new(width: u32, height: u32) -> Self {
        Field {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the buffer
    /// length doesn't match the dimensions.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() == width as usize * height as usize {
            Some(Field {
                width,
                height,
                cells,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The whole field, row by row.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    /// A single row of the field.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// A single row of the field, mutably.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.get_index(0, y);
        let end = start + self.width as usize;
        &mut self.cells[start..end]
    }

    /// Split the field into disjoint bands of up to `rows` whole rows,
    /// each paired with the index of its first row.  Every band can be
    /// written independently of the others.
    pub fn bands_mut(&mut self, rows: u32) -> impl Iterator<Item = (u32, &mut [P])> {
        let rows = rows.max(1);
        let chunk = (self.width as usize * rows as usize).max(1);
        self.cells
            .chunks_mut(chunk)
            .enumerate()
            .map(move |(band, cells)| (band as u32 * rows, cells))
    }

    // Keep the index math in a single location and never mess with it.
    // The same layout image.rs uses for its buffers.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Field<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        &self.cells[self.get_index(x, y)]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Field<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
