// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tracing the cheapest seam back out of a cost map.
//!
//! Ties are resolved by fixed rules so that the same image always
//! yields the same seam:
//!
//! - On the bottom row the leftmost of the cheapest columns wins.
//! - Walking upward, the seam stays in its current column only when all
//!   three parents tie.  Otherwise the left parent wins any tie it is
//!   part of, then the right, and the current column is kept when it is
//!   strictly cheapest.

use crate::cq;
use crate::field::CostField;
use crate::neighbors::neighbors;

/// One column index per row, top row first.  Consecutive entries
/// differ by at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    pub fn new(columns: Vec<u32>) -> Self {
        Seam(columns)
    }

    /// The seam's column in each row, from the top.
    pub fn columns(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if no step between rows drifts more than one column.
    pub fn is_connected(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }
}

// First-seen minimum: a later column must be strictly cheaper to win.
fn cheapest_column(row: &[f64]) -> u32 {
    row.iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (x, cost)| cq!(*cost < row[best], x, best)) as u32
}

// The column in `row` the seam came from, given it passes through
// `column` one row below.
fn cheapest_parent(cost: &CostField, column: u32, row: u32) -> u32 {
    let (left, right) = neighbors(column, cost.width());
    let (l, c, r) = (cost[(left, row)], cost[(column, row)], cost[(right, row)]);
    let least = l.min(c).min(r);
    if l == least && c == least && r == least {
        column
    } else {
        cq!(l == least, left, cq!(r == least, right, column))
    }
}

/// Given a cost map, return the x-coordinate of the seam in each row,
/// from row 0 down to the bottom.
pub fn trace_seam(cost: &CostField) -> Seam {
    let (_, height) = cost.dimensions();
    if height == 0 {
        return Seam(Vec::new());
    }

    let mut columns = vec![0; height as usize];
    let mut column = cheapest_column(cost.row(height - 1));
    columns[height as usize - 1] = column;

    // Working backwards, follow the cheapest parent up to the top row.
    for y in (1..height).rev() {
        column = cheapest_parent(cost, column, y - 1);
        columns[y as usize - 1] = column;
    }
    Seam(columns)
}
