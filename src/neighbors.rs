// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Edge handling shared by the energy, cost, and seam stages.
//!
//! Every stage that looks one step to the left or right (or up and
//! down) of a pixel goes through `clamped`, so the edge of the image
//! behaves identically everywhere: an out-of-range neighbor is
//! replaced by the nearest in-range index, never wrapped.

/// My ternary expression handler.  While it may seem redundant, it's
/// surprisingly useful when working with complex logic tables, such
/// as the edge (literally) cases is the seam carving algorithm.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

/// Clamp a possibly out-of-range index into `0..bound`.  `bound` is a
/// dimension of a live grid and is therefore never zero.
#[inline]
pub fn clamped(index: i64, bound: u32) -> u32 {
    debug_assert!(bound > 0, "clamping against an empty dimension");
    let last = i64::from(bound) - 1;
    let index = cq!(index < 0, 0, cq!(index > last, last, index));
    index as u32
}

/// The (before, after) neighbors of `index`, each clamped into
/// `0..bound`.  At the edges one of the pair is `index` itself.
#[inline]
pub fn neighbors(index: u32, bound: u32) -> (u32, u32) {
    let index = i64::from(index);
    (clamped(index - 1, bound), clamped(index + 1, bound))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_indices_are_untouched() {
        assert_eq!(clamped(0, 5), 0);
        assert_eq!(clamped(3, 5), 3);
        assert_eq!(clamped(4, 5), 4);
    }

    #[test]
    fn out_of_range_indices_stick_to_the_edge() {
        assert_eq!(clamped(-1, 5), 0);
        assert_eq!(clamped(5, 5), 4);
        assert_eq!(clamped(17, 5), 4);
    }

    #[test]
    fn edge_neighbors_include_themselves() {
        assert_eq!(neighbors(0, 4), (0, 1));
        assert_eq!(neighbors(2, 4), (1, 3));
        assert_eq!(neighbors(3, 4), (2, 3));
        assert_eq!(neighbors(0, 1), (0, 0));
    }
}
