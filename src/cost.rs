// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative cost map: for every pixel, the least total energy of
//! any connected top-to-bottom path ending there.

use crate::field::{CostField, EnergyField};
use crate::neighbors::neighbors;

/// Given an energy map, build the cost map row by row.  The top row is
/// the energy itself; every later cell adds its own energy to the
/// cheapest of the three cells above it.  Out-of-range columns are
/// clamped, so an edge column compares against itself twice.
pub fn cumulative_cost(energy: &EnergyField) -> CostField {
    let (width, height) = energy.dimensions();
    let mut cost = CostField::new(width, height);
    if height == 0 {
        return cost;
    }

    cost.row_mut(0).copy_from_slice(energy.row(0));

    for y in 1..height {
        for x in 0..width {
            let (left, right) = neighbors(x, width);
            let above = cost[(left, y - 1)]
                .min(cost[(x, y - 1)])
                .min(cost[(right, y - 1)]);
            cost[(x, y)] = energy[(x, y)] + above;
        }
    }
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::calculate_energy;
    use image::{ImageBuffer, Rgb, RgbImage};

    const ENERGY: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 1.0, 6.0, 1.0, 9.0, 2.0];
    const COST: [f64; 9] = [1.0, 2.0, 3.0, 5.0, 2.0, 8.0, 3.0, 11.0, 4.0];

    fn energy_field() -> EnergyField {
        EnergyField::from_vec(3, 3, ENERGY.to_vec()).unwrap()
    }

    #[test]
    fn cost_accumulates_the_cheapest_parent() {
        assert_eq!(cumulative_cost(&energy_field()).as_slice(), &COST);
    }

    #[test]
    fn top_row_is_the_energy() {
        let image: RgbImage =
            ImageBuffer::from_fn(7, 5, |x, y| Rgb([(x * x * 9) as u8, (y * 31) as u8, 4]));
        let energy = calculate_energy(&image);
        let cost = cumulative_cost(&energy);
        assert_eq!(cost.row(0), energy.row(0));
    }

    #[test]
    fn cost_is_bounded_by_energy_and_parents() {
        let image: RgbImage = ImageBuffer::from_fn(6, 6, |x, y| {
            Rgb([((x * 53 + y * 19) % 256) as u8, ((x * y * 7) % 256) as u8, 0])
        });
        let energy = calculate_energy(&image);
        let cost = cumulative_cost(&energy);
        for y in 1..6 {
            let worst_parent = cost.row(y - 1).iter().cloned().fold(0.0, f64::max);
            for x in 0..6 {
                assert!(cost[(x, y)] >= energy[(x, y)]);
                assert!(cost[(x, y)] <= energy[(x, y)] + worst_parent);
            }
        }
    }

    #[test]
    fn single_column_is_a_running_sum() {
        let energy = EnergyField::from_vec(1, 4, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(cumulative_cost(&energy).as_slice(), &[1.0, 3.0, 6.0, 10.0]);
    }
}
