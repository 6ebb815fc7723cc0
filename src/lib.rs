// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking.
//!
//! Seams of least gradient energy are found and removed one at a time:
//! energy map, cumulative cost map, seam trace, seam removal, repeat.
//! Horizontal seams are removed by transposing the image and removing
//! vertical ones.

extern crate image;

pub mod codec;
pub mod config;
pub mod cost;
pub mod energy;
pub mod error;
pub mod field;
pub mod flipper;
pub mod neighbors;
pub mod pixelpairs;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;

pub use codec::{load_grid, save_image};
pub use cost::cumulative_cost;
pub use energy::{calculate_energy, energy_to_image};
pub use error::SeamError;
pub use field::{CostField, EnergyField};
pub use flipper::{transpose, Flipper};
pub use seam::{trace_seam, Seam};
pub use seamcarver::{remove_vertical_seam, seamcarve, Carve, PixelGrid, SeamCarver};
pub use seamfinder::{GradientSeams, SeamFinder};
