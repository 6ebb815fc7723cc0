// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use image::DynamicImage;
use log::info;
use seamcarve::config::{Options, Tool};
use seamcarve::error::exit_with;
use seamcarve::{calculate_energy, energy_to_image, load_grid, save_image, SeamError};
use std::env;

fn run() -> Result<(), SeamError> {
    let options = Options::from_args(Tool::Energy, env::args_os())?;
    let grid = load_grid(&options.input)?;
    let energy = calculate_energy(&grid);
    info!(
        "{}: energy map {}x{}",
        options.input.display(),
        energy.width(),
        energy.height()
    );
    save_image(&DynamicImage::ImageLuma8(energy_to_image(&energy)), &options.output)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        exit_with(err);
    }
}
