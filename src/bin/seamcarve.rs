// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use image::DynamicImage;
use log::info;
use seamcarve::config::{Options, Tool};
use seamcarve::error::exit_with;
use seamcarve::{load_grid, save_image, SeamCarver, SeamError};
use std::env;

fn run() -> Result<(), SeamError> {
    let options = Options::from_args(Tool::Carve, env::args_os())?;
    let grid = load_grid(&options.input)?;
    info!(
        "{}: removing {} columns and {} rows",
        options.input.display(),
        options.width,
        options.height
    );
    let carved = SeamCarver::new(grid).carve(options.width, options.height)?;
    save_image(&DynamicImage::ImageRgb8(carved), &options.output)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        exit_with(err);
    }
}
