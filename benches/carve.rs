// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{ImageBuffer, Rgb, RgbImage};
use seamcarve::{calculate_energy, seamcarve};

fn textured(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([((x * 41 + y * 7) % 256) as u8, ((x * y * 13) % 256) as u8, ((y * 29) % 256) as u8])
    })
}

fn energy_benchmark(c: &mut Criterion) {
    let image = textured(320, 240);
    c.bench_function("energy 320x240", move |b| b.iter(|| calculate_energy(&image)));
}

fn carve_benchmark(c: &mut Criterion) {
    let image = textured(96, 64);
    c.bench_function("carve 16x8 seams from 96x64", move |b| {
        b.iter(|| seamcarve(image.clone(), 16, 8))
    });
}

criterion_group!(benches, energy_benchmark, carve_benchmark);
criterion_main!(benches);
