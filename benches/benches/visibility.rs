// Copyright 2026 the Viewshed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use viewshed_frame::Frame;
use viewshed_visibility::{BoundsSource, Combine, Viewport, compute_states, is_visible};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_coord(&mut self, upper: u32) -> f64 {
        f64::from(self.next_u32() % upper)
    }
}

/// Random boxes scattered over a document a few viewports tall.
struct ScatteredBoxes(Vec<Rect>);

impl ScatteredBoxes {
    fn generate(count: usize, seed: u64) -> Self {
        let mut rng = Lcg::new(seed);
        let boxes = (0..count)
            .map(|_| {
                let x = rng.gen_coord(2000) - 500.0;
                let y = rng.gen_coord(4000) - 1000.0;
                let w = rng.gen_coord(600) + 1.0;
                let h = rng.gen_coord(600) + 1.0;
                Rect::new(x, y, x + w, y + h)
            })
            .collect();
        Self(boxes)
    }
}

impl BoundsSource for ScatteredBoxes {
    type Handle = usize;

    fn bounding_box(&self, handle: usize) -> Option<Rect> {
        self.0.get(handle).copied()
    }
}

fn bench_frame_intersection(c: &mut Criterion) {
    let mut rng = Lcg::new(7);
    let frames: Vec<Frame> = (0..1024)
        .map(|_| {
            Frame::new(
                rng.gen_coord(2000) - 500.0,
                rng.gen_coord(2000) - 500.0,
                rng.gen_coord(500),
                rng.gen_coord(500),
            )
        })
        .collect();
    let viewport = Frame::from_i64(0, 0, 1000, 800);

    c.bench_function("frame_intersection_1024", |b| {
        b.iter(|| {
            let mut hits = 0_u32;
            for frame in &frames {
                if black_box(frame.intersection(viewport)).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });
}

fn bench_compute_states(c: &mut Criterion) {
    let boxes = ScatteredBoxes::generate(512, 42);
    let handles: Vec<usize> = (0..512).collect();
    let viewport = Viewport::new(Frame::from_i64(0, 0, 1000, 800));

    c.bench_function("compute_states_512", |b| {
        b.iter(|| compute_states(black_box(&boxes), &viewport, &handles));
    });

    c.bench_function("is_visible_512_any", |b| {
        b.iter(|| is_visible(black_box(&boxes), &viewport, &handles, 0.5, Combine::Any));
    });
}

criterion_group!(benches, bench_frame_intersection, bench_compute_states);
criterion_main!(benches);
