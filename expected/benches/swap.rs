//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use std::collections::hash_map::RandomState;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expected::{wrap, Expected, HashAdapter};
use rand::{Rng, SeedableRng};

const N: usize = 100000;

fn containers(rng: &mut rand::rngs::StdRng) -> Vec<Expected<u64, String>> {
    (0..N)
        .map(|_| {
            if rng.gen_bool(0.5) {
                Expected::new(rng.gen())
            } else {
                Expected::from(wrap(format!("error {}", rng.gen::<u8>())))
            }
        })
        .collect()
}

fn bench_swap(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let mut expected = containers(&mut rng);
    let mut results: Vec<Result<u64, String>> = expected
        .iter()
        .map(|e| e.as_result().map(|v| *v).map_err(Clone::clone))
        .collect();
    // Swaps across branches about half of the time.
    c.bench_function("expected_swap", |b| {
        b.iter(|| {
            for i in 1..expected.len() {
                let (head, tail) = expected.split_at_mut(i);
                head[i - 1].swap(&mut tail[0]);
            }
        })
    });
    c.bench_function("std_swap", |b| {
        b.iter(|| {
            for i in 1..results.len() {
                results.swap(i - 1, i);
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let expected = containers(&mut rng);
    c.bench_function("expected_lt", |b| {
        b.iter(|| {
            expected
                .windows(2)
                .filter(|w| black_box(&w[0]) < black_box(&w[1]))
                .count()
        })
    });
    c.bench_function("expected_eq", |b| {
        b.iter(|| {
            expected
                .windows(2)
                .filter(|w| black_box(&w[0]) == black_box(&w[1]))
                .count()
        })
    });
}

fn bench_hash(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2);
    let expected = containers(&mut rng);
    let adapter = HashAdapter::new(RandomState::new());
    c.bench_function("expected_hash", |b| {
        b.iter(|| {
            expected
                .iter()
                .fold(0u64, |acc, e| acc ^ adapter.hash(black_box(e)))
        })
    });
}

criterion_group!(benches, bench_swap, bench_compare, bench_hash);
criterion_main!(benches);
