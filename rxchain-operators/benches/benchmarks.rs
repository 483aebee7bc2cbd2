// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0


use chain_bench::{bench_filter_map_chain, bench_subject_fan_out};
use criterion::{criterion_group, criterion_main};

criterion_group!(operator_benches, bench_filter_map_chain, bench_subject_fan_out);
criterion_main!(operator_benches);
