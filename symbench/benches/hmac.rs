// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#[macro_use]
extern crate criterion;
extern crate rand;

mod hmac_benches {
    use super::*;
    use criterion::*;
    use std::io::Cursor;
    use symbench::hmac::{hmac_sha256, HmacKey, HmacSha256, DEFAULT_CHUNK_SIZE};

    fn hmac(c: &mut Criterion) {
        static INPUT_SIZES: [usize; 5] = [0, 128, 1024, 2048, 65536];
        let key = HmacKey::new(b"d8b66c54b3f5cd95115734d90b7c512504d71ce66711ea4ced2f5b41021a4313");

        let mut group: BenchmarkGroup<_> = c.benchmark_group("HMAC-SHA256");

        for size in INPUT_SIZES.iter() {
            let input: Vec<u8> = (0..*size).map(|_| rand::random::<u8>()).collect();
            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(BenchmarkId::new("one-shot", size), &input, |b, input| {
                b.iter(|| hmac_sha256(&key, input))
            });
            group.bench_with_input(BenchmarkId::new("chunked", size), &input, |b, input| {
                b.iter(|| {
                    let mut mac = HmacSha256::new(&key).unwrap();
                    mac.update_reader(Cursor::new(input), DEFAULT_CHUNK_SIZE)
                        .unwrap();
                    mac.finalize()
                })
            });
        }

        let mut mac = HmacSha256::new(&key).unwrap();
        mac.update(&[0u8; 2048]);
        group.bench_function("finalize", |b| {
            b.iter_batched(|| mac.clone(), HmacSha256::finalize, BatchSize::SmallInput)
        });
    }

    criterion_group! {
        name = hmac_benches;
        config = Criterion::default();
        targets = hmac,
    }
}

criterion_main!(hmac_benches::hmac_benches,);
