// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#[macro_use]
extern crate criterion;
extern crate rand;

mod aes_gcm_benches {
    use super::*;
    use criterion::*;
    use rand::{rngs::StdRng, RngCore, SeedableRng};
    use symbench::aes::{parse_nonce, AesGcmCipher, AuthenticatedCipher};

    fn round_trip_single<M: measurement::Measurement>(
        name: &str,
        key_size: usize,
        input: &[u8],
        c: &mut BenchmarkGroup<M>,
    ) {
        let mut rng = StdRng::from_seed([9; 32]);
        let mut key = vec![0u8; key_size];
        rng.fill_bytes(&mut key);
        let mut nonce = [0u8; 12];
        rng.fill_bytes(&mut nonce);

        let cipher = AesGcmCipher::new(&key).unwrap();
        let iv = parse_nonce(&nonce).unwrap();
        let sealed = cipher.encrypt_detached(&iv, b"", input).unwrap();

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_with_input(
            BenchmarkId::new(format!("{name} encrypt"), input.len()),
            &input,
            |b, input| {
                b.iter_batched(
                    || input.to_vec(),
                    |mut buffer| cipher.encrypt_in_place_detached(&iv, b"", &mut buffer),
                    BatchSize::SmallInput,
                )
            },
        );
        c.bench_with_input(
            BenchmarkId::new(format!("{name} decrypt"), input.len()),
            &sealed,
            |b, sealed| {
                b.iter_batched(
                    || sealed.ciphertext.clone(),
                    |mut buffer| {
                        cipher.decrypt_in_place_detached(&iv, b"", &mut buffer, &sealed.tag)
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    fn aes_gcm(c: &mut Criterion) {
        static INPUT_SIZES: [usize; 5] = [0, 1024, 2048, 16384, 1048576];

        let mut group: BenchmarkGroup<_> = c.benchmark_group("AES-GCM");

        for size in INPUT_SIZES.iter() {
            let input: Vec<u8> = (0..*size).map(|_| rand::random::<u8>()).collect();
            round_trip_single("AES-128-GCM", 16, &input, &mut group);
            round_trip_single("AES-192-GCM", 24, &input, &mut group);
            round_trip_single("AES-256-GCM", 32, &input, &mut group);
        }
    }

    criterion_group! {
        name = aes_gcm_benches;
        config = Criterion::default();
        targets = aes_gcm,
    }
}

criterion_main!(aes_gcm_benches::aes_gcm_benches,);
