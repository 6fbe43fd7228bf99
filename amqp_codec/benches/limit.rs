#![allow(clippy::all)]

use amqp_codec::{dynamic::DynamicType, types::*};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{
    distributions::{Alphanumeric, DistString},
    Rng,
};

/// A list of random scalars and strings, returns its limit
fn mixed_list(buffer: &mut [u8]) -> usize {
    let mut rng = rand::thread_rng();
    let mut list = ListType::wrap(&mut buffer[..], 0);
    list.max_length(u32::MAX).unwrap().clear().unwrap();
    let mut index = list.body_offset().unwrap();

    for _ in 0..32 {
        let mut ulong = ULongType::wrap(&mut buffer[..], index);
        ulong.set(rng.gen()).unwrap();
        index = ulong.limit().unwrap();

        let mut int = IntType::wrap(&mut buffer[..], index);
        int.set(rng.gen_range(-200..200)).unwrap();
        index = int.limit().unwrap();

        let len = rng.gen_range(1..300);
        let value = Alphanumeric.sample_string(&mut rng, len);
        let mut string = StringType::wrap(&mut buffer[..], index);
        string.set(&value).unwrap();
        index = string.limit().unwrap();
    }

    let mut list = ListType::wrap(&mut buffer[..], 0);
    list.set_limit(96, index).unwrap();
    index
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut buffer = vec![0u8; 32 * 1024];
    let limit = mixed_list(&mut buffer);

    c.bench_function("dynamic limit of list", |b| {
        b.iter(|| {
            DynamicType::wrap(black_box(&buffer[..]), 0)
                .limit()
                .unwrap()
        })
    });

    c.bench_function("walk list elements", |b| {
        b.iter(|| {
            let list = ListType::wrap(black_box(&buffer[..]), 0);
            list.iter()
                .unwrap()
                .map(|e| e.unwrap().limit().unwrap())
                .last()
        })
    });

    c.bench_function("walk values by limit", |b| {
        b.iter(|| {
            let start = ListType::wrap(&buffer[..], 0).body_offset().unwrap();
            let mut index = start;
            while index < limit {
                index = DynamicType::wrap(black_box(&buffer[..]), index)
                    .limit()
                    .unwrap();
            }
            index
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
