use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use holdem_rank::core::{Hand, Rankable};

fn bench_rank_five(c: &mut Criterion) {
    let hands: Vec<Hand> = [
        "CT CJ CQ CK CA",
        "H2 SQ C2 D2 CQ",
        "H5 SQ C5 DT CT",
        "H3 S8 H5 DK CA",
    ]
    .iter()
    .map(|s| Hand::new_from_str(s).unwrap())
    .collect();

    c.bench_function("rank_five", |b| {
        b.iter(|| {
            for hand in &hands {
                let _ = black_box(black_box(hand).rank());
            }
        })
    });
}

fn bench_rank_seven(c: &mut Criterion) {
    let hands: Vec<Hand> = [
        "H2 H3 H4 H5 H9 C6 HK",
        "H2 D2 D8 S8 DK SK H4",
        "HT SQ ST DT CT C2 D9",
        "H3 S8 H5 DK CA C4 D9",
    ]
    .iter()
    .map(|s| Hand::new_from_str(s).unwrap())
    .collect();

    c.bench_function("rank_seven", |b| {
        b.iter(|| {
            for hand in &hands {
                let _ = black_box(black_box(hand).rank());
            }
        })
    });
}

criterion_group!(benches, bench_rank_five, bench_rank_seven);
criterion_main!(benches);
