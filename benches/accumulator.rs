use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rsacc::hash_to_prime::hash_to_prime;
use rsacc::random::random_member;
use rsacc::{Accumulator, Member, Params};
use rug::Integer;
use sha2::Sha256;

fn filled(size: usize, rng: &mut StdRng) -> (Accumulator, Vec<Member>) {
    let mut acc = Accumulator::with_params(Params::rsa2048(), rng);
    let members: Vec<Member> = (0..size).map(|_| random_member(rng)).collect();
    for member in &members {
        acc.add(member.clone()).unwrap();
    }
    (acc, members)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    static SIZES: &[usize] = &[1, 10, 100];
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("hash_to_prime", |b| {
        b.iter_batched(
            || random_member(&mut rng),
            |member| hash_to_prime::<Sha256>(member.as_ref(), 128, &Integer::ZERO),
            BatchSize::SmallInput,
        );
    });

    // add one member to an accumulator with N members
    let mut group = c.benchmark_group("add");
    group.sample_size(10);
    for s in SIZES.iter() {
        let (acc, _) = filled(*s, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(s), &acc, |b, acc| {
            b.iter_batched(
                || (acc.clone(), random_member(&mut rng)),
                |(mut acc, member)| acc.add(black_box(member)),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    // prove and delete both rebuild from A0
    let mut group = c.benchmark_group("prove");
    group.sample_size(10);
    for s in SIZES.iter() {
        let (acc, members) = filled(*s, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(s), &acc, |b, acc| {
            b.iter(|| acc.prove_membership(black_box(&members[0])));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("delete");
    group.sample_size(10);
    for s in SIZES.iter() {
        let (acc, members) = filled(*s, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(s), &acc, |b, acc| {
            b.iter_batched(
                || acc.clone(),
                |mut acc| acc.delete(black_box(&members[0])),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
