use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fhe_timing::{Context, Evaluator, DEFAULT_128_BITS_PARAMETERS};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    // set random generator
    let mut rng = rand::thread_rng();

    // set parameter
    let params = *DEFAULT_128_BITS_PARAMETERS;
    let t = params.message_modulus();

    // generate keys
    let context = Context::new(params);
    println!("Key Generation done!\n");

    let evaluator = Evaluator::new(&context);

    let values: Vec<u64> = (0..4).map(|_| rng.gen_range(0..t)).collect();
    let ct = context.encrypt_slots(&values);

    c.bench_function("multiply", |b| {
        b.iter(|| {
            let mut ct = black_box(ct.clone());
            evaluator.square_assign(&mut ct);
        })
    });

    c.bench_function("refresh", |b| {
        b.iter(|| {
            let mut ct = black_box(ct.clone());
            evaluator.refresh_assign(&mut ct);
        })
    });

    c.bench_function("extract", |b| {
        b.iter(|| {
            let mut ct = black_box(ct.clone());
            evaluator.extract_message_assign(&mut ct);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
