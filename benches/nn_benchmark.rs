use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_nn::{
    matrix::{ops::Dot, Matrix},
    neural::{optimizer::Optimizer, NeuralNet},
};

fn train_copycat(epochs: usize) {
    let mut net = NeuralNet::new(1, 0, &[], 1, 0.5, 1.0).unwrap();

    let inputs = Matrix::from_array([[0], [1]]).into();
    let targets = Matrix::from_array([[0], [1]]).into();

    let optim = Optimizer::new(epochs);
    assert_eq!(Ok(()), optim.train(&mut net, &inputs, &targets));
}

fn train_or(epochs: usize) {
    let mut net = NeuralNet::new(2, 0, &[], 1, 0.5, 1.0).unwrap();

    let inputs = Matrix::from_array([[0, 0], [1, 1], [0, 1], [1, 0]]).into();
    let targets = Matrix::from_array([[0], [1], [1], [1]]).into();

    let optim = Optimizer::new(epochs);
    assert_eq!(Ok(()), optim.train(&mut net, &inputs, &targets));
}

fn train_wide(epochs: usize) {
    let mut net = NeuralNet::new(2, 2, &[20, 20], 2, 0.1, 1.0).unwrap();

    let inputs = Matrix::from_array([[0, 0], [0, 1], [1, 0], [1, 1]]).into();
    let targets = Matrix::from_array([[0, 0], [1, 0], [1, 0], [0, 1]]).into();

    let optim = Optimizer::new(epochs);
    assert_eq!(Ok(()), optim.train(&mut net, &inputs, &targets));
}

fn predict_all(net: &NeuralNet, inputs: &Matrix<f64>) {
    for i in 0..inputs.rows() {
        assert!(net.predict(&inputs.row_to_vec(i).unwrap()).is_ok());
    }
}

fn square(size: usize) -> Matrix<f64> {
    Matrix::from_raw(size, size, (0..size * size).map(|i| i as f64).collect()).unwrap()
}

fn bench_matrix(c: &mut Criterion) {
    let m1 = square(150);
    let m2 = square(150);

    c.bench_function("add 150x150", |b| {
        b.iter(|| black_box(&m1) + black_box(&m2))
    });
    c.bench_function("dot 150x150", |b| {
        b.iter(|| black_box(&m1).dot(black_box(&m2)))
    });
}

fn bench_predict(c: &mut Criterion) {
    let small = NeuralNet::new(2, 1, &[10], 2, 0.5, 1.0).unwrap();
    let medium = NeuralNet::new(2, 3, &[20, 20, 20], 2, 0.5, 1.0).unwrap();

    let input_small = Matrix::new(10, 2).unwrap();
    let input_medium = Matrix::new(1_000, 2).unwrap();

    c.bench_function("predict small 10 inputs", |b| {
        b.iter(|| predict_all(black_box(&small), black_box(&input_small)))
    });
    c.bench_function("predict small 1,000 inputs", |b| {
        b.iter(|| predict_all(black_box(&small), black_box(&input_medium)))
    });

    c.bench_function("predict medium 10 inputs", |b| {
        b.iter(|| predict_all(black_box(&medium), black_box(&input_small)))
    });
    c.bench_function("predict medium 1,000 inputs", |b| {
        b.iter(|| predict_all(black_box(&medium), black_box(&input_medium)))
    });
}

fn bench_train(c: &mut Criterion) {
    c.bench_function("copycat 10 epochs", |b| {
        b.iter(|| train_copycat(black_box(10)))
    });
    c.bench_function("or 10 epochs", |b| b.iter(|| train_or(black_box(10))));
    c.bench_function("or 1,000 epochs", |b| {
        b.iter(|| train_or(black_box(1_000)))
    });
    c.bench_function("wide 100 epochs", |b| {
        b.iter(|| train_wide(black_box(100)))
    });
}

criterion_group!(benches, bench_matrix, bench_predict, bench_train);
criterion_main!(benches);
