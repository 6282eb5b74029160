use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rendiation_dense_algebra::Matrix;

fn hilbert_like(n: usize) -> Matrix<f64> {
  let mut m = Matrix::new();
  for x in 0..n {
    for y in 0..n {
      m.set(x, y, 1. / (x + y + 1) as f64 + if x == y { 1. } else { 0. });
    }
  }
  m
}

fn criterion_benchmark(c: &mut Criterion) {
  for n in [3, 5, 7] {
    let m = hilbert_like(n);

    c.bench_function(&format!("laplace determinant {n}x{n}"), |b| {
      b.iter(|| black_box(m.clone()).determinant())
    });

    c.bench_function(&format!("adjugate inverse {n}x{n}"), |b| {
      b.iter(|| black_box(m.clone()).inverse())
    });
  }

  let a = hilbert_like(16);
  c.bench_function("product 16x16", |b| {
    b.iter(|| black_box(&a).product_on_matrix(black_box(&a)))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
