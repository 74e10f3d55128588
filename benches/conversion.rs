use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matbridge::{
    decode, encode, MatArray, MatData, ScriptTable, ScriptValue, StructFields, Tensor, TensorData,
};

fn benchmark_decode_double_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_double_array");

    for size in [64usize, 4096, 65536].iter() {
        let array = MatArray::from_parts(
            vec![*size / 8, 8],
            MatData::Double(vec![1.0; *size]),
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &array, |b, array| {
            b.iter(|| decode(black_box(array)))
        });
    }

    group.finish();
}

fn benchmark_encode_double_tensor(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_double_tensor");

    for size in [64usize, 4096, 65536].iter() {
        let tensor = Tensor::from_data(
            TensorData::Double(vec![1.0; *size]),
            vec![*size / 8, 8],
        )
        .unwrap();
        let value = ScriptValue::Tensor(tensor);

        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }

    group.finish();
}

fn benchmark_encode_transposed_tensor(c: &mut Criterion) {
    // Forces the contiguity-normalization path.
    let side = 256usize;
    let view = Tensor::with_strides(
        TensorData::Double(vec![1.0; side * side]),
        vec![side, side],
        vec![1, side],
    )
    .unwrap();
    let value = ScriptValue::Tensor(view);

    c.bench_function("encode_transposed_tensor", |b| {
        b.iter(|| encode(black_box(&value)))
    });
}

fn benchmark_encode_keyed_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_keyed_table");

    for size in [10usize, 100, 1000].iter() {
        let mut table = ScriptTable::new();
        for i in 0..*size {
            table.insert(format!("field_{}", i), ScriptValue::from("payload"));
        }
        let value = ScriptValue::Table(table);

        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }

    group.finish();
}

fn benchmark_decode_struct(c: &mut Criterion) {
    let mut fields = StructFields::new();
    for i in 0..100 {
        fields.insert(
            format!("field_{}", i),
            vec![Some(MatArray::scalar_f64(i as f64))],
        );
    }
    let array = MatArray::from_parts(vec![1, 1], MatData::Struct(fields)).unwrap();

    c.bench_function("decode_struct_100_fields", |b| {
        b.iter(|| decode(black_box(&array)))
    });
}

criterion_group!(
    benches,
    benchmark_decode_double_array,
    benchmark_encode_double_tensor,
    benchmark_encode_transposed_tensor,
    benchmark_encode_keyed_table,
    benchmark_decode_struct
);
criterion_main!(benches);
