use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vis4earth_volume_common::{AxisSpec, Dimension, VoxelType};
use vis4earth_volume_transform::reorient_into;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reorient Volume (256x256x64)");
    let dimension = Dimension::new(256, 256, 64).unwrap();

    for voxel_type in [VoxelType::UInt8, VoxelType::UInt16, VoxelType::Float32] {
        let len = dimension.byte_len(voxel_type);
        let input: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let mut output = vec![0u8; len];
        group.throughput(Throughput::Bytes(len as u64));

        for axis in [[1, 2, 3], [-1, 2, 3], [2, 1, 3], [3, -2, 1]] {
            let spec = AxisSpec::new(axis).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{voxel_type}"), spec),
                &spec,
                |b, spec| {
                    b.iter(|| {
                        reorient_into(&input, &mut output, dimension, voxel_type, *spec).unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
