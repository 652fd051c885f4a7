use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vis4earth_volume_common::{Dimension, VoxelType};
use vis4earth_volume_smooth::{smooth_into, SmoothSettings};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Smooth Volume (128x128x32)");
    let dimension = Dimension::new(128, 128, 32).unwrap();

    for voxel_type in [VoxelType::UInt8, VoxelType::UInt16, VoxelType::Float32] {
        let len = dimension.byte_len(voxel_type);
        // Small values keep every float pattern finite.
        let input: Vec<u8> = (0..len).map(|i| (i % 61) as u8).collect();
        let mut output = vec![0u8; len];
        group.throughput(Throughput::Bytes(len as u64));

        for settings in SmoothSettings::all_combinations() {
            group.bench_with_input(
                BenchmarkId::new(
                    format!("{voxel_type}"),
                    format!("{} {}", settings.kind, settings.dimension),
                ),
                &settings,
                |b, settings| {
                    b.iter(|| {
                        smooth_into(&input, &mut output, dimension, voxel_type, *settings).unwrap()
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
