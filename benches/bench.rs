use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ds3::{
    path::{build_path, join_paths},
    signing::{CanonicalRequest, sign},
};

const DATE: &str = "Tue, 15 Nov 1994 08:12:31 GMT";
const KEY: &str = "SECRETKEYEXAMPLE";

fn bench_signing(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing");
    group.measurement_time(Duration::from_secs(3));

    for (label, resource) in [
        ("bucket", "/my-bucket"),
        ("object", "/my-bucket/a/b/c/object.txt"),
        ("bulk_put", "/my-bucket/?start-bulk-put"),
    ] {
        let canonical = CanonicalRequest::new("PUT", DATE, resource)
            .with_content_type(ds3::OCTET_STREAM);

        group.bench_function(BenchmarkId::new("string_to_sign", label), |b| {
            b.iter(|| black_box(canonical.string_to_sign()));
        });

        group.bench_function(BenchmarkId::new("signature", label), |b| {
            b.iter(|| black_box(canonical.signature(black_box(KEY))));
        });
    }

    for size in [32usize, 1024, 64 * 1024] {
        let message = vec![b'a'; size];
        group.bench_with_input(BenchmarkId::new("sign", size), &message, |b, input| {
            b.iter(|| black_box(sign(KEY, black_box(input))));
        });
    }

    group.finish();
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("paths");
    group.measurement_time(Duration::from_secs(3));

    group.bench_function("join_paths", |b| {
        b.iter(|| black_box(join_paths(black_box("/my-bucket/"), black_box("/a/b/c.txt"))));
    });

    let query = vec![
        ("prefix".to_string(), "logs/2024/".to_string()),
        ("max-keys".to_string(), "1000".to_string()),
        ("marker".to_string(), "logs/2024/01.gz".to_string()),
    ];
    group.bench_function("build_path", |b| {
        b.iter(|| black_box(build_path(black_box("/my-bucket"), black_box(&query))));
    });

    group.finish();
}

criterion_group!(benches, bench_signing, bench_paths);
criterion_main!(benches);
