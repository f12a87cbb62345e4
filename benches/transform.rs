use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multitool::{sort_lines_az, to_camel_case, to_snake_case, tokenize};

fn identifiers() -> String {
    let words = [
        "XMLHttpRequest",
        "parseHTMLString",
        "sha256Hash",
        "user_id",
        "kebab-case-name",
        "Title Words Here",
    ];
    words.iter().cycle().take(6_000).copied().collect::<Vec<_>>().join("\n")
}

fn bench_case(c: &mut Criterion) {
    let text = identifiers();

    c.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(&text)).len()));
    c.bench_function("to_snake_case", |b| b.iter(|| to_snake_case(black_box(&text))));
    c.bench_function("to_camel_case", |b| b.iter(|| to_camel_case(black_box(&text))));
}

fn bench_lines(c: &mut Criterion) {
    let text = identifiers();

    c.bench_function("sort_lines_az", |b| b.iter(|| sort_lines_az(black_box(&text))));
}

criterion_group!(benches, bench_case, bench_lines);
criterion_main!(benches);
