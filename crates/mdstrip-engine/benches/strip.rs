use criterion::{Criterion, criterion_group, criterion_main};
use mdstrip_engine::{StripOptions, strip, strip_line};

fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet with [a link](https://example.com)\n  - Nested ![image](img.png)\n1. Ordered <em>item</em>\n\n---\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> Quote with ~~strike~~ and \\* escape\n\n[ref]: https://example.com\n\n";
    base.repeat(size)
}

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip");
    group.sample_size(20);

    let content = generate_markdown_content(500);
    group.bench_function("document_default", |b| {
        b.iter(|| strip(std::hint::black_box(&content), &StripOptions::default()));
    });

    let options = StripOptions::default()
        .with_keep_links(true)
        .with_keep_code(true);
    group.bench_function("document_keep_all", |b| {
        b.iter(|| strip(std::hint::black_box(&content), &options));
    });

    group.bench_function("single_line", |b| {
        let line = "- **Bold** and *italic* with [link](https://example.com) and `code`";
        b.iter(|| strip_line(std::hint::black_box(line), &StripOptions::default()));
    });

    group.finish();
}

criterion_group!(benches, bench_strip);
criterion_main!(benches);
