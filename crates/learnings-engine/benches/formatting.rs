use criterion::{Criterion, criterion_group, criterion_main};
use learnings_engine::{PostStore, parse_content, render_nodes};

fn generate_post_body(size: usize) -> String {
    let base = "## Section\n\nParagraph with **bold**, _italic_, ==marks== and a [link](https://example.com).\n\n- Bullet point with `code`\n- Another item at www.example.com\n\n> NOTE: keep it short\n> really\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    format!("# Title\n\n{}", base.repeat(size))
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.sample_size(10);

    let content = generate_post_body(100);
    group.bench_function("parse_content", |b| {
        b.iter(|| {
            let nodes = parse_content(std::hint::black_box(&content));
            std::hint::black_box(nodes);
        });
    });

    let nodes = parse_content(&content);
    group.bench_function("render_nodes", |b| {
        b.iter(|| std::hint::black_box(render_nodes(std::hint::black_box(&nodes))));
    });

    let store = PostStore::builtin();
    group.bench_function("builtin_posts", |b| {
        b.iter(|| {
            for post in store.posts() {
                std::hint::black_box(post.nodes());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_formatting);
criterion_main!(benches);
