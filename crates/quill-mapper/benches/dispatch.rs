//! Registry dispatch benchmark.
//!
//! Measures the overhead of type-directed dispatch and context threading
//! over a hand-written field copy.
//!
//! ```bash
//! cargo bench --package quill-mapper
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quill_mapper::{Mapper, MapperBuilder};

#[derive(Debug, Clone)]
struct Tag {
    id: i32,
    text: String,
    group: String,
    node_count: u64,
}

#[derive(Debug, Clone, Default)]
struct TagModel {
    id: i32,
    text: String,
    group: String,
    node_count: u64,
}

fn sample_tag() -> Tag {
    Tag {
        id: 5,
        text: "blue".to_string(),
        group: "colors".to_string(),
        node_count: 3,
    }
}

fn build_mapper() -> Mapper {
    let mut builder = MapperBuilder::new();
    builder
        .define_with_ctor(
            |_source: &Tag, _context| TagModel::default(),
            |source, target: &mut TagModel, _context| {
                target.id = source.id;
                target.text = source.text.clone();
                target.group = source.group.clone();
                target.node_count = source.node_count;
                Ok(())
            },
        )
        .expect("tag definition registers once");
    builder.build()
}

fn bench_dispatch(c: &mut Criterion) {
    let mapper = build_mapper();
    let tag = sample_tag();

    c.bench_function("mapper_dispatch_single", |b| {
        b.iter(|| {
            let model: TagModel = mapper.map(black_box(&tag)).expect("registered pair");
            black_box(model)
        });
    });

    let tags: Vec<Tag> = (0..100)
        .map(|i| Tag {
            id: i,
            ..sample_tag()
        })
        .collect();

    c.bench_function("mapper_dispatch_iter_100", |b| {
        b.iter(|| {
            let models: Vec<TagModel> = mapper.map_iter(black_box(tags.iter())).expect("registered pair");
            black_box(models)
        });
    });

    c.bench_function("hand_written_copy", |b| {
        b.iter(|| {
            let source = black_box(&tag);
            black_box(TagModel {
                id: source.id,
                text: source.text.clone(),
                group: source.group.clone(),
                node_count: source.node_count,
            })
        });
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
