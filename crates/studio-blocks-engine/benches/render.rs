use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use studio_blocks_engine::models::{Document, SiteData};
use studio_blocks_engine::rendering::{
    CdnImageUrlBuilder, RenderMode, RenderSettings, render_document,
};
use studio_blocks_engine::schema::validate_document;
mod common;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let settings = RenderSettings::new(CdnImageUrlBuilder::new("bench", "production"))
        .with_mode(RenderMode::Production);
    let site = SiteData::default();

    for sections in [1, 10, 100] {
        let document: Document = serde_json::from_value(common::generate_page(sections)).unwrap();

        group.bench_with_input(
            BenchmarkId::new("render_document", sections),
            &document,
            |b, document| {
                b.iter(|| std::hint::black_box(render_document(document, &site, &settings)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("validate_document", sections),
            &document,
            |b, document| {
                b.iter(|| std::hint::black_box(validate_document(document)));
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let json = common::generate_page(100).to_string();

    c.bench_function("decode_document", |b| {
        b.iter(|| std::hint::black_box(Document::from_json(&json).unwrap()));
    });
}

criterion_group!(benches, bench_render, bench_decode);
criterion_main!(benches);
