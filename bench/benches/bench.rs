use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fluent_uri_builder::{Template, UriBuilder};
use std::collections::BTreeMap;

criterion_group!(
    benches,
    bench_parse,
    bench_build,
    bench_build_templated,
    bench_substitute,
);
criterion_main!(benches);

const BASE: &str = "https://user@example.com:8443/api/v1/{org}?format=json#top";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| UriBuilder::parse(black_box(BASE))));
}

fn bench_build(c: &mut Criterion) {
    let builder = UriBuilder::parse("https://example.com/search").unwrap();
    c.bench_function("build", |b| b.iter(|| black_box(&builder).build()));
}

fn bench_build_templated(c: &mut Criterion) {
    let mut builder = UriBuilder::parse(BASE).unwrap();
    builder
        .with_segment("org", "rust-lang")
        .add_path_template("repos/{repo}/issues/{id}")
        .unwrap()
        .with_segment("repo", "rust")
        .with_segment("id", "12345")
        .add_queries([("state", "open"), ("q", "fish & chips"), ("page", "2")])
        .unwrap();

    c.bench_function("build_templated", |b| {
        b.iter(|| black_box(&builder).build())
    });
}

fn bench_substitute(c: &mut Criterion) {
    let template = Template::new("/{a}/x/{b}/y/{c}/{missing}/z").unwrap();
    let bindings: BTreeMap<String, String> = [("a", "1"), ("b", "22"), ("c", "333")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

    c.bench_function("substitute", |b| {
        b.iter(|| black_box(template).substitute(black_box(&bindings)))
    });
}
