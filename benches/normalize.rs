// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use yokai_scrape::scrape;

fn sample_doc() -> String {
    let mut html = String::new();
    for t in 0..12 {
        html.push_str(
            r#"<table class="main roundy"><tr><th>No.</th><th>Image</th><th>Name</th><th>Rank</th><th>Tribe</th></tr>"#,
        );
        for r in 0..25 {
            let no = t * 25 + r + 1;
            html.push_str(&format!(
                r#"<tr><td>{no}</td><td><img src="m.png"></td><td><a href="/wiki/Y{no}">Yokai {no}</a></td><td><img alt="Rank C icon"></td><td><img alt="Brave Tribe"></td></tr>"#
            ));
        }
        html.push_str("</table>");
    }
    html
}

fn bench_collect(c: &mut Criterion) {
    let doc = sample_doc();

    c.bench_function("collect_from_html", |b| {
        b.iter(|| {
            let data = scrape::collect_from_html(black_box(&doc), None);
            black_box(data.yokai.len())
        })
    });
}

criterion_group!(benches, bench_collect);
criterion_main!(benches);
