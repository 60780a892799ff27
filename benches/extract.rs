// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use laptop_market::config::consts::{CARD_CLASS, PRICE_CLASS, REVIEWS_CLASS, TITLE_CLASS};
use laptop_market::extract::extract_capacity;
use laptop_market::specs::listing_page::{parse_doc, Markers};

const TITLES: [&str; 4] = [
    "Asus Vivobook 15 X1502ZA Intel Core i5 1235U 16GB 512GB SSD 15.6\" FHD Windows 11",
    "Lenovo IdeaPad Slim 3 AMD Ryzen 7 7730U 16 GB RAM 1 TB SSD 15.6 inç",
    "Apple MacBook Air M2 8GB 256GB SSD macOS 13\" Taşınabilir Bilgisayar",
    "HP Victus 16 Intel Core i7 13700H 32GB 1TB SSD RTX4060 16.1\" FHD 144Hz",
];

/// Synthetic category page with `n` cards cycling through `TITLES`.
fn sample_page(n: usize) -> String {
    let mut doc = String::from("<html><body><ul>");
    for i in 0..n {
        doc.push_str(&format!(
            r#"<li class="{CARD_CLASS} extra"><div><a href="/p/{i}"><h3 class="{TITLE_CLASS}">{}</h3></a>
<div class="{PRICE_CLASS}">{}.999,00 TL</div><span class="{REVIEWS_CLASS}">({})</span></div></li>"#,
            TITLES[i % TITLES.len()],
            20 + i % 30,
            i * 7 % 500,
        ));
    }
    doc.push_str("</ul></body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_capacity", |b| {
        b.iter(|| {
            for t in TITLES {
                black_box(extract_capacity(black_box(t)));
            }
        })
    });

    let doc = sample_page(48);
    let markers = Markers::default();
    c.bench_function("parse_listing_page", |b| {
        b.iter(|| {
            let rows = parse_doc(black_box(&doc), &markers);
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
