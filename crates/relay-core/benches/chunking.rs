use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relay_core::{chunk_layout, chunk_text, ChunkingOptions, Line};

/// A long note: topics with nested details and sub-details
fn layout_note(topics: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    for t in 0..topics {
        let jitter = (t % 7) as i32;
        lines.push(Line::new(format!("Thema {t}"), 20 + jitter, 0));
        for d in 0..4 {
            lines.push(Line::new(format!("Detail {t}.{d}"), 80 - jitter, 0));
            lines.push(Line::new(format!("Notiz {t}.{d}"), 140 + jitter, 0));
        }
    }
    lines
}

fn flat_note(paragraphs: usize) -> String {
    let mut text = String::new();
    for p in 0..paragraphs {
        text.push_str(&format!("Absatz {p} erste Zeile\n  zweite Zeile  \r\n\n"));
    }
    text
}

fn bench_layout(c: &mut Criterion) {
    let lines = layout_note(500);
    let options = ChunkingOptions::default();

    c.bench_function("chunk_layout_4500_lines", |b| {
        b.iter(|| chunk_layout(black_box(&lines), &options))
    });
}

fn bench_flat(c: &mut Criterion) {
    let text = flat_note(1500);

    c.bench_function("chunk_text_1500_paragraphs", |b| {
        b.iter(|| chunk_text(black_box(&text)))
    });
}

criterion_group!(benches, bench_layout, bench_flat);
criterion_main!(benches);
