use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyphstack::{Attr, CharPixel, FillLayer, Frame, GridLayer, Layer, OutputBuffer, Rgba, Vector2};

fn build_stack() -> (FillLayer, Vec<GridLayer>) {
    let backdrop = FillLayer::new(
        Vector2::ZERO,
        80,
        24,
        CharPixel::opaque(' ', Rgba::TERMINAL_DEFAULT, Rgba::from_rgb_int(0x282a36), Attr::NONE),
    );

    // Eight small panels scattered over the frame - the sparse-layer case
    // the top-down scan is built for.
    let mut panels = Vec::new();
    for i in 0..8u16 {
        let mut panel = GridLayer::new(Vector2::new((i as i32 * 9) % 60, (i as i32 * 3) % 18), 12, 5);
        panel.fill(CharPixel::opaque('#', Rgba::WHITE, Rgba::BLACK, Attr::NONE));
        panel.draw_text(1, 1, "panel", Rgba::CYAN, Rgba::BLACK, Attr::BOLD);
        panels.push(panel);
    }
    (backdrop, panels)
}

fn bench_full_scan(c: &mut Criterion) {
    let (backdrop, panels) = build_stack();
    let mut layers: Vec<&dyn Layer> = vec![&backdrop];
    layers.extend(panels.iter().map(|p| p as &dyn Layer));
    let frame = Frame::new(&layers).unwrap();

    c.bench_function("composite_80x24_9_layers", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for (_, _, px) in frame.cells() {
                if !px.is_transparent() {
                    count += 1;
                }
            }
            black_box(count)
        })
    });
}

fn bench_single_cell(c: &mut Criterion) {
    let (backdrop, panels) = build_stack();
    let mut layers: Vec<&dyn Layer> = vec![&backdrop];
    layers.extend(panels.iter().map(|p| p as &dyn Layer));
    let frame = Frame::new(&layers).unwrap();

    c.bench_function("char_at_worst_case", |b| {
        // A coordinate only the backdrop covers: scans the whole stack.
        b.iter(|| black_box(frame.char_at(black_box(79), black_box(23))))
    });
}

fn bench_diff_unchanged(c: &mut Criterion) {
    let (backdrop, panels) = build_stack();
    let mut layers: Vec<&dyn Layer> = vec![&backdrop];
    layers.extend(panels.iter().map(|p| p as &dyn Layer));
    let frame = Frame::new(&layers).unwrap();

    let mut buffer = OutputBuffer::new();
    buffer.diff(&frame);

    c.bench_function("diff_unchanged_frame", |b| {
        b.iter(|| black_box(buffer.diff(&frame).len()))
    });
}

criterion_group!(benches, bench_full_scan, bench_single_cell, bench_diff_unchanged);
criterion_main!(benches);
