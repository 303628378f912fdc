//! Benchmarks for carousel transitions and frame drawing
//!
//! Run with: cargo bench carousel

use showcase::model::CarouselState;
use showcase::view::{Frame, Rect};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Transitions
// ============================================================================

#[divan::bench(args = [3, 10, 100])]
fn full_lap_forward(count: usize) {
    let mut carousel = CarouselState::new(count);
    for _ in 0..count {
        carousel.next();
    }
    divan::black_box(carousel.current());
}

#[divan::bench(args = [3, 10, 100])]
fn offsets_projection(count: usize) {
    let carousel = CarouselState::new(count);
    divan::black_box(carousel.offsets());
}

// ============================================================================
// Drawing primitives
// ============================================================================

#[divan::bench]
fn clear_800x600() {
    let mut buf = vec![0u32; 800 * 600];
    let mut frame = Frame::new(&mut buf, 800, 600);
    frame.clear(0xFF101216);
    divan::black_box(&buf);
}

#[divan::bench]
fn blit_scaled_half_window() {
    let pixels = vec![0x80u8; 640 * 480 * 4];
    let mut buf = vec![0u32; 800 * 600];
    let mut frame = Frame::new(&mut buf, 800, 600);
    frame.blit_scaled_rgba(&pixels, 640, 480, Rect::new(80.0, 60.0, 400.0, 300.0));
    divan::black_box(&buf);
}

#[divan::bench]
fn dot_row_discs() {
    let mut buf = vec![0u32; 800 * 600];
    let mut frame = Frame::new(&mut buf, 800, 600);
    for i in 0..8 {
        frame.fill_disc(300.0 + i as f32 * 18.0, 570.0, 5.0, 0xFFE0E0E0, 0.5);
    }
    divan::black_box(&buf);
}
