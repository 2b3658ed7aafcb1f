//! Extract palettes from a synthesized image with both engines.
//!
//! Run with `RUST_LOG=warn` to see the soft no-op diagnostics.

use swatch::{quant, rgb_from_rgba, rgb_to_hex, theme_mode};

fn main() {
    env_logger::init();

    // 64x64 RGBA color sweep standing in for a decoded image
    let mut data = Vec::with_capacity(64 * 64 * 4);
    for y in 0..64u32 {
        for x in 0..64u32 {
            data.extend_from_slice(&[(x * 4) as u8, (y * 4) as u8, 128, 255]);
        }
    }
    let pixels = rgb_from_rgba(&data).expect("buffer length is a multiple of 4");

    let cmap = quant::quantize(&pixels, 16);
    println!("median cut ({} colors):", cmap.len());
    for (color, count) in cmap.palette_with_counts() {
        println!("  {}  x{}", rgb_to_hex(color), count);
    }

    let octree = quant::octree_quantize(&pixels, 16);
    println!("octree ({} colors):", octree.len());
    for (color, count) in octree.palette_with_counts() {
        println!("  {}  x{}", rgb_to_hex(color), count);
    }

    println!("theme: {:?}", theme_mode(&cmap.palette()));

    // out-of-range color targets degrade to an empty palette
    let empty = quant::quantize(&pixels, 300);
    println!("max_colors=300 -> {} colors", empty.len());
}
