//! Visual Randomness Generator example.
//!
//! Renders one greyscale PPM per one-shot branch so structure left by a
//! weak path would show up as visible patterns. Each pixel is the low byte
//! of the hash of its (x, y) coordinates, spread over an input whose length
//! selects the branch:
//!
//! | Image                         | Length | Branch                        |
//! |-------------------------------|--------|-------------------------------|
//! | `komihash_short_7.ppm`        | 7      | `< 8`, single padded word     |
//! | `komihash_short_15.ppm`       | 15     | `8..16`, word + padded word   |
//! | `komihash_medium_24.ppm`      | 24     | `16..32`, one 16-byte round   |
//! | `komihash_epilogue_48.ppm`    | 48     | `32..64`, epilogue only       |
//! | `komihash_bulk_256.ppm`       | 256    | `>= 64`, eight-lane bulk loop |

#![allow(clippy::pedantic, clippy::nursery)]

use std::fs::File;
use std::io::{BufWriter, Write};

const SIDE: u32 = 512;

const IMAGES: [(&str, usize); 5] = [
    ("komihash_short_7.ppm", 7),
    ("komihash_short_15.ppm", 15),
    ("komihash_medium_24.ppm", 24),
    ("komihash_epilogue_48.ppm", 48),
    ("komihash_bulk_256.ppm", 256),
];

/// Place the coordinates at both ends of the input so the first and the
/// last word read by every branch depend on the pixel.
fn coordinate_input(buf: &mut [u8], x: u32, y: u32) {
    let coord = (u64::from(y) << 32 | u64::from(x)).to_le_bytes();
    let len = buf.len();
    let head = len.min(8);
    buf[..head].copy_from_slice(&coord[..head]);
    if len > 8 {
        let tail = (len - 8).min(8);
        buf[len - tail..].copy_from_slice(&coord[8 - tail..]);
    }
}

fn render(path: &str, len: usize) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P5\n{SIDE} {SIDE}\n255\n")?;

    let mut input = vec![0u8; len];
    let mut row = Vec::with_capacity(SIDE as usize);
    for y in 0..SIDE {
        row.clear();
        for x in 0..SIDE {
            coordinate_input(&mut input, x, y);
            row.push(komihash::hash(&input).to_le_bytes()[0]);
        }
        out.write_all(&row)?;
    }
    out.flush()
}

fn main() -> std::io::Result<()> {
    for (path, len) in IMAGES {
        println!(" Rendering {path} ({len}-byte inputs)...");
        render(path, len)?;
    }
    println!("✅ Done! Generated {} images.", IMAGES.len());
    Ok(())
}
