//! Boundary behavior of the transforms on full images.
//!
//! The blur is checked against an explicit corner/edge/interior
//! classification, written out case by case, over many image shapes.

use bmpfx_core::{Bgr8, Image};
use bmpfx_ops::{color, filter, transform, Filter};

fn pattern(width: usize, height: usize) -> Image {
    Image::from_fn(width, height, |r, c| {
        Bgr8::new(
            ((r * 37 + c * 11) % 256) as u8,
            ((r * 5 + c * 53 + 7) % 256) as u8,
            ((r * c * 3 + 101) % 256) as u8,
        )
    })
    .unwrap()
}

/// Blur by enumerating the nine position classes. Only valid for images of
/// at least 2x2, like the classification it spells out.
fn blur_by_cases(img: &Image) -> Image {
    let (w, h) = img.dimensions();
    assert!(w >= 2 && h >= 2);
    let at = |r: usize, c: usize| img.get(r, c).unwrap().widen();

    Image::from_fn(w, h, |x, y| {
        let top = x == 0;
        let bottom = x == h - 1;
        let left = y == 0;
        let right = y == w - 1;

        let (rows, cols): (Vec<usize>, Vec<usize>) = match (top, bottom, left, right) {
            (true, _, true, _) => (vec![x, x + 1], vec![y, y + 1]),
            (true, _, _, true) => (vec![x, x + 1], vec![y - 1, y]),
            (_, true, true, _) => (vec![x - 1, x], vec![y, y + 1]),
            (_, true, _, true) => (vec![x - 1, x], vec![y - 1, y]),
            (true, _, _, _) => (vec![x, x + 1], vec![y - 1, y, y + 1]),
            (_, true, _, _) => (vec![x - 1, x], vec![y - 1, y, y + 1]),
            (_, _, true, _) => (vec![x - 1, x, x + 1], vec![y, y + 1]),
            (_, _, _, true) => (vec![x - 1, x, x + 1], vec![y - 1, y]),
            _ => (vec![x - 1, x, x + 1], vec![y - 1, y, y + 1]),
        };

        let divisor = (rows.len() * cols.len()) as f32;
        let mut sum = [0u32; 3];
        for &r in &rows {
            for &c in &cols {
                let px = at(r, c);
                for ch in 0..3 {
                    sum[ch] += px[ch];
                }
            }
        }
        Bgr8::from_wide(sum.map(|s| (s as f32 / divisor).round() as u32))
    })
    .unwrap()
}

#[test]
fn blur_matches_case_split() {
    for (w, h) in [(2, 2), (2, 3), (3, 2), (3, 3), (4, 7), (10, 10), (31, 17)] {
        let img = pattern(w, h);
        let expected = blur_by_cases(&img);
        let mut got = img.clone();
        Filter::Blur.apply(&mut got);
        assert_eq!(got, expected, "{w}x{h}");
    }
}

#[test]
fn blur_divisor_per_position() {
    // Sum of a 255 spike over each neighborhood size shows the divisor.
    for (w, h) in [(3, 3), (5, 4)] {
        for r in 0..h {
            for c in 0..w {
                let mut img = Image::new(w, h).unwrap();
                img.set(r, c, Bgr8::WHITE).unwrap();
                Filter::Blur.apply(&mut img);

                let rows = (r + 1).min(h - 1) - r.saturating_sub(1) + 1;
                let cols = (c + 1).min(w - 1) - c.saturating_sub(1) + 1;
                let expected = (255.0f32 / (rows * cols) as f32).round() as u8;
                assert_eq!(img.get(r, c), Some(Bgr8::gray(expected)), "({r},{c}) in {w}x{h}");
            }
        }
    }
}

#[test]
fn blur_never_reads_outside_thin_images() {
    for (w, h) in [(1, 1), (1, 2), (2, 1), (1, 50), (50, 1)] {
        let mut img = pattern(w, h);
        Filter::Blur.apply(&mut img);
        assert_eq!(img.dimensions(), (w, h));
    }
}

#[test]
fn one_by_one_is_fixed_point_of_reflect_and_blur() {
    let px = Bgr8::rgb(3, 141, 59);
    for f in [Filter::Reflect, Filter::Blur] {
        let mut img = Image::filled(1, 1, px).unwrap();
        f.apply(&mut img);
        assert_eq!(img.get(0, 0), Some(px), "{f}");
    }
}

#[test]
fn reflect_law_on_pattern() {
    let img = pattern(9, 4);
    let mut out = img.clone();
    transform::reflect(4, 9, out.pixels_mut());
    for r in 0..4 {
        for j in 0..9 {
            assert_eq!(out.get(r, j), img.get(r, 9 - 1 - j));
        }
    }
    transform::reflect(4, 9, out.pixels_mut());
    assert_eq!(out, img);
}

#[test]
fn grayscale_law_on_pattern() {
    let img = pattern(8, 6);
    let mut out = img.clone();
    color::grayscale(6, 8, out.pixels_mut());
    for (before, after) in img.pixels().iter().zip(out.pixels()) {
        let sum = before.widen().iter().sum::<u32>();
        let expected = (sum as f32 / 3.0).round() as u8;
        assert!(after.is_gray());
        assert_eq!(after.red, expected);
    }
}

#[test]
fn sepia_law_on_pattern() {
    let img = pattern(8, 6);
    let mut out = img.clone();
    color::sepia(6, 8, out.pixels_mut());
    for (before, after) in img.pixels().iter().zip(out.pixels()) {
        let (r, g, b) = (before.red as f64, before.green as f64, before.blue as f64);
        let cap = |v: f64| (v.round() as u32).min(255) as u8;
        assert_eq!(after.red, cap(0.393 * r + 0.769 * g + 0.189 * b));
        assert_eq!(after.green, cap(0.349 * r + 0.686 * g + 0.168 * b));
        assert_eq!(after.blue, cap(0.272 * r + 0.534 * g + 0.131 * b));
    }
}

#[test]
fn blur_pixel_reads_snapshot_only() {
    let img = pattern(6, 5);
    let snapshot = bmpfx_ops::snapshot::Snapshot::capture(5, 6, img.pixels());
    let mut out = img.clone();
    filter::blur(5, 6, out.pixels_mut());
    for r in 0..5 {
        for c in 0..6 {
            assert_eq!(out.get(r, c), Some(filter::blur_pixel(&snapshot, r, c)));
        }
    }
}
