//! Per-pixel colour distance in YIQ space.
//!
//! Each pixel pair is converted to YIQ and compared with a weighted squared
//! distance; translucent pixels are first composited over a position
//! dependent background. `MAX_YIQ_DELTA` is the largest distance
//! two colours can have, so a threshold of `1.0` never reports a difference.
//! Buffers are tightly packed 8-bit RGBA.

use crate::options::{CompareOptions, Rgb};

const MAX_YIQ_DELTA: f64 = 35215.0;

/// Compares two equally sized RGBA buffers, draws the difference mask into
/// `output` and returns the number of differing pixels.
pub(crate) fn diff_pixels(
    img1: &[u8],
    img2: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    options: &CompareOptions,
) -> u64 {
    debug_assert_eq!(img1.len(), width * height * 4);
    debug_assert_eq!(img2.len(), img1.len());
    debug_assert_eq!(output.len(), img1.len());

    if img1 == img2 {
        for pos in (0..width * height).map(|i| i * 4) {
            draw_gray_pixel(img1, pos, options.diff_alpha, output);
        }
        return 0;
    }

    let max_delta = MAX_YIQ_DELTA * options.threshold * options.threshold;
    let mut diff = 0;

    for y in 0..height {
        for x in 0..width {
            let pos = (y * width + x) * 4;
            let delta = color_delta(img1, img2, pos, pos, false);

            if delta.abs() <= max_delta {
                draw_gray_pixel(img1, pos, options.diff_alpha, output);
            } else if options.detect_anti_aliasing
                && (antialiased(img1, x, y, width, height, img2)
                    || antialiased(img2, x, y, width, height, img1))
            {
                draw_pixel(output, pos, options.aa_color);
            } else {
                // negative delta: the candidate pixel is darker
                let color = if delta < 0.0 {
                    options.diff_color_alt.unwrap_or(options.diff_color)
                } else {
                    options.diff_color
                };
                draw_pixel(output, pos, color);
                diff += 1;
            }
        }
    }

    diff
}

/// Whether the pixel at `(x1, y1)` of `img` looks like an anti-aliased edge:
/// few identical neighbours, both a darker and a brighter neighbour, and one
/// of those extremes sitting in a flat region of both images.
fn antialiased(img: &[u8], x1: usize, y1: usize, width: usize, height: usize, img2: &[u8]) -> bool {
    let x0 = x1.saturating_sub(1);
    let y0 = y1.saturating_sub(1);
    let x2 = (x1 + 1).min(width - 1);
    let y2 = (y1 + 1).min(height - 1);
    let pos = (y1 * width + x1) * 4;

    let mut zeroes = usize::from(x1 == x0 || x1 == x2 || y1 == y0 || y1 == y2);
    let mut min = 0.0;
    let mut max = 0.0;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (0, 0, 0, 0);

    for x in x0..=x2 {
        for y in y0..=y2 {
            if x == x1 && y == y1 {
                continue;
            }

            let delta = color_delta(img, img, pos, (y * width + x) * 4, true);

            if delta == 0.0 {
                zeroes += 1;
                if zeroes > 2 {
                    return false;
                }
            } else if delta < min {
                min = delta;
                min_x = x;
                min_y = y;
            } else if delta > max {
                max = delta;
                max_x = x;
                max_y = y;
            }
        }
    }

    if min == 0.0 || max == 0.0 {
        return false;
    }

    (has_many_siblings(img, min_x, min_y, width, height)
        && has_many_siblings(img2, min_x, min_y, width, height))
        || (has_many_siblings(img, max_x, max_y, width, height)
            && has_many_siblings(img2, max_x, max_y, width, height))
}

/// Whether more than two neighbours of `(x1, y1)` share its exact colour.
fn has_many_siblings(img: &[u8], x1: usize, y1: usize, width: usize, height: usize) -> bool {
    let x0 = x1.saturating_sub(1);
    let y0 = y1.saturating_sub(1);
    let x2 = (x1 + 1).min(width - 1);
    let y2 = (y1 + 1).min(height - 1);
    let pos = (y1 * width + x1) * 4;

    let mut zeroes = usize::from(x1 == x0 || x1 == x2 || y1 == y0 || y1 == y2);

    for x in x0..=x2 {
        for y in y0..=y2 {
            if x == x1 && y == y1 {
                continue;
            }

            let pos2 = (y * width + x) * 4;
            if img[pos..pos + 4] == img[pos2..pos2 + 4] {
                zeroes += 1;
            }
            if zeroes > 2 {
                return true;
            }
        }
    }

    false
}

/// Squared YIQ distance between pixel `k` of `img1` and pixel `m` of `img2`,
/// negative when the first pixel is brighter. With `y_only` only the signed
/// luma difference is returned.
///
/// Translucent pixels are composited over a background that alternates per
/// pixel position, so a change in alpha alone still yields a distance.
fn color_delta(img1: &[u8], img2: &[u8], k: usize, m: usize, y_only: bool) -> f64 {
    let [r1, g1, b1, a1] = channels(&img1[k..k + 4]);
    let [r2, g2, b2, a2] = channels(&img2[m..m + 4]);

    let mut dr = r1 - r2;
    let mut dg = g1 - g2;
    let mut db = b1 - b2;
    let da = a1 - a2;

    if dr == 0.0 && dg == 0.0 && db == 0.0 && da == 0.0 {
        return 0.0;
    }

    if a1 < 255.0 || a2 < 255.0 {
        let [rb, gb, bb] = background(k / 4);
        dr = (r1 * a1 - r2 * a2 - rb * da) / 255.0;
        dg = (g1 * a1 - g2 * a2 - gb * da) / 255.0;
        db = (b1 * a1 - b2 * a2 - bb * da) / 255.0;
    }

    let y = rgb2y(dr, dg, db);

    if y_only {
        return y;
    }

    let i = rgb2i(dr, dg, db);
    let q = rgb2q(dr, dg, db);

    let delta = 0.5053 * y * y + 0.299 * i * i + 0.1957 * q * q;

    if y > 0.0 { -delta } else { delta }
}

fn channels(pixel: &[u8]) -> [f64; 4] {
    [
        f64::from(pixel[0]),
        f64::from(pixel[1]),
        f64::from(pixel[2]),
        f64::from(pixel[3]),
    ]
}

/// Dark or light background channel values for the pixel at `index`.
fn background(index: usize) -> [f64; 3] {
    let pick = |on: bool| if on { 207.0 } else { 48.0 };
    let index = index as f64;
    [
        pick(index % 2.0 >= 1.0),
        pick((index / 1.618_033_988_749_895).floor() % 2.0 >= 1.0),
        pick((index / 2.618_033_988_749_895).floor() % 2.0 >= 1.0),
    ]
}

fn rgb2y(r: f64, g: f64, b: f64) -> f64 {
    r * 0.298_895_31 + g * 0.586_622_47 + b * 0.114_482_23
}

fn rgb2i(r: f64, g: f64, b: f64) -> f64 {
    r * 0.595_977_99 - g * 0.274_176_10 - b * 0.321_801_89
}

fn rgb2q(r: f64, g: f64, b: f64) -> f64 {
    r * 0.211_470_17 - g * 0.522_617_11 + b * 0.311_146_94
}

/// Blends `c` with white at opacity `a`.
fn blend(c: f64, a: f64) -> f64 {
    255.0 + (c - 255.0) * a
}

fn draw_pixel(output: &mut [u8], pos: usize, [r, g, b]: Rgb) {
    output[pos] = r;
    output[pos + 1] = g;
    output[pos + 2] = b;
    output[pos + 3] = 255;
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_gray_pixel(img: &[u8], pos: usize, alpha: f64, output: &mut [u8]) {
    let r = f64::from(img[pos]);
    let g = f64::from(img[pos + 1]);
    let b = f64::from(img[pos + 2]);
    let a = f64::from(img[pos + 3]);

    let val = blend(rgb2y(r, g, b), alpha * a / 255.0) as u8;
    draw_pixel(output, pos, [val, val, val]);
}
