use {
    crate::{Frame, ImageError},
    base::{Quantization, Vec2},
};

/// Resample `src` to `dst` pixels with bilinear interpolation and normalize to `[0, 1]`.
///
/// Destination pixel centers are mapped onto source pixel centers, so a
/// same-size resize reproduces the source exactly and a 2x2 → 1x1 resize
/// samples the middle of the four pixels. The `+1` neighbour is clamped to
/// the last row/column. Pure: identical inputs give bit-identical outputs.
pub fn resize_bilinear(src: &Frame<'_>, dst: Vec2<usize>) -> Result<Vec<f32>, ImageError> {
    if src.is_empty() {
        return Err(ImageError::Empty("source frame has no pixels".to_string()));
    }
    if dst.is_empty() {
        return Err(ImageError::Size(format!(
            "destination size {}x{} has no pixels",
            dst.x, dst.y
        )));
    }

    let (src_w, src_h) = (src.width(), src.height());
    let x_scale = src_w as f32 / dst.x as f32;
    let y_scale = src_h as f32 / dst.y as f32;

    // column taps are the same for every row
    let columns: Vec<(usize, usize, f32)> = (0..dst.x)
        .map(|x| source_taps(x, x_scale, src_w))
        .collect();

    let mut out = Vec::with_capacity(dst.area());
    for y in 0..dst.y {
        let (y0, y1, y_frac) = source_taps(y, y_scale, src_h);
        for &(x0, x1, x_frac) in &columns {
            let top = lerp(src.pixel(x0, y0), src.pixel(x1, y0), x_frac);
            let bottom = lerp(src.pixel(x0, y1), src.pixel(x1, y1), x_frac);
            let value = top + (bottom - top) * y_frac;
            out.push(value / 255.0);
        }
    }
    Ok(out)
}

// a + (b - a) * t is exact when a == b, which keeps flat regions flat
#[inline]
fn lerp(a: u8, b: u8, t: f32) -> f32 {
    a as f32 + (b as f32 - a as f32) * t
}

// (index, clamped index + 1, fraction) in the source for destination index `d`
fn source_taps(d: usize, scale: f32, src_len: usize) -> (usize, usize, f32) {
    let s = ((d as f32 + 0.5) * scale - 0.5).max(0.0);
    let i0 = (s as usize).min(src_len - 1);
    let i1 = (i0 + 1).min(src_len - 1);
    let frac = (s - i0 as f32).clamp(0.0, 1.0);
    (i0, i1, frac)
}

/// Quantize normalized values for a fixed-point input tensor.
pub fn quantize(values: &[f32], quantization: &Quantization) -> Vec<i8> {
    values.iter().map(|&v| quantization.quantize(v)).collect()
}
