/// Affine int8 quantization parameters: `real = (q - zero_point) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantization {
    pub scale: f32,
    pub zero_point: i32,
}

impl Quantization {
    pub fn new(scale: f32, zero_point: i32) -> Self {
        Self { scale, zero_point }
    }

    /// `round(value / scale) + zero_point`, saturated to the i8 range.
    pub fn quantize(&self, value: f32) -> i8 {
        let q = (value / self.scale).round() as i64 + self.zero_point as i64;
        q.clamp(i8::MIN as i64, i8::MAX as i64) as i8
    }

    pub fn dequantize(&self, q: i8) -> f32 {
        (q as i32 - self.zero_point) as f32 * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_unit_range() {
        // typical int8 input quantization for [0,1] pixels
        let q = Quantization::new(1.0 / 255.0, -128);
        assert_eq!(q.quantize(0.0), -128);
        assert_eq!(q.quantize(1.0), 127);
        // 0.5 / (1/255) is 127.4999.. in f32
        assert_eq!(q.quantize(0.5), -1);
    }

    #[test]
    fn test_quantize_exact_midpoint() {
        let q = Quantization::new(1.0 / 256.0, -128);
        assert_eq!(q.quantize(0.5), 0);
        assert_eq!(q.quantize(1.0), 127);
    }

    #[test]
    fn test_quantize_saturates() {
        let q = Quantization::new(0.01, 0);
        assert_eq!(q.quantize(10.0), 127);
        assert_eq!(q.quantize(-10.0), -128);
    }

    #[test]
    fn test_dequantize() {
        let q = Quantization::new(1.0 / 256.0, -128);
        assert!((q.dequantize(-128) - 0.0).abs() < 1e-6);
        assert!((q.dequantize(127) - 255.0 / 256.0).abs() < 1e-6);
    }
}
