use base::{Quantization, Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let t = Tensor::new(vec![1, 1, 2, 3], vec![0.0f32; 6]).unwrap();
    assert_eq!(t.shape, vec![1, 1, 2, 3]);
    assert_eq!(t.len(), 6);
    assert!(!t.is_empty());
}

#[test]
fn test_tensor_shape_mismatch() {
    let err = Tensor::new(vec![2, 2], vec![0u8; 3]).unwrap_err();
    assert_eq!(err, TensorError::ShapeMismatch { expected: 4, got: 3 });
}

#[test]
fn test_tensor_shape_overflow() {
    let err = Tensor::<u8>::new(vec![usize::MAX, 2], vec![]).unwrap_err();
    assert_eq!(err, TensorError::ShapeOverflow);
}

#[test]
fn test_tensor_map_quantizes_in_place_shape() {
    let q = Quantization::new(1.0 / 255.0, -128);
    let t = Tensor::new(vec![1, 2], vec![0.0f32, 1.0]).unwrap();
    let quantized = t.map(|&v| q.quantize(v));
    assert_eq!(quantized.shape, vec![1, 2]);
    assert_eq!(quantized.data, vec![-128i8, 127]);
}
