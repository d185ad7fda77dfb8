use {
    base::{Tensor, Vec2},
    inference::{InferError, Inference, ModelInput, ModelOutput, Session},
};

#[test]
fn test_inference_cpu() {
    let inference = Inference::cpu().unwrap();
    assert!(inference.device().is_cpu());
}

#[test]
fn test_use_posture_model_missing_file() {
    let inference = Inference::cpu().unwrap();
    let result = inference.use_posture_model("fake_model.safetensors", Vec2::new(96, 96));
    match result {
        Err(InferError::Io(msg)) => {
            let msg = msg.to_lowercase();
            assert!(
                msg.contains("no such file") || msg.contains("not found"),
                "Expected error message about file not found, got: {}",
                msg
            );
        }
        other => panic!("Expected InferError::Io, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_infererror_display() {
    let err = InferError::Metadata("bad scale".to_string());
    let display_str = format!("{}", err);
    assert!(display_str.contains("metadata"));
    assert!(display_str.contains("bad scale"));
}

#[test]
fn test_trained_posture_model_runs() {
    let Some(path) = std::env::var("POSTURE_MODEL").ok() else {
        eprintln!("POSTURE_MODEL not set - skipping trained model test");
        return;
    };

    let inference = Inference::cpu().unwrap();
    let mut model = inference
        .use_posture_model(&path, Vec2::new(96, 96))
        .unwrap();
    let spec = model.spec().clone();
    let count = spec.input_size.area();
    let input = match &spec.input_quantization {
        Some(quantization) => ModelInput::I8(
            Tensor::new(spec.input_shape(), vec![quantization.quantize(0.5); count]).unwrap(),
        ),
        None => ModelInput::F32(Tensor::new(spec.input_shape(), vec![0.5; count]).unwrap()),
    };

    match model.run(input).unwrap() {
        ModelOutput::F32(probs) => {
            assert_eq!(probs.len(), 2);
            assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-3);
        }
        ModelOutput::I8(scores) => assert_eq!(scores.len(), 2),
    }
}
