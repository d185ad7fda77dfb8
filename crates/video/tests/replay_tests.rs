use {
    base::Vec2,
    crates_image::ImageEncoder,
    std::{fs, path::PathBuf},
    video::{FrameSource, ReplaySource, VideoError},
};

fn write_png(path: &PathBuf, value: u8) {
    let img = crates_image::GrayImage::from_fn(4, 2, |_, _| crates_image::Luma([value]));
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 4, 2, crates_image::ExtendedColorType::L8)
        .unwrap();
    fs::write(path, buffer).unwrap();
}

fn frames_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("posture-replay-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    write_png(&dir.join("002.png"), 20);
    write_png(&dir.join("001.png"), 10);
    fs::write(dir.join("notes.txt"), "not a frame").unwrap();
    dir
}

#[tokio::test]
async fn test_replay_in_name_order_then_ends() {
    let dir = frames_dir("order");
    let mut source = ReplaySource::open(&dir).await.unwrap();
    assert_eq!(source.len(), 2);

    let first = source.next_frame().await.unwrap().unwrap();
    assert_eq!(first.size(), Vec2::new(4, 2));
    assert!(first.data().iter().all(|&p| p == 10));

    let second = source.next_frame().await.unwrap().unwrap();
    assert!(second.data().iter().all(|&p| p == 20));

    assert!(source.is_exhausted());
    assert!(source.next_frame().await.unwrap().is_none());
    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_replay_looping_wraps_around() {
    let dir = frames_dir("loop");
    let mut source = ReplaySource::open(&dir).await.unwrap().looping(true);

    for expected in [10u8, 20, 10, 20] {
        let frame = source.next_frame().await.unwrap().unwrap();
        assert_eq!(frame.data()[0], expected);
    }
    assert!(!source.is_exhausted());
    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_replay_empty_directory_is_error() {
    let dir = std::env::temp_dir().join(format!("posture-replay-{}-empty", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let result = ReplaySource::open(&dir).await;
    assert!(matches!(result, Err(VideoError::NoFrames(_))));
    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_replay_corrupt_frame_is_decode_error() {
    let dir = std::env::temp_dir().join(format!("posture-replay-{}-corrupt", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("bad.png"), [0u8, 1, 2, 3]).unwrap();

    let mut source = ReplaySource::open(&dir).await.unwrap();
    assert!(matches!(source.next_frame().await, Err(VideoError::Decode(_))));
    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_replay_raw_rgb_dump_converts_to_luma() {
    let dir = std::env::temp_dir().join(format!("posture-replay-{}-rgb", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    // 2x1: black, white
    fs::write(dir.join("000.rgb"), [0u8, 0, 0, 255, 255, 255]).unwrap();

    let mut source = ReplaySource::open(&dir)
        .await
        .unwrap()
        .raw_size(Some(Vec2::new(2, 1)));
    let frame = source.next_frame().await.unwrap().unwrap();
    assert_eq!(frame.size(), Vec2::new(2, 1));
    assert_eq!(frame.data()[0], 0);
    assert!(frame.data()[1] >= 254);
    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_replay_raw_dump_without_size_is_error() {
    let dir = std::env::temp_dir().join(format!("posture-replay-{}-nosize", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("000.yuyv"), [16u8, 128, 235, 128]).unwrap();

    let mut source = ReplaySource::open(&dir).await.unwrap();
    assert!(matches!(source.next_frame().await, Err(VideoError::RawSize(_))));
    fs::remove_dir_all(&dir).ok();
}
