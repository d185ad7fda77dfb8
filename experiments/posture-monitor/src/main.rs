use {
    base::{Vec2, init_file_logger, init_stdout_logger},
    inference::Inference,
    posture::*,
    std::{env, io::Write, path::PathBuf, time::Duration},
    tokio::time::{Instant, MissedTickBehavior},
    video::{FrameSource, ReplaySource},
};

/// Prints level changes as JSON lines, with the LED flash count.
struct JsonNotifier;

impl Notifier for JsonNotifier {
    fn level_changed(&mut self, change: &LevelChange, state: &PostureState) {
        LogNotifier.level_changed(change, state);
        let event = serde_json::json!({
            "event": "level_changed",
            "from": change.from,
            "to": change.to,
            "slouch_secs": change.slouch_secs,
            "flash": change.to.flash_count(),
        });
        println!("{event}");
        std::io::stdout().flush().ok();
    }
}

fn publish(status: &StatusReport) {
    match status.to_json() {
        Ok(json) => {
            println!("{json}");
            std::io::stdout().flush().ok();
        }
        Err(e) => log::warn!("status not published: {e}"),
    }
}

/// Parse a `WIDTHxHEIGHT` frame size.
fn parse_size(text: &str) -> anyhow::Result<Vec2<usize>> {
    let (width, height) = text
        .split_once('x')
        .ok_or_else(|| anyhow::anyhow!("frame size {text:?} is not WIDTHxHEIGHT"))?;
    Ok(Vec2::new(width.trim().parse()?, height.trim().parse()?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match env::var("POSTURE_CONFIG") {
        Ok(path) => MonitorConfig::load(&path)?,
        Err(_) => MonitorConfig::default(),
    };
    config.validate()?;

    let level = config.log.level_filter()?;
    match &config.log.dir {
        Some(dir) => init_file_logger(dir, level)?,
        None => init_stdout_logger(level),
    }

    let frames: PathBuf = env::var("POSTURE_FRAMES")
        .unwrap_or_else(|_| "frames".to_string())
        .into();
    let looping = env::var("POSTURE_LOOP").map(|v| v == "1").unwrap_or(false);
    let raw_size = match env::var("POSTURE_RAW_SIZE") {
        Ok(text) => Some(parse_size(&text)?),
        Err(_) => None,
    };

    log::info!("Posture Monitor");
    log::info!("Frames: {} (loop {})", frames.display(), looping);

    #[cfg(feature = "cuda")]
    let inference = Inference::cuda(0)?;
    #[cfg(not(feature = "cuda"))]
    let inference = Inference::cpu()?;

    let classifier = create_classifier(&config, &inference);
    let mut source = ReplaySource::open(&frames)
        .await?
        .looping(looping)
        .raw_size(raw_size);

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;
    let mut monitor = Monitor::new(&config, classifier, Box::new(JsonNotifier), now_ms());

    // SIGUSR1 requests recalibration
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let trigger = monitor.recalibrate_trigger();
        let mut usr1 = signal(SignalKind::user_defined1())?;
        tokio::spawn(async move {
            while usr1.recv().await.is_some() {
                trigger.request();
            }
        });
    }

    println!("{}", serde_json::json!({ "status": "online", "model_loaded": monitor.model_loaded() }));
    publish(&monitor.status());

    let mut ticker = tokio::time::interval(Duration::from_millis(config.frame_interval_ms()));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let publish_every = config.publish_interval_ms;
    let mut last_publish = now_ms();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,

            _ = ticker.tick() => {
                let image = match source.next_frame().await {
                    Ok(Some(image)) => Some(image),
                    Ok(None) if source.is_exhausted() => {
                        log::info!("frame source exhausted");
                        break;
                    }
                    Ok(None) => None,
                    Err(e) => {
                        log::warn!("frame unavailable: {e}");
                        None
                    }
                };
                let now = now_ms();
                let frame = image.as_ref().map(|image| image.as_frame());
                monitor.tick(frame.as_ref(), now);

                if now.saturating_sub(last_publish) >= publish_every {
                    publish(&monitor.status());
                    last_publish = now;
                }
            }
        }
    }

    publish(&monitor.status());
    log::info!("Exiting...");
    Ok(())
}
