use {
    crate::{FrameSource, VideoError},
    base::Vec2,
    image::{GrayImage, PixelFormat, RawImage},
    std::path::{Path, PathBuf},
};

/// How a file in the replay directory is turned into a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameFile {
    /// JPEG, PNG or BMP, decoded by the image codecs.
    Encoded,
    /// Headerless sensor dump in the given layout.
    Raw(PixelFormat),
}

fn frame_file(path: &Path) -> Option<FrameFile> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" | "bmp" => Some(FrameFile::Encoded),
        "jpg" | "jpeg" => Some(FrameFile::Raw(PixelFormat::Jpeg)),
        "gray" | "grey" => Some(FrameFile::Raw(PixelFormat::Gray8)),
        "rgb" => Some(FrameFile::Raw(PixelFormat::Rgb8)),
        "yuyv" => Some(FrameFile::Raw(PixelFormat::Yuyv)),
        _ => None,
    }
}

/// Plays back the frames of a directory in file-name order.
///
/// Encoded stills are decoded directly. Camera buffers (`.jpg`, `.gray`,
/// `.rgb`, `.yuyv`) go through the same luma conversion a capture backend
/// uses; the uncompressed ones need [`ReplaySource::raw_size`].
#[derive(Debug)]
pub struct ReplaySource {
    paths: Vec<(PathBuf, FrameFile)>,
    position: usize,
    looping: bool,
    raw_size: Option<Vec2<usize>>,
}

impl ReplaySource {
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, VideoError> {
        let dir = dir.as_ref();
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if let Some(kind) = frame_file(&path) {
                paths.push((path, kind));
            }
        }
        if paths.is_empty() {
            return Err(VideoError::NoFrames(dir.to_path_buf()));
        }
        paths.sort_by(|a, b| a.0.cmp(&b.0));
        log::info!("replay source: {} frames from {}", paths.len(), dir.display());
        Ok(Self {
            paths,
            position: 0,
            looping: false,
            raw_size: None,
        })
    }

    /// Start over from the first frame after the last one.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Frame size of the headerless sensor dumps.
    pub fn raw_size(mut self, size: Option<Vec2<usize>>) -> Self {
        self.raw_size = size;
        self
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Every frame has been played and the source does not loop.
    pub fn is_exhausted(&self) -> bool {
        !self.looping && self.position >= self.paths.len()
    }

    async fn load(&self, path: &Path, kind: FrameFile) -> Result<GrayImage, VideoError> {
        let bytes = tokio::fs::read(path).await?;
        let image = match kind {
            FrameFile::Encoded => image::decode_gray(bytes).await?,
            FrameFile::Raw(PixelFormat::Jpeg) => {
                // size comes from the JPEG header
                let raw = RawImage::new(Vec2::zero(), bytes, PixelFormat::Jpeg);
                tokio::task::spawn_blocking(move || raw.to_gray())
                    .await
                    .map_err(|e| VideoError::Io(e.to_string()))??
            }
            FrameFile::Raw(format) => {
                let size = self
                    .raw_size
                    .ok_or_else(|| VideoError::RawSize(path.to_path_buf()))?;
                RawImage::new(size, bytes, format).to_gray()?
            }
        };
        Ok(image)
    }
}

impl FrameSource for ReplaySource {
    async fn next_frame(&mut self) -> Result<Option<GrayImage>, VideoError> {
        if self.position >= self.paths.len() {
            if !self.looping {
                return Ok(None);
            }
            self.position = 0;
        }
        let (path, kind) = self.paths[self.position].clone();
        self.position += 1;
        let image = self.load(&path, kind).await?;
        log::debug!("replay source: {}", path.display());
        Ok(Some(image))
    }
}
