use {
    crate::{GrayImage, ImageError, decode::decode_gray_blocking},
    base::Vec2,
};

// fourcc codes
pub(crate) const FOURCC_GREY: u32 = u32::from_le_bytes(*b"GREY");
pub(crate) const FOURCC_RGB8: u32 = u32::from_le_bytes(*b"RGB8");
pub(crate) const FOURCC_YUYV: u32 = u32::from_le_bytes(*b"YUYV");
pub(crate) const FOURCC_MJPG: u32 = u32::from_le_bytes(*b"MJPG");

/// Convert a fourcc code to a readable 4-character string.
pub fn fourcc_to_string(fourcc: u32) -> String {
    String::from_utf8_lossy(&fourcc.to_le_bytes()).into_owned()
}

/// Camera buffer layouts that can be reduced to luma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Gray8,
    Rgb8,
    Yuyv,
    Jpeg,
}

impl PixelFormat {
    pub fn from_fourcc(fourcc: u32) -> Result<Self, ImageError> {
        match fourcc {
            FOURCC_GREY => Ok(PixelFormat::Gray8),
            FOURCC_RGB8 => Ok(PixelFormat::Rgb8),
            FOURCC_YUYV => Ok(PixelFormat::Yuyv),
            FOURCC_MJPG => Ok(PixelFormat::Jpeg),
            _ => Err(ImageError::Decode(format!(
                "unsupported pixel format: {}",
                fourcc_to_string(fourcc)
            ))),
        }
    }

    pub fn as_fourcc(&self) -> u32 {
        match self {
            PixelFormat::Gray8 => FOURCC_GREY,
            PixelFormat::Rgb8 => FOURCC_RGB8,
            PixelFormat::Yuyv => FOURCC_YUYV,
            PixelFormat::Jpeg => FOURCC_MJPG,
        }
    }

    /// Bytes per pixel for uncompressed formats.
    fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            PixelFormat::Gray8 => Some(1),
            PixelFormat::Rgb8 => Some(3),
            PixelFormat::Yuyv => Some(2),
            PixelFormat::Jpeg => None,
        }
    }
}

/// A camera buffer as delivered by the capture backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl RawImage {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Reduce to 8-bit luma.
    pub fn to_gray(&self) -> Result<GrayImage, ImageError> {
        if let Some(bpp) = self.format.bytes_per_pixel() {
            let expected = self.size.area() * bpp;
            if self.data.len() < expected {
                return Err(ImageError::Size(format!(
                    "{:?} {}x{} needs {} bytes, got {}",
                    self.format,
                    self.size.x,
                    self.size.y,
                    expected,
                    self.data.len()
                )));
            }
        }
        match self.format {
            PixelFormat::Gray8 => GrayImage::new(self.size, self.data[..self.size.area()].to_vec()),
            PixelFormat::Rgb8 => GrayImage::new(self.size, rgb_to_luma(&self.data)),
            PixelFormat::Yuyv => GrayImage::new(self.size, yuyv_to_luma(self.size, &self.data)),
            PixelFormat::Jpeg => decode_gray_blocking(&self.data),
        }
    }
}

// BT.601 luma, fixed-point shift 8
fn rgb_to_luma(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(3)
        .map(|c| ((77 * c[0] as u32 + 150 * c[1] as u32 + 29 * c[2] as u32) >> 8) as u8)
        .collect()
}

// Y0 U Y1 V: luma is every even byte
fn yuyv_to_luma(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    data.iter().step_by(2).take(size.area()).copied().collect()
}
