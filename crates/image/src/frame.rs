use {crate::ImageError, base::Vec2};

/// Borrowed view over a row-major 8-bit single-channel pixel buffer.
///
/// Lives only as long as the buffer it points into, so a classifier can
/// never hold on to a frame past the call it was handed to.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    size: Vec2<usize>,
    pixels: &'a [u8],
}

impl<'a> Frame<'a> {
    pub fn new(size: Vec2<usize>, pixels: &'a [u8]) -> Result<Self, ImageError> {
        if pixels.len() != size.area() {
            return Err(ImageError::Size(format!(
                "{}x{} frame needs {} bytes, got {}",
                size.x,
                size.y,
                size.area(),
                pixels.len()
            )));
        }
        Ok(Self { size, pixels })
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.size.x + x]
    }
}

/// Owned single-channel image, as produced by a frame source.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayImage {
    size: Vec2<usize>,
    data: Vec<u8>,
}

impl GrayImage {
    pub fn new(size: Vec2<usize>, data: Vec<u8>) -> Result<Self, ImageError> {
        Frame::new(size, &data)?;
        Ok(Self { size, data })
    }

    /// An image with every pixel set to `value`.
    pub fn filled(size: Vec2<usize>, value: u8) -> Self {
        Self {
            size,
            data: vec![value; size.area()],
        }
    }

    pub fn from_fn(size: Vec2<usize>, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(size.area());
        for y in 0..size.y {
            for x in 0..size.x {
                data.push(f(x, y));
            }
        }
        Self { size, data }
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Always consistent: every constructor keeps `data.len() == size.area()`.
    pub fn as_frame(&self) -> Frame<'_> {
        Frame {
            size: self.size,
            pixels: &self.data,
        }
    }
}
