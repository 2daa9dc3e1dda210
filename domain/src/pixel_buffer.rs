use std::fmt;

use crate::error::{DomainError, DomainResult};

pub const BYTES_PER_PIXEL: usize = 4;

/// Snapshot of a drawing surface: `width * height` RGBA pixels, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> DomainResult<Self> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidPixelBuffer(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| {
                DomainError::InvalidPixelBuffer(format!("{width}x{height} overflows"))
            })?;

        if rgba.len() != expected {
            return Err(DomainError::InvalidPixelBuffer(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                rgba.len()
            )));
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Buffer of one repeated pixel, the state of an untouched canvas.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> DomainResult<Self> {
        let count = (width as usize).saturating_mul(height as usize);
        let rgba = pixel
            .iter()
            .copied()
            .cycle()
            .take(count.saturating_mul(BYTES_PER_PIXEL))
            .collect();
        Self::new(width, height, rgba)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[must_use]
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.rgba
            .get(offset..offset + BYTES_PER_PIXEL)
            .and_then(|bytes| bytes.try_into().ok())
    }

    /// True when nothing was drawn: every pixel is either `background` or fully transparent.
    #[must_use]
    pub fn is_blank(&self, background: [u8; 4]) -> bool {
        self.rgba
            .chunks_exact(BYTES_PER_PIXEL)
            .all(|pixel| pixel == background.as_slice() || pixel.get(3) == Some(&0))
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}
