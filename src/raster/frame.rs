use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{SegueError, SegueResult};

/// A raster image as premultiplied RGBA8 pixels.
///
/// Pixels are tightly packed, row-major, four bytes per pixel. Every constructor normalizes its
/// input into this layout, so effects only ever see premultiplied alpha. Width and height are
/// always non-zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Allocate a fully transparent frame.
    pub fn transparent(width: u32, height: u32) -> SegueResult<Self> {
        let len = rgba8_len(width, height)?;
        let data = alloc_zeroed(len)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a frame filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgba8Premul) -> SegueResult<Self> {
        if !color.is_valid() {
            return Err(SegueError::validation(
                "solid color channels must not exceed alpha",
            ));
        }
        let mut frame = Self::transparent(width, height)?;
        let px = color.to_array();
        for d in frame.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
        Ok(frame)
    }

    /// Wrap premultiplied RGBA8 bytes.
    ///
    /// Fails when the buffer length does not match `width * height * 4` or when a color channel
    /// exceeds its alpha.
    pub fn from_rgba8_premul(width: u32, height: u32, data: Vec<u8>) -> SegueResult<Self> {
        let len = rgba8_len(width, height)?;
        if data.len() != len {
            return Err(SegueError::validation(format!(
                "premultiplied rgba8 buffer for {width}x{height} must be {len} bytes, got {}",
                data.len()
            )));
        }
        if let Some(idx) = data
            .chunks_exact(4)
            .position(|p| p[0] > p[3] || p[1] > p[3] || p[2] > p[3])
        {
            return Err(SegueError::validation(format!(
                "pixel {idx} is not premultiplied (color channel exceeds alpha)"
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    /// Premultiplied RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame and return its premultiplied RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgba8Premul::from_array(self.px(self.index(x, y))))
    }

    /// `true` when every pixel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(4).all(|p| p[3] == 255)
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    pub(crate) fn px(&self, idx: usize) -> [u8; 4] {
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    pub(crate) fn set_px(&mut self, idx: usize, px: [u8; 4]) {
        self.data[idx..idx + 4].copy_from_slice(&px);
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn from_parts_unchecked(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            data,
        }
    }
}

/// Byte length of a `width` x `height` RGBA8 buffer.
pub(crate) fn rgba8_len(width: u32, height: u32) -> SegueResult<usize> {
    if width == 0 || height == 0 {
        return Err(SegueError::validation(format!(
            "frame dimensions must be > 0, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| SegueError::allocation(format!("frame size {width}x{height} overflows")))
}

pub(crate) fn alloc_zeroed(len: usize) -> SegueResult<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|e| SegueError::allocation(format!("reserve {len} bytes for frame: {e}")))?;
    data.resize(len, 0);
    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;
