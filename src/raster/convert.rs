use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{SegueError, SegueResult};
use crate::raster::frame::{Frame, alloc_zeroed, rgba8_len};

/// Byte layout of raw pixel data handed to [`Frame::from_raw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelLayout {
    /// RGBA8 with color already multiplied by alpha.
    Rgba8Premul,
    /// RGBA8 with straight (unassociated) alpha.
    Rgba8,
    /// RGB8 without alpha; treated as fully opaque.
    Rgb8,
}

impl PixelLayout {
    /// Bytes per pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8Premul | Self::Rgba8 => 4,
            Self::Rgb8 => 3,
        }
    }
}

impl Frame {
    /// Build a frame from raw bytes in any supported [`PixelLayout`].
    pub fn from_raw(
        width: u32,
        height: u32,
        layout: PixelLayout,
        data: &[u8],
    ) -> SegueResult<Self> {
        match layout {
            PixelLayout::Rgba8Premul => Self::from_rgba8_premul(width, height, data.to_vec()),
            PixelLayout::Rgba8 => Self::from_rgba8(width, height, data),
            PixelLayout::Rgb8 => Self::from_rgb8(width, height, data),
        }
    }

    /// Build a frame from straight-alpha RGBA8 bytes, premultiplying on entry.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> SegueResult<Self> {
        let len = rgba8_len(width, height)?;
        check_len(width, height, PixelLayout::Rgba8, data.len())?;
        let mut out = alloc_zeroed(len)?;
        out.copy_from_slice(data);
        premultiply_rgba8_in_place(&mut out);
        Ok(Self::from_parts_unchecked(width, height, out))
    }

    /// Build an opaque frame from RGB8 bytes.
    pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> SegueResult<Self> {
        let len = rgba8_len(width, height)?;
        check_len(width, height, PixelLayout::Rgb8, data.len())?;
        let mut out = alloc_zeroed(len)?;
        for (d, s) in out.chunks_exact_mut(4).zip(data.chunks_exact(3)) {
            d.copy_from_slice(&[s[0], s[1], s[2], 255]);
        }
        Ok(Self::from_parts_unchecked(width, height, out))
    }

    /// Convert a decoded image of any color type.
    ///
    /// 16-bit and float images are reduced to 8 bits per channel by the `image` crate.
    pub fn from_image(img: &image::DynamicImage) -> SegueResult<Self> {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.as_raw())
    }

    /// Straight-alpha RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.as_bytes().len());
        for p in self.as_bytes().chunks_exact(4) {
            let straight = Rgba8Premul::from_array([p[0], p[1], p[2], p[3]]).to_straight_rgba();
            out.extend_from_slice(&straight);
        }
        out
    }

    /// Straight-alpha `image::RgbaImage`, ready for encoding.
    pub fn to_rgba_image(&self) -> SegueResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width(), self.height(), self.to_rgba8())
            .ok_or_else(|| SegueError::validation("frame buffer does not fit its dimensions"))
    }
}

fn check_len(width: u32, height: u32, layout: PixelLayout, got: usize) -> SegueResult<()> {
    let want = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(layout.bytes_per_pixel()))
        .ok_or_else(|| SegueError::allocation(format!("frame size {width}x{height} overflows")))?;
    if want != got {
        return Err(SegueError::validation(format!(
            "{layout:?} buffer for {width}x{height} must be {want} bytes, got {got}"
        )));
    }
    Ok(())
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/convert.rs"]
mod tests;
