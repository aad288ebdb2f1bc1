// scene/texture.rs
use std::collections::HashMap;

use image::DynamicImage;

use super::error::SceneError;
use crate::gfx::{Device, TextureFormat, TextureId};

/// Deduplicates texture uploads by source image index.
///
/// Populated while the scene builds, frozen afterwards; entries live as long
/// as the render buffer that references them. There is no eviction.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<usize, TextureId>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the texture for source image `index`, converting to RGBA8 and
    /// uploading on first use. Later calls for the same index return the
    /// memoized id without touching the device.
    pub fn get_or_create<D: Device>(
        &mut self,
        device: &mut D,
        images: &[gltf::image::Data],
        index: usize,
        generate_mips: bool,
    ) -> Result<TextureId, SceneError> {
        if let Some(&id) = self.entries.get(&index) {
            return Ok(id);
        }

        let image = images
            .get(index)
            .ok_or(SceneError::InvalidTextureReference {
                index,
                image_count: images.len(),
            })?;

        let pixels = rgba8_pixels(image)?;
        let id = device.create_texture(
            image.width,
            image.height,
            TextureFormat::Rgba8,
            &pixels,
            generate_mips,
        );
        log::debug!(
            "  Uploaded image {} ({}x{}, {:?})",
            index,
            image.width,
            image.height,
            image.format
        );

        self.entries.insert(index, id);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Expands decoded glTF pixels into the RGBA8 layout the device uploads.
fn rgba8_pixels(image: &gltf::image::Data) -> Result<Vec<u8>, SceneError> {
    use gltf::image::Format;

    let width = image.width;
    let height = image.height;

    let dynamic = match image.format {
        // Already in upload layout.
        Format::R8G8B8A8 => return Ok(image.pixels.clone()),
        Format::R8 => image::GrayImage::from_raw(width, height, image.pixels.clone())
            .map(DynamicImage::ImageLuma8),
        Format::R8G8 => image::GrayAlphaImage::from_raw(width, height, image.pixels.clone())
            .map(DynamicImage::ImageLumaA8),
        Format::R8G8B8 => image::RgbImage::from_raw(width, height, image.pixels.clone())
            .map(DynamicImage::ImageRgb8),
        Format::R16 => image::ImageBuffer::from_raw(width, height, bytes_to_u16(&image.pixels))
            .map(DynamicImage::ImageLuma16),
        Format::R16G16 => image::ImageBuffer::from_raw(width, height, bytes_to_u16(&image.pixels))
            .map(DynamicImage::ImageLumaA16),
        Format::R16G16B16 => {
            image::ImageBuffer::from_raw(width, height, bytes_to_u16(&image.pixels))
                .map(DynamicImage::ImageRgb16)
        }
        Format::R16G16B16A16 => {
            image::ImageBuffer::from_raw(width, height, bytes_to_u16(&image.pixels))
                .map(DynamicImage::ImageRgba16)
        }
        Format::R32G32B32FLOAT => {
            image::ImageBuffer::from_raw(width, height, bytes_to_f32(&image.pixels))
                .map(DynamicImage::ImageRgb32F)
        }
        Format::R32G32B32A32FLOAT => {
            image::ImageBuffer::from_raw(width, height, bytes_to_f32(&image.pixels))
                .map(DynamicImage::ImageRgba32F)
        }
    };

    let dynamic = dynamic.ok_or_else(|| {
        SceneError::MalformedScene(format!(
            "image pixel data does not match {}x{} {:?}",
            width, height, image.format
        ))
    })?;

    Ok(dynamic.to_rgba8().into_raw())
}

fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|c| u16::from_ne_bytes([c[0], c[1]]))
        .collect()
}

fn bytes_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
