use std::path::Path;

use tracing::{info, warn};

/// Decoded RGBA image ready for GPU upload.
pub struct ImageData {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// A bound globe-surface texture.
pub struct GlobeTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Load the globe surface image. A missing or undecodable file never fails
/// scene construction; it substitutes a placeholder and logs a warning.
pub fn load_image(path: &Path) -> ImageData {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            info!("loaded globe texture {:?} ({}x{})", path, width, height);
            ImageData {
                pixels: rgba.into_raw(),
                width,
                height,
            }
        }
        Err(e) => {
            warn!("failed to load globe texture {:?}: {e}; using placeholder", path);
            placeholder_image()
        }
    }
}

/// Solid-color stand-in with a faint grid so a missing texture is obvious but
/// the globe still reads as a sphere.
pub fn placeholder_image() -> ImageData {
    const SIZE: u32 = 64;
    let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);

    for y in 0..SIZE {
        for x in 0..SIZE {
            let on_grid = x % 16 == 0 || y % 16 == 0;
            let (r, g, b) = if on_grid { (40, 80, 140) } else { (12, 30, 60) };
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }

    ImageData {
        pixels,
        width: SIZE,
        height: SIZE,
    }
}

/// Upload an image and build the view/sampler pair for the globe pipeline.
pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, image: &ImageData) -> GlobeTexture {
    let size = wgpu::Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("globe_texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.width),
            rows_per_image: Some(image.height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("globe_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    GlobeTexture {
        texture,
        view,
        sampler,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions() {
        let img = placeholder_image();
        assert_eq!(img.pixels.len(), (img.width * img.height * 4) as usize);
        assert!(img.width > 0 && img.height > 0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let img = load_image(Path::new("definitely/not/here.jpg"));
        let placeholder = placeholder_image();
        assert_eq!(img.width, placeholder.width);
        assert_eq!(img.height, placeholder.height);
        assert_eq!(img.pixels, placeholder.pixels);
    }

    #[test]
    fn test_placeholder_is_opaque() {
        let img = placeholder_image();
        assert!(img.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }
}
