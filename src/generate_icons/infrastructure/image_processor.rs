use crate::domain::color::Color;
use crate::domain::icon_processor_trait::IconProcessor;
use crate::domain::icon_target::{validate_sizes, IconFormat};
use crate::domain::placement::Placement;
use super::error::InfrastructureError;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, GenericImageView, ImageBuffer, ImageEncoder, Rgba, RgbImage, RgbaImage};
use std::io::Cursor;
use tracing::debug;

// Lanczos3 を全サイズで使う (縮小・拡大とも)
const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

// これ未満のアルファは透明扱い (8bit に丸めると 0 になる)
const MIN_VISIBLE_ALPHA: f32 = 0.5 / 255.0;

type Rgba32FImage = ImageBuffer<Rgba<f32>, Vec<f32>>;

pub struct DefaultIconProcessor;

impl DefaultIconProcessor {
    pub fn new() -> Self {
        Self
    }

    fn decode(&self, source_bytes: &[u8]) -> Result<DynamicImage, InfrastructureError> {
        let reader = image::io::Reader::new(Cursor::new(source_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        let img = reader.decode().map_err(InfrastructureError::ImageLibError)?;
        debug!(
            "Decoded source {}x{} ({:?})",
            img.width(),
            img.height(),
            img.color()
        );
        Ok(img)
    }

    /// Drops any alpha channel by compositing onto an opaque white matte.
    fn flatten_onto_white(&self, img: &DynamicImage) -> RgbImage {
        if !img.color().has_alpha() {
            return img.to_rgb8();
        }
        let mut matte = RgbaImage::from_pixel(img.width(), img.height(), Color::WHITE.into());
        imageops::overlay(&mut matte, &img.to_rgba8(), 0, 0);
        DynamicImage::ImageRgba8(matte).to_rgb8()
    }

    /// Resamples with color weighted by alpha, so fully transparent pixels
    /// (typically black) do not darken the logo's anti-aliased edges.
    fn resize_premultiplied(&self, img: &DynamicImage, width: u32, height: u32) -> RgbaImage {
        let mut premultiplied = img.to_rgba32f();
        for p in premultiplied.pixels_mut() {
            let a = p[3];
            p[0] *= a;
            p[1] *= a;
            p[2] *= a;
        }

        let mut resized: Rgba32FImage = imageops::resize(&premultiplied, width, height, RESAMPLE_FILTER);
        for p in resized.pixels_mut() {
            // Lanczos のオーバーシュートで範囲外になり得る
            let a = p[3].clamp(0.0, 1.0);
            if a < MIN_VISIBLE_ALPHA {
                *p = Rgba([0.0, 0.0, 0.0, 0.0]);
                continue;
            }
            p[0] = (p[0] / a).clamp(0.0, 1.0);
            p[1] = (p[1] / a).clamp(0.0, 1.0);
            p[2] = (p[2] / a).clamp(0.0, 1.0);
            p[3] = a;
        }
        DynamicImage::ImageRgba32F(resized).to_rgba8()
    }

    fn pad_to_square(&self, img: &DynamicImage, size: u32) -> RgbaImage {
        let placement = Placement::fit_centered(img.width(), img.height(), size);
        let resized = if placement.width == img.width() && placement.height == img.height() {
            img.to_rgba8()
        } else if img.color().has_alpha() {
            self.resize_premultiplied(img, placement.width, placement.height)
        } else {
            img.resize_exact(placement.width, placement.height, RESAMPLE_FILTER)
                .to_rgba8()
        };
        if placement.fills_canvas(size) {
            return resized;
        }

        let mut canvas = RgbaImage::from_pixel(size, size, Color::TRANSPARENT.into());
        let (x, y) = (placement.x as i64, placement.y as i64);
        if img.color().has_alpha() {
            imageops::overlay(&mut canvas, &resized, x, y);
        } else {
            // アルファなし: マスクなしでそのまま貼り付け
            imageops::replace(&mut canvas, &resized, x, y);
        }
        canvas
    }
}

impl Default for DefaultIconProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl IconProcessor for DefaultIconProcessor {
    fn create_ico(&self, source_bytes: &[u8], sizes: &[u32]) -> Result<Vec<u8>, InfrastructureError> {
        if sizes.is_empty() {
            return Err(InfrastructureError::ImageProcessingError(
                "no ICO sizes requested".to_string(),
            ));
        }
        validate_sizes(IconFormat::Ico, sizes)?;

        let img = self.decode(source_bytes)?;
        let rgb = self.flatten_onto_white(&img);

        let mut frames = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let resized = imageops::resize(&rgb, size, size, RESAMPLE_FILTER);
            // ICO に埋め込む PNG は 32bpp RGBA のみ有効。アルファは全て 255
            let opaque = DynamicImage::ImageRgb8(resized).to_rgba8();
            let frame = IcoFrame::as_png(opaque.as_raw(), size, size, ColorType::Rgba8)
                .map_err(InfrastructureError::ImageLibError)?;
            frames.push(frame);
        }

        let mut buffer = Vec::new();
        IcoEncoder::new(&mut buffer)
            .encode_images(&frames)
            .map_err(InfrastructureError::ImageLibError)?;
        Ok(buffer)
    }

    fn create_png_icon(&self, source_bytes: &[u8], size: u32) -> Result<Vec<u8>, InfrastructureError> {
        validate_sizes(IconFormat::Png, &[size])?;

        let img = self.decode(source_bytes)?;
        let canvas = self.pad_to_square(&img, size);

        let mut buffer = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilterType::Adaptive);
        encoder
            .write_image(canvas.as_raw(), size, size, ColorType::Rgba8)
            .map_err(InfrastructureError::ImageLibError)?;
        Ok(buffer)
    }
}
