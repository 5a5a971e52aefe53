use egui::{ColorImage, Context, Image, TextureHandle, epaint::textures::TextureOptions, vec2};
use crate::core::config::MAX_LOGO_SIZE;
use anyhow::bail;
use image::imageops::FilterType;

const LOGO: &[u8] = include_bytes!("logo.png");

/// Icons used in the GUI
#[derive(Clone)]
pub struct Icons {
   pub logo: TextureHandle,
   /// Side length in points the logo was resized to
   pub logo_size: f32,
}

impl Icons {
   /// Decode the bundled logo and upload it at `logo_size` x `logo_size`
   pub fn new(ctx: &Context, logo_size: f32) -> Result<Self, anyhow::Error> {
      if !logo_size.is_finite() || logo_size <= 0.0 || logo_size > MAX_LOGO_SIZE {
         bail!("Logo size {} is outside (0, {}]", logo_size, MAX_LOGO_SIZE);
      }

      let side = logo_size.round().max(1.0) as u32;
      let logo = load_and_resize_image(LOGO, side, side)?;

      let texture_options = TextureOptions::default();
      let logo = ctx.load_texture("logo", logo, texture_options);

      tracing::debug!("Logo loaded at {}x{}", side, side);

      Ok(Self { logo, logo_size })
   }

   pub fn logo(&self) -> Image<'static> {
      Image::new(&self.logo).fit_to_exact_size(vec2(self.logo_size, self.logo_size))
   }
}

fn load_and_resize_image(
   image_data: &[u8],
   width: u32,
   height: u32,
) -> Result<ColorImage, image::ImageError> {
   let image = image::load_from_memory(image_data)?;
   let resized_image = image.resize_exact(width, height, FilterType::Lanczos3);
   let size = [resized_image.width() as _, resized_image.height() as _];
   let image_buffer = resized_image.to_rgba8();
   let pixels = image_buffer.as_flat_samples();
   Ok(ColorImage::from_rgba_unmultiplied(
      size,
      pixels.as_slice(),
   ))
}
