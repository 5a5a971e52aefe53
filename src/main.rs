#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use gui::app::NavbarApp;

pub mod assets;
pub mod core;
pub mod gui;

use crate::core::{NavbarConfig, NavbarContext, NavbarCtx, utils::trace::*};
use std::panic;

fn main() -> eframe::Result {
   panic::set_hook(Box::new(|panic_info| {
      let message = panic_info
         .payload()
         .downcast_ref::<&str>()
         .copied()
         .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
         .unwrap_or("Unknown panic");
      let location = panic_info
         .location()
         .map_or("Unknown location".to_string(), |loc| {
            format!("{}:{}:{}", loc.file(), loc.line(), loc.column())
         });
      tracing::error!("Panic occurred: '{}' at {}", message, location);
   }));

   let _tracing_guard = setup_tracing();

   let config = NavbarConfig::load();
   let ctx = NavbarCtx::new(NavbarContext::from_config(&config));

   // only use wgpu for windows
   let renderer = if cfg!(target_os = "windows") {
      eframe::Renderer::Wgpu
   } else {
      eframe::Renderer::Glow
   };

   let options = eframe::NativeOptions {
      renderer,
      viewport: egui::ViewportBuilder::default()
         .with_title(config.brand.clone())
         .with_inner_size([960.0, 540.0])
         .with_min_inner_size([640.0, 200.0]),
      ..Default::default()
   };

   eframe::run_native(
      "Dapp Navbar",
      options,
      Box::new(move |cc| create_app(cc, &config, ctx)),
   )
}

fn create_app(
   cc: &eframe::CreationContext<'_>,
   config: &NavbarConfig,
   ctx: NavbarCtx,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
   egui_extras::install_image_loaders(&cc.egui_ctx);

   let app = NavbarApp::new(cc, config, ctx).inspect_err(|e| {
      tracing::error!("Failed to start: {:?}", e);
   })?;

   Ok(Box::new(app))
}
