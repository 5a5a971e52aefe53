use std::sync::Arc;

use crate::assets::icons::Icons;
use crate::core::{NavbarConfig, NavbarCtx};
use crate::gui::GUI;
use dapp_theme::Theme;
use eframe::{
   CreationContext,
   egui::{self, Frame},
};

pub struct NavbarApp {
   pub on_startup: bool,
   pub gui: GUI,
}

impl NavbarApp {
   /// `ctx` is the handle the account gets written to from outside the UI
   pub fn new(
      cc: &CreationContext,
      config: &NavbarConfig,
      ctx: NavbarCtx,
   ) -> Result<Self, anyhow::Error> {
      let theme = Theme::new(config.theme);
      cc.egui_ctx.set_style(theme.style.clone());

      let icons = Arc::new(Icons::new(&cc.egui_ctx, config.logo_size)?);

      tracing::info!(
         "Starting with theme {} and account {}",
         theme.kind.to_str(),
         ctx.account().map(|a| a.truncated()).unwrap_or_else(|| "none".to_string())
      );

      Ok(Self {
         on_startup: true,
         gui: GUI::new(ctx, icons, theme),
      })
   }

   fn start_up(&mut self, ctx: &egui::Context) {
      ctx.set_style(self.gui.theme.style.clone());
   }
}

impl eframe::App for NavbarApp {
   fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
      if self.on_startup {
         self.start_up(ctx);
         self.on_startup = false;
      }

      let bg_frame = Frame::new().fill(self.gui.theme.colors.bg);

      egui::TopBottomPanel::top("navigation")
         .resizable(false)
         .show_separator_line(false)
         .frame(bg_frame.clone())
         .show(ctx, |ui| {
            self.gui.theme.apply(ui);
            let response = self.gui.show_navigation(ui);

            if response.brand_clicked {
               // Already at the root, nothing to navigate to
               tracing::debug!("Brand clicked");
            }
         });

      egui::CentralPanel::default()
         .frame(bg_frame)
         .show(ctx, |_ui| {
            // nothing for now, the bar is the whole app
         });
   }
}
