pub mod app;
pub mod ui;

use crate::assets::icons::Icons;
use crate::core::NavbarCtx;
use dapp_theme::Theme;
use eframe::egui::Ui;
use std::sync::Arc;

pub struct GUI {
   pub ctx: NavbarCtx,

   pub theme: Theme,

   pub icons: Arc<Icons>,

   pub navigation: ui::Navigation,
}

impl GUI {
   pub fn new(ctx: NavbarCtx, icons: Arc<Icons>, theme: Theme) -> Self {
      Self {
         ctx,
         theme,
         icons,
         navigation: ui::Navigation::new(),
      }
   }

   pub fn show_navigation(&self, ui: &mut Ui) -> ui::NavigationResponse {
      let (brand, account) = self.ctx.read(|ctx| (ctx.brand.clone(), ctx.account.clone()));

      self.navigation.show(
         &self.theme,
         &self.icons,
         &brand,
         account.as_ref(),
         ui,
      )
   }
}
