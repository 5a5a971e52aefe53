use crate::assets::icons::Icons;
use dapp_account::AccountId;
use dapp_theme::Theme;
use egui::{Align, CursorIcon, Label, Layout, Rect, RichText, Sense, Ui};

/// Horizontal space around the logo and at the right edge of the bar
pub const DEFAULT_MARGIN: f32 = 16.0;

/// What happened in the bar this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationResponse {
   /// The brand label was clicked
   pub brand_clicked: bool,

   /// The account label was clicked and the full identifier was copied
   pub account_copied: bool,

   /// The shortened account text that was shown, if any
   pub account_text: Option<String>,

   pub brand_rect: Option<Rect>,

   pub account_rect: Option<Rect>,
}

/// The top navigation bar
///
/// Shows the logo and brand on the left and the shortened account on the right.
pub struct Navigation {
   pub margin: f32,
}

impl Navigation {
   pub fn new() -> Self {
      Self {
         margin: DEFAULT_MARGIN,
      }
   }

   pub fn show(
      &self,
      theme: &Theme,
      icons: &Icons,
      brand: &str,
      account: Option<&AccountId>,
      ui: &mut Ui,
   ) -> NavigationResponse {
      let mut response = NavigationResponse::default();

      theme.navbar_frame.clone().show(ui, |ui| {
         ui.set_width(ui.available_width());

         ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.add_space(self.margin);
            ui.add(icons.logo());
            ui.add_space(self.margin);

            let brand_text = RichText::new(brand)
               .size(theme.text_sizes.large)
               .color(theme.colors.primary)
               .strong();

            let brand_res = ui
               .add(Label::new(brand_text).sense(Sense::click()))
               .on_hover_cursor(CursorIcon::PointingHand);

            response.brand_clicked = brand_res.clicked();
            response.brand_rect = Some(brand_res.rect);

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
               ui.add_space(self.margin);

               let Some(account) = account else {
                  return;
               };

               let short = account.truncated();
               let account_text = RichText::new(short.clone())
                  .size(theme.text_sizes.normal)
                  .color(theme.colors.text);

               let account_res = ui
                  .selectable_label(false, account_text)
                  .on_hover_text(account.as_str());

               if account_res.clicked() {
                  ui.ctx().copy_text(account.to_string());
                  tracing::info!("Copied account {} to clipboard", short);
                  response.account_copied = true;
               }

               response.account_text = Some(short);
               response.account_rect = Some(account_res.rect);
            });
         });
      });

      response
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use egui::{
      CentralPanel, Context, Event, FullOutput, Modifiers, OutputCommand, PointerButton, Pos2,
      RawInput, vec2,
   };

   const ADDRESS: &str = "0xABCDEF0123456789000000000000000000001234";
   const BRAND: &str = "Dapp University DAO";

   struct Bar {
      ctx: Context,
      icons: Icons,
      theme: Theme,
      navigation: Navigation,
      account: Option<AccountId>,
   }

   impl Bar {
      fn new(account: Option<&str>) -> Self {
         let ctx = Context::default();
         let icons = Icons::new(&ctx, 40.0).unwrap();
         Self {
            ctx,
            icons,
            theme: Theme::default(),
            navigation: Navigation::new(),
            account: account.map(AccountId::from),
         }
      }

      fn frame(&self, events: Vec<Event>) -> (NavigationResponse, FullOutput) {
         let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1024.0, 200.0))),
            events,
            ..Default::default()
         };

         // egui may run more than one pass per frame, only the first one sees the input
         let mut response: Option<NavigationResponse> = None;
         let output = self.ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
               let mut pass = self.navigation.show(
                  &self.theme,
                  &self.icons,
                  BRAND,
                  self.account.as_ref(),
                  ui,
               );
               if let Some(prev) = &response {
                  pass.brand_clicked |= prev.brand_clicked;
                  pass.account_copied |= prev.account_copied;
               }
               response = Some(pass);
            });
         });
         (response.unwrap_or_default(), output)
      }

      /// Press and release the primary button at `pos` over two frames
      fn click(&self, pos: Pos2) -> (NavigationResponse, FullOutput) {
         let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
         };

         let _ = self.frame(vec![Event::PointerMoved(pos), button(true)]);
         self.frame(vec![button(false)])
      }
   }

   fn copied_text(output: &FullOutput) -> Vec<String> {
      output
         .platform_output
         .commands
         .iter()
         .filter_map(|cmd| match cmd {
            OutputCommand::CopyText(text) => Some(text.clone()),
            _ => None,
         })
         .collect()
   }

   #[test]
   fn shows_the_shortened_account() {
      let (response, _) = Bar::new(Some(ADDRESS)).frame(Vec::new());

      assert_eq!(response.account_text.as_deref(), Some("0xABC...1234"));
      assert!(response.account_rect.is_some());
      assert!(!response.account_copied);
      assert!(!response.brand_clicked);
   }

   #[test]
   fn no_account_leaves_the_right_side_empty() {
      let (response, _) = Bar::new(None).frame(Vec::new());

      assert!(response.brand_rect.is_some());
      assert_eq!(response.account_text, None);
      assert_eq!(response.account_rect, None);
      assert!(!response.account_copied);
   }

   #[test]
   fn short_identifiers_still_render() {
      let (response, _) = Bar::new(Some("")).frame(Vec::new());
      assert_eq!(response.account_text.as_deref(), Some("..."));
   }

   #[test]
   fn clicking_the_account_copies_the_full_identifier() {
      let bar = Bar::new(Some(ADDRESS));
      let (layout, _) = bar.frame(Vec::new());
      let rect = layout.account_rect.unwrap();

      let (response, output) = bar.click(rect.center());

      assert!(response.account_copied);
      assert!(!response.brand_clicked);
      assert_eq!(copied_text(&output), vec![ADDRESS.to_string()]);
   }

   #[test]
   fn clicking_the_brand_is_reported() {
      let bar = Bar::new(Some(ADDRESS));
      let (layout, _) = bar.frame(Vec::new());
      let rect = layout.brand_rect.unwrap();

      let (response, output) = bar.click(rect.center());

      assert!(response.brand_clicked);
      assert!(!response.account_copied);
      assert!(copied_text(&output).is_empty());
   }
}
