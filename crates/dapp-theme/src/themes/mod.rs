pub mod dark;
pub mod light;

use super::{TextSizes, ThemeColors};
use egui::{
   Color32, CornerRadius, Frame, Margin, Shadow, Stroke, Style, Visuals,
   style::{Selection, WidgetVisuals, Widgets},
};

fn text_sizes() -> TextSizes {
   TextSizes::new(16.0, 18.0)
}

/// Frame for the navigation bar, the vertical margin keeps it off the window edges
fn navbar_frame(colors: &ThemeColors) -> Frame {
   Frame {
      corner_radius: CornerRadius::same(6),
      inner_margin: Margin::symmetric(0, 8),
      outer_margin: Margin::symmetric(0, 16),
      fill: colors.bg2,
      stroke: Stroke::new(1.0, colors.border),
      shadow: Shadow::NONE,
      ..Default::default()
   }
}

fn style(colors: &ThemeColors, dark_mode: bool) -> Style {
   let widgets = widgets(colors, dark_mode);
   let visuals = visuals(widgets, colors, dark_mode);
   Style {
      visuals,
      animation_time: 0.3,
      ..Default::default()
   }
}

fn visuals(widgets: Widgets, colors: &ThemeColors, dark_mode: bool) -> Visuals {
   let base = if dark_mode {
      Visuals::dark()
   } else {
      Visuals::light()
   };

   Visuals {
      dark_mode,
      override_text_color: Some(colors.text),
      widgets,
      selection: Selection {
         bg_fill: colors.bg4,
         stroke: Stroke::new(1.0, colors.highlight),
      },
      hyperlink_color: colors.info,
      faint_bg_color: colors.bg,
      extreme_bg_color: colors.bg2,
      code_bg_color: colors.bg,
      warn_fg_color: colors.warning,
      error_fg_color: colors.error,
      window_corner_radius: CornerRadius::same(6),
      window_shadow: Shadow {
         offset: [0, 0],
         blur: 12,
         spread: 1,
         color: Color32::from_black_alpha(if dark_mode { 255 } else { 60 }),
      },
      window_fill: colors.bg2,
      window_stroke: Stroke::new(1.0, colors.border),
      panel_fill: colors.bg,
      ..base
   }
}

fn widgets(colors: &ThemeColors, dark_mode: bool) -> Widgets {
   let base = if dark_mode {
      Widgets::dark()
   } else {
      Widgets::light()
   };

   let base_visuals = WidgetVisuals {
      bg_fill: colors.bg3,
      weak_bg_fill: colors.bg3,
      bg_stroke: Stroke::new(1.0, colors.border),
      corner_radius: CornerRadius::same(4),
      fg_stroke: Stroke::new(1.0, colors.text),
      expansion: 0.0,
   };

   // Labels like the account text have no border at rest
   let mut non_interactive = base_visuals.clone();
   non_interactive.bg_stroke.width = 0.0;

   Widgets {
      noninteractive: non_interactive,
      inactive: base_visuals.clone(),
      hovered: WidgetVisuals {
         weak_bg_fill: colors.bg4,
         bg_stroke: Stroke::new(1.0, colors.highlight),
         ..base_visuals
      },
      active: WidgetVisuals {
         bg_fill: colors.bg,
         weak_bg_fill: colors.bg,
         ..base_visuals
      },
      ..base
   }
}
