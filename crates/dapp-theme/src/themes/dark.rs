use super::super::{Theme, ThemeColors, ThemeKind};
use egui::Color32;

// Background

const BG: Color32 = Color32::from_rgba_premultiplied(17, 17, 18, 255);
const BG2: Color32 = Color32::from_rgba_premultiplied(24, 24, 26, 255);
const BG3: Color32 = Color32::from_rgba_premultiplied(31, 31, 34, 255);
const BG4: Color32 = Color32::from_rgba_premultiplied(43, 43, 48, 255);

const TEXT: Color32 = Color32::from_rgba_premultiplied(204, 204, 204, 255);

const HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(160, 160, 160, 255);
const BORDER: Color32 = Color32::from_rgba_premultiplied(46, 46, 46, 255);
const PRIMARY: Color32 = Color32::from_rgba_premultiplied(221, 152, 198, 255);

// Semantic

const ERROR: Color32 = Color32::from_rgba_premultiplied(237, 57, 57, 255);
const WARNING: Color32 = Color32::from_rgba_premultiplied(228, 128, 25, 255);
const INFO: Color32 = Color32::from_rgba_premultiplied(195, 153, 255, 255);

/// Return this theme
pub fn theme() -> Theme {
   let colors = colors();
   Theme {
      dark_mode: true,
      kind: ThemeKind::Dark,
      style: super::style(&colors, true),
      colors,
      text_sizes: super::text_sizes(),
      navbar_frame: super::navbar_frame(&colors),
   }
}

fn colors() -> ThemeColors {
   ThemeColors {
      bg: BG,
      bg2: BG2,
      bg3: BG3,
      bg4: BG4,
      text: TEXT,
      highlight: HIGHLIGHT,
      border: BORDER,
      primary: PRIMARY,
      error: ERROR,
      warning: WARNING,
      info: INFO,
   }
}
