use super::super::{Theme, ThemeColors, ThemeKind};
use egui::Color32;

// Background

const BG: Color32 = Color32::from_rgba_premultiplied(226, 227, 232, 255);
const BG2: Color32 = Color32::from_rgba_premultiplied(232, 232, 232, 255);
const BG3: Color32 = Color32::from_rgba_premultiplied(246, 246, 248, 255);
const BG4: Color32 = Color32::from_rgba_premultiplied(249, 249, 249, 255);

const TEXT: Color32 = Color32::from_rgba_premultiplied(25, 25, 25, 255);

const HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(44, 44, 44, 255);
const BORDER: Color32 = Color32::from_rgba_premultiplied(165, 165, 165, 255);
const PRIMARY: Color32 = Color32::from_rgba_premultiplied(150, 62, 121, 255);

// Semantic

const ERROR: Color32 = Color32::from_rgba_premultiplied(153, 0, 32, 255);
const WARNING: Color32 = Color32::from_rgba_premultiplied(192, 71, 0, 255);
const INFO: Color32 = Color32::from_rgba_premultiplied(111, 47, 206, 255);

/// Return this theme
pub fn theme() -> Theme {
   let colors = colors();
   Theme {
      dark_mode: false,
      kind: ThemeKind::Light,
      style: super::style(&colors, false),
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
