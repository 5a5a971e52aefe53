use egui::{Color32, Frame, Style, Ui};

pub mod themes;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeKind {
   #[default]
   Dark,

   Light,
}

impl ThemeKind {
   pub fn to_str(&self) -> &str {
      match self {
         ThemeKind::Dark => "Dark",
         ThemeKind::Light => "Light",
      }
   }
}

#[derive(Debug, Clone)]
pub struct Theme {
   /// True if the theme is dark
   pub dark_mode: bool,
   pub kind: ThemeKind,
   pub style: Style,
   pub colors: ThemeColors,
   pub text_sizes: TextSizes,
   /// Frame painted behind the navigation bar
   pub navbar_frame: Frame,
}

impl Theme {
   pub fn new(kind: ThemeKind) -> Self {
      match kind {
         ThemeKind::Dark => themes::dark::theme(),
         ThemeKind::Light => themes::light::theme(),
      }
   }

   /// Apply the theme's visuals to this ui
   pub fn apply(&self, ui: &mut Ui) {
      ui.style_mut().visuals = self.style.visuals.clone();
   }
}

impl Default for Theme {
   fn default() -> Self {
      Self::new(ThemeKind::default())
   }
}

/// This is the color palette of the theme
#[derive(Copy, Clone, Debug)]
pub struct ThemeColors {
   /// Main BG color of the theme
   pub bg: Color32,

   /// Navigation bar background
   pub bg2: Color32,

   /// Widget background
   pub bg3: Color32,

   /// Widget background on hover
   pub bg4: Color32,

   /// Main text color
   pub text: Color32,

   pub highlight: Color32,

   pub border: Color32,

   /// The brand label color
   pub primary: Color32,

   pub error: Color32,

   pub warning: Color32,

   /// Hyperlinks
   pub info: Color32,
}

#[derive(Clone, Default, Debug)]
pub struct TextSizes {
   /// The account label
   pub normal: f32,
   /// The brand label
   pub large: f32,
}

impl TextSizes {
   pub fn new(normal: f32, large: f32) -> Self {
      Self { normal, large }
   }
}
