use super::utils::data_dir;
use dapp_account::AccountId;
use dapp_theme::ThemeKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "navbar.json";

pub const ACCOUNT_ENV: &str = "DAPP_ACCOUNT";
pub const BRAND_ENV: &str = "DAPP_BRAND";

pub const DEFAULT_BRAND: &str = "Dapp University DAO";
pub const DEFAULT_LOGO_SIZE: f32 = 40.0;
pub const MAX_LOGO_SIZE: f32 = 256.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
   /// Label shown next to the logo
   pub brand: String,

   /// The connected account, if any
   pub account: Option<AccountId>,

   pub theme: ThemeKind,

   /// Width and height of the logo in points
   pub logo_size: f32,
}

impl Default for NavbarConfig {
   fn default() -> Self {
      Self {
         brand: DEFAULT_BRAND.to_string(),
         account: None,
         theme: ThemeKind::Dark,
         logo_size: DEFAULT_LOGO_SIZE,
      }
   }
}

impl NavbarConfig {
   /// Load the config from the data dir and apply the env overrides
   ///
   /// Falls back to the defaults if the file is missing or invalid
   pub fn load() -> Self {
      let lookup = |key: &str| std::env::var(key).ok();

      match data_dir() {
         Ok(dir) => Self::load_from_dir(&dir, lookup),
         Err(e) => {
            tracing::warn!("Failed to access the data dir: {:?}", e);
            let mut config = Self::default();
            config.apply_env_overrides(lookup);
            config
         }
      }
   }

   /// Load the config file in `dir`, writing the defaults there if it does not exist
   ///
   /// The env overrides only apply to the returned config, never to the file
   pub fn load_from_dir(dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
      let path = dir.join(CONFIG_FILE);
      let mut config = Self::load_or_default(&path);

      // Leave a file behind for the user to edit
      if !path.exists() {
         if let Err(e) = config.save_to_file(&path) {
            tracing::warn!("Failed to save the default config: {:?}", e);
         }
      }

      config.apply_env_overrides(lookup);
      config
   }

   pub fn load_or_default(path: &Path) -> Self {
      if !path.exists() {
         tracing::info!("No config found at {}, using defaults", path.display());
         return Self::default();
      }

      match Self::load_from_file(path) {
         Ok(config) => config,
         Err(e) => {
            tracing::warn!("Failed to load config from {}: {:?}", path.display(), e);
            Self::default()
         }
      }
   }

   pub fn load_from_file(path: &Path) -> Result<Self, anyhow::Error> {
      let data = std::fs::read(path)?;
      let config: Self = serde_json::from_slice(&data)?;
      Ok(config.sanitized())
   }

   pub fn save_to_file(&self, path: &Path) -> Result<(), anyhow::Error> {
      let data = serde_json::to_vec_pretty(self)?;
      std::fs::write(path, data)?;
      Ok(())
   }

   /// Override fields from the environment
   ///
   /// Empty values are ignored
   pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
      if let Some(account) = lookup(ACCOUNT_ENV).filter(|v| !v.trim().is_empty()) {
         self.account = Some(AccountId::new(account));
      }

      if let Some(brand) = lookup(BRAND_ENV).filter(|v| !v.trim().is_empty()) {
         self.brand = brand;
      }
   }

   fn sanitized(mut self) -> Self {
      let valid =
         self.logo_size.is_finite() && self.logo_size > 0.0 && self.logo_size <= MAX_LOGO_SIZE;
      if !valid {
         tracing::warn!(
            "Invalid logo size {}, using {}",
            self.logo_size,
            DEFAULT_LOGO_SIZE
         );
         self.logo_size = DEFAULT_LOGO_SIZE;
      }
      self
   }
}
