use super::NavbarConfig;
use dapp_account::AccountId;
use std::sync::{Arc, RwLock};

/// State shared between the UI and whoever supplies the connected account
#[derive(Debug, Clone, Default)]
pub struct NavbarContext {
   pub account: Option<AccountId>,
   pub brand: String,
}

impl NavbarContext {
   pub fn from_config(config: &NavbarConfig) -> Self {
      Self {
         account: config.account.clone(),
         brand: config.brand.clone(),
      }
   }
}

#[derive(Debug, Clone, Default)]
pub struct NavbarCtx(Arc<RwLock<NavbarContext>>);

impl NavbarCtx {
   pub fn new(context: NavbarContext) -> Self {
      Self(Arc::new(RwLock::new(context)))
   }

   /// Shared access to the context
   pub fn read<R>(&self, reader: impl FnOnce(&NavbarContext) -> R) -> R {
      reader(&self.0.read().unwrap())
   }

   /// Exclusive mutable access to the context
   pub fn write<R>(&self, writer: impl FnOnce(&mut NavbarContext) -> R) -> R {
      writer(&mut self.0.write().unwrap())
   }

   pub fn account(&self) -> Option<AccountId> {
      self.read(|ctx| ctx.account.clone())
   }

   pub fn brand(&self) -> String {
      self.read(|ctx| ctx.brand.clone())
   }

   pub fn set_account(&self, account: impl Into<AccountId>) {
      let account = account.into();
      tracing::info!("Account set to {}", account.truncated());
      self.write(|ctx| ctx.account = Some(account));
   }

   pub fn clear_account(&self) {
      tracing::info!("Account cleared");
      self.write(|ctx| ctx.account = None);
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn clones_share_the_same_state() {
      let ctx = NavbarCtx::default();
      let other = ctx.clone();

      assert!(ctx.account().is_none());

      other.set_account("0xABCDEF0123456789000000000000000000001234");
      assert_eq!(
         ctx.account().map(|a| a.truncated()),
         Some("0xABC...1234".to_string())
      );

      ctx.clear_account();
      assert!(other.account().is_none());
   }

   #[test]
   fn built_from_config() {
      let config = NavbarConfig {
         account: Some(AccountId::from("0x1")),
         ..Default::default()
      };
      let ctx = NavbarCtx::new(NavbarContext::from_config(&config));
      assert_eq!(ctx.brand(), config.brand);
      assert_eq!(ctx.account(), Some(AccountId::from("0x1")));
   }
}
