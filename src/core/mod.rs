pub mod config;
pub mod context;
pub mod utils;

pub use config::NavbarConfig;
pub use context::{NavbarContext, NavbarCtx};
