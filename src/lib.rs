#[macro_use]
extern crate lazy_static;

pub mod cacher;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod item;
pub mod menu;
pub mod models;
pub mod plugin;
pub mod router;

mod util;

pub use config::Config;
pub use error::{Error, Result};
pub use item::{Info, MenuItem};
pub use plugin::Plugin;
pub use router::Route;
