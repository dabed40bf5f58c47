//! Configuration for fieldlist.
//!
//! Two kinds of configuration exist:
//! - the application config `fieldlist.toml` ([load], [general], [display]) with lookup and
//!   rendering preferences;
//! - per directory listing configs `.fieldlist.json` ([dir]) holding the column definitions,
//!   found with [discover].

pub mod dir;
pub mod discover;
pub mod display;
pub mod general;
pub mod load;

pub use dir::{ConfigError, DirConfig, generate_sample, load_listing_config};
pub use discover::find_config;
pub use display::Display;
pub use general::{General, InternalGeneral};
pub use load::Config;
