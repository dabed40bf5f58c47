//! Library crate for fieldlist.
//!
//! The shipped application is the `fl` binary (`src/main.rs`).
//!
//! The [core] module holds the field definition compiler, the name matcher, the evaluator and
//! the row builder. It performs no I/O apart from [core::browse_dir] and [core::build_listing],
//! so other front ends (a web handler, a static site generator) can reuse it directly.

pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
