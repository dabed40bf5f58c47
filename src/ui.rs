//! Output rendering for fieldlist.
//!
//! The core produces a [crate::core::Listing]; this module turns it into text for the terminal
//! or JSON, see [table].

pub mod table;

pub use table::{render_json, render_table};
