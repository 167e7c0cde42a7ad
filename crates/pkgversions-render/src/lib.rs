//! Rendering of the generated versions module.
//!
//! Output is a pure function of the entries: no timestamps, no sorting, no environment.

#![forbid(unsafe_code)]

mod model;
mod rust;

pub use model::{RenderableEntry, RenderableVersions};
pub use rust::{render_rust_module, rust_string_literal};
