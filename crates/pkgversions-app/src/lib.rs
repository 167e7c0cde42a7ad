//! Use case orchestration for package-versions.
//!
//! This crate provides the application layer: use cases that coordinate the domain, lock,
//! settings and render layers. It is intentionally thin and delegates heavy lifting to
//! the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging and exit codes.

#![forbid(unsafe_code)]

mod events;
mod generate;
mod lookup;
mod project;
mod sink;

pub use events::{LifecycleEvent, Operation, dispatch, subscribed_events};
pub use generate::{GenerateOutput, GenerateTarget, run_generate, run_render, to_renderable};
pub use lookup::{run_lookup, run_lookup_composer_version};
pub use project::{Project, ProjectInput, load_project};
pub use sink::{FsSink, VersionSink};
