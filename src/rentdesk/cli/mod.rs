//! # CLI Layer
//!
//! This is **one possible UI client** for the desk, not the application itself.
//! It is the only place that knows about stdin/stdout, exit codes and colors.
//!
//! ## Module Structure
//!
//! - `commands`: `run()` and the interactive menu session
//! - `render`: Output formatting (menu, car listings, rental summary, messages)
//! - `setup`: Argument parsing via clap
//! - `logging`: tracing subscriber on stderr

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
