//! Generates Unity UI binding and logic scripts from an element tree.
//!
//! Each UI root produces two C# partial-class files. The binding artifact is
//! rewritten on every run; the logic artifact is scaffolded once and then
//! owned by the user. Placeholder handler bodies are added to the binding
//! only for handlers the logic artifact does not define yet, so the project
//! keeps compiling either way.

pub mod cli;
pub mod element;
pub mod emit;
pub mod error;
pub mod generate;
pub mod output;
pub mod report;
pub mod trace;

pub use error::{CodegenError, Result};
