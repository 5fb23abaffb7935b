//! # Pagecraft HTML Compiler
//!
//! The publishable markup form: a one-way, lossy rendering of a
//! document as a complete standalone HTML page. Not parseable back
//! into a document; the structured (JSON) form is the round-trippable
//! one.

mod compiler;

#[cfg(test)]
mod tests;

pub use compiler::{compile_element, compile_to_html, CompileOptions};
