//! Scratch pad for code snippets with clickable `path:line` references.
//!
//! Copied snippets are stacked newest-first under a provenance header. Every
//! `path:line` reference in the accumulated text becomes a link: the pane
//! keeps a table of character ranges that pointer and click events are
//! resolved against, and rebuilds it whenever the text changes.

pub mod buffer;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod header;
pub mod host;
pub mod indexer;
pub mod links;
pub mod navigation;
pub mod pane;
pub mod render;
pub mod scanner;
pub mod types;
