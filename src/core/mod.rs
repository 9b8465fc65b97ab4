//! Shared primitives: embedded corpora, classification, random selection,
//! configuration, logging and terminal rendering.

pub mod assets;
pub mod classify;
pub mod config;
pub mod corpus;
pub mod error;
pub mod logging;
pub mod select;
pub mod tui;
