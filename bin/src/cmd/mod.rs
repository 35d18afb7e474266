//! CLI subcommand modules.
//!
//! This module contains the implementations for all siegfried CLI subcommands.

pub(crate) mod pb;
pub(crate) mod roic;
pub(crate) mod screen;
pub(crate) mod universe;
