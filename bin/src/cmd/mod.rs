//! CLI subcommand modules.
//!
//! This module contains the implementations for all aegis CLI subcommands.

pub(crate) mod analyze;
pub(crate) mod rules;
pub(crate) mod scan;
pub(crate) mod sectors;
