//! Fragment discovery for gamedata.
//!
//! This module handles:
//! - Expanding the fragment glob under a project root
//! - Ordering fragment paths by nesting depth

pub mod finder;
pub mod sorter;

pub use finder::discover_fragments;
pub use sorter::{path_depth, sort_by_depth};
