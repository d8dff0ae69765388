//! Merging and key normalization for gamedata.
//!
//! This module handles:
//! - Loading fragment files into JSON values
//! - Ancestor-wins deep merge of ordered fragments
//! - Recursive camelCase renaming of mapping keys

pub mod deep;
pub mod fragment;
pub mod rename;

pub use deep::{merge_fragments, merge_into};
pub use fragment::{Fragment, load_fragment, parse_fragment_str};
pub use rename::{KeyCollision, RenamedDocument, is_index_key, rename_keys, to_camel_case};
