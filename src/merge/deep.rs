//! Ancestor-wins deep merge.
//!
//! Fragments are folded shallowest first. A later fragment may add keys at
//! any depth but never replaces a value that is already present:
//! - Missing key: the incoming value is copied in
//! - Both objects: merge recursively under the same rule
//! - Anything else (scalars, arrays, mismatched types): the existing value stays

use crate::merge::fragment::Fragment;
use serde_json::{Map, Value};

/// Merge `incoming` into `acc` without overriding anything `acc` already holds.
///
/// `incoming` is only read; copied values are deep clones.
pub fn merge_into(acc: &mut Map<String, Value>, incoming: &Map<String, Value>) {
	for (key, incoming_value) in incoming {
		match acc.get_mut(key) {
			None => {
				acc.insert(key.clone(), incoming_value.clone());
			}
			Some(Value::Object(existing)) => {
				if let Value::Object(incoming_map) = incoming_value {
					merge_into(existing, incoming_map);
				}
			}
			Some(_) => {}
		}
	}
}

/// Fold fragments, in the given order, into one document.
///
/// Zero fragments yield an empty object.
pub fn merge_fragments(fragments: &[Fragment]) -> Value {
	let mut acc = Map::new();
	for fragment in fragments {
		merge_into(&mut acc, &fragment.data);
	}
	Value::Object(acc)
}
