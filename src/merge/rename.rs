use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Runs of anything that is not a letter or digit separate words in a key.
static SEPARATORS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern is valid"));

/// A key dropped because another key in the same object renamed to the same target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
	/// JSON pointer (in renamed keys) of the object holding both keys.
	pub path: String,

	/// The key whose value was dropped.
	pub original_key: String,

	/// The camelCase key both keys map to.
	pub camel_key: String,
}

/// A renamed copy of a merged document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamedDocument {
	/// Structurally independent copy with camelCase object keys.
	pub value: Value,

	/// Keys lost to collisions, in traversal order.
	pub collisions: Vec<KeyCollision>,
}

/// Convert a separator-delimited key to camelCase.
///
/// Only separators split words; existing case boundaries are kept as written,
/// so `fooBar` is unchanged while `foo-bar`, `foo_bar` and `foo bar` all
/// become `fooBar`. An all-caps word is lowercased first (`ITEM_ID` becomes
/// `itemId`).
pub fn to_camel_case(key: &str) -> String {
	let mut out = String::with_capacity(key.len());

	let words = SEPARATORS.split(key).filter(|word| !word.is_empty());
	for (i, word) in words.enumerate() {
		let word = if is_all_caps(word) {
			word.to_lowercase()
		} else {
			word.to_string()
		};

		let mut chars = word.chars();
		if let Some(first) = chars.next() {
			if i == 0 {
				out.extend(first.to_lowercase());
			} else {
				out.extend(first.to_uppercase());
			}
			out.push_str(chars.as_str());
		}
	}

	out
}

fn is_all_caps(word: &str) -> bool {
	word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Whether a key is an array-style index (`"0"`, `"12"`), left as is.
pub fn is_index_key(key: &str) -> bool {
	!key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

fn target_key(key: &str) -> String {
	if is_index_key(key) {
		key.to_string()
	} else {
		to_camel_case(key)
	}
}

/// Build a camelCase-keyed copy of `value`.
///
/// Objects are renamed at every depth, including objects inside arrays.
/// When two keys of one object map to the same camelCase key, the first
/// writer wins, with one exception: a key already spelled as the target
/// keeps its own value even if it appears later. Each dropped key is listed
/// in [`RenamedDocument::collisions`].
pub fn rename_keys(value: &Value) -> RenamedDocument {
	let mut collisions = Vec::new();
	let value = rename_value(value, "", &mut collisions);
	RenamedDocument { value, collisions }
}

fn rename_value(value: &Value, path: &str, collisions: &mut Vec<KeyCollision>) -> Value {
	match value {
		Value::Object(map) => Value::Object(rename_map(map, path, collisions)),
		Value::Array(items) => Value::Array(
			items
				.iter()
				.enumerate()
				.map(|(i, item)| rename_value(item, &format!("{path}/{i}"), collisions))
				.collect(),
		),
		scalar => scalar.clone(),
	}
}

fn rename_map(
	map: &Map<String, Value>,
	path: &str,
	collisions: &mut Vec<KeyCollision>,
) -> Map<String, Value> {
	let mut out = Map::with_capacity(map.len());

	for (key, value) in map {
		let camel_key = target_key(key);
		let renamed = camel_key != *key;

		if out.contains_key(&camel_key) {
			// An unrenamed key found here was already copied by the key that claimed its slot.
			if renamed {
				collisions.push(KeyCollision {
					path: path.to_string(),
					original_key: key.clone(),
					camel_key,
				});
			}
			continue;
		}

		// Only a key already in its final form can hold the pre-existing value
		let source = match map.get(&camel_key) {
			Some(existing) if renamed && target_key(&camel_key) == camel_key => {
				collisions.push(KeyCollision {
					path: path.to_string(),
					original_key: key.clone(),
					camel_key: camel_key.clone(),
				});
				existing
			}
			_ => value,
		};

		let child_path = format!("{path}/{}", escape_pointer(&camel_key));
		out.insert(camel_key, rename_value(source, &child_path, collisions));
	}

	out
}

fn escape_pointer(key: &str) -> String {
	key.replace('~', "~0").replace('/', "~1")
}
