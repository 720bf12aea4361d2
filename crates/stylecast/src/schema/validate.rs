//! Shape validation with leaf-precise error paths.
//!
//! Serde reports *what* went wrong but, for `serde_json::Value` input, not
//! *where*. Every schema record defaults all of its members, so the failing
//! field can be found by pruning: keep narrowing the document to a single
//! key (or array element) while it still fails to decode.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::BundleError;

/// Decodes `value` as `T`, reporting the first offending leaf path on error.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, BundleError> {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(decoded) => Ok(decoded),
        Err(_) => Err(locate::<T>(value)),
    }
}

/// Finds the narrowest path at which `value` still fails to decode as `T`.
fn locate<T: DeserializeOwned>(value: &Value) -> BundleError {
    let mut document = value.clone();
    let mut pointer: Vec<Step> = Vec::new();

    'narrow: loop {
        let Some(node) = node_at(&document, &pointer).cloned() else {
            break;
        };

        // Records and lists decode when empty; if an emptied container still
        // fails, the container itself has the wrong shape.
        let emptied = match &node {
            Value::Object(_) => Value::Object(serde_json::Map::new()),
            Value::Array(_) => Value::Array(Vec::new()),
            _ => break,
        };
        if fails::<T>(&replace_at(&document, &pointer, emptied)) {
            break;
        }

        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let mut single = serde_json::Map::new();
                    single.insert(key.clone(), child);
                    let candidate = replace_at(&document, &pointer, Value::Object(single));
                    if fails::<T>(&candidate) {
                        document = candidate;
                        pointer.push(Step::Key(key));
                        continue 'narrow;
                    }
                }
                break;
            }
            Value::Array(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    let candidate = replace_at(&document, &pointer, Value::Array(vec![item]));
                    if fails::<T>(&candidate) {
                        document = candidate;
                        pointer.push(Step::Element { shown: index });
                        continue 'narrow;
                    }
                }
                break;
            }
            _ => break,
        }
    }

    let message = serde_json::from_value::<T>(document)
        .err()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "invalid value".to_string());
    BundleError::malformed(render_path(&pointer), message)
}

#[derive(Debug, Clone)]
enum Step {
    Key(String),
    /// The sole element of a narrowed array; `shown` is its original index.
    Element { shown: usize },
}

fn fails<T: DeserializeOwned>(value: &Value) -> bool {
    serde_json::from_value::<T>(value.clone()).is_err()
}

fn node_at<'a>(document: &'a Value, pointer: &[Step]) -> Option<&'a Value> {
    pointer.iter().try_fold(document, |node, step| match step {
        Step::Key(key) => node.get(key),
        Step::Element { .. } => node.get(0),
    })
}

fn replace_at(document: &Value, pointer: &[Step], replacement: Value) -> Value {
    let mut copy = document.clone();
    let mut slot = &mut copy;
    for step in pointer {
        let next = match step {
            Step::Key(key) => slot.get_mut(key.as_str()),
            Step::Element { .. } => slot.get_mut(0),
        };
        match next {
            Some(next) => slot = next,
            None => return copy,
        }
    }
    *slot = replacement;
    copy
}

fn render_path(pointer: &[Step]) -> String {
    let mut out = String::new();
    for step in pointer {
        match step {
            Step::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            Step::Element { shown } => out.push_str(&format!("[{}]", shown)),
        }
    }
    out
}
