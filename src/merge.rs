//! Key merging.
//!
//! Applies one language's new keys to the resolved merge target. This
//! module only computes and mutates; rendering the per-key outcome lines is
//! the reporter's job.

use serde_json::{Map, Value};

use crate::cli_args::Mode;

/// What happened to one input key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
    /// Key already present under `add` mode; the existing value was kept.
    SkippedExisting,
}

/// Per-key merge result, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub key: String,
    pub action: KeyAction,
}

/// Merge `new_keys` into `target` according to `mode`.
///
/// Outcomes are returned in the input document's own key order, which fixes
/// the order of the reported lines; the final document state does not
/// depend on it.
pub fn merge_keys(
    target: &mut Map<String, Value>,
    new_keys: &Map<String, Value>,
    mode: Mode,
) -> Vec<KeyOutcome> {
    let mut outcomes = Vec::with_capacity(new_keys.len());
    for (key, value) in new_keys {
        let action = match mode {
            Mode::Add if target.contains_key(key) => KeyAction::SkippedExisting,
            Mode::Add => {
                target.insert(key.clone(), value.clone());
                KeyAction::Added
            }
            Mode::Update => {
                target.insert(key.clone(), value.clone());
                KeyAction::Updated
            }
        };
        outcomes.push(KeyOutcome {
            key: key.clone(),
            action,
        });
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::{KeyAction, merge_keys};
    use crate::cli_args::Mode;
    use serde_json::{Map, Value, json};

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn add_inserts_missing_keys() {
        let mut target = object(json!({}));
        let new_keys = object(json!({"title": "Hi", "label": "Go"}));

        let outcomes = merge_keys(&mut target, &new_keys, Mode::Add);

        assert!(outcomes.iter().all(|o| o.action == KeyAction::Added));
        assert_eq!(Value::Object(target), json!({"title": "Hi", "label": "Go"}));
    }

    #[test]
    fn add_keeps_existing_values() {
        let mut target = object(json!({"title": "Old"}));
        let new_keys = object(json!({"title": "Hi", "label": "Go"}));

        let outcomes = merge_keys(&mut target, &new_keys, Mode::Add);

        assert_eq!(
            outcomes
                .iter()
                .map(|o| (o.key.as_str(), o.action))
                .collect::<Vec<_>>(),
            [
                ("title", KeyAction::SkippedExisting),
                ("label", KeyAction::Added),
            ],
        );
        assert_eq!(Value::Object(target), json!({"title": "Old", "label": "Go"}));
    }

    #[test]
    fn update_overwrites_unconditionally() {
        let mut target = object(json!({"title": "Old"}));
        let new_keys = object(json!({"title": "Hi"}));

        let outcomes = merge_keys(&mut target, &new_keys, Mode::Update);

        assert_eq!(
            outcomes.first().map(|o| o.action),
            Some(KeyAction::Updated)
        );
        assert_eq!(Value::Object(target), json!({"title": "Hi"}));
    }

    #[test]
    fn outcomes_follow_input_key_order() {
        let mut target = object(json!({}));
        let new_keys = object(json!({"zeta": 1, "alpha": 2, "mid": 3}));

        let outcomes = merge_keys(&mut target, &new_keys, Mode::Add);

        let keys: Vec<_> = outcomes.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn values_may_be_arbitrary_json() {
        let mut target = object(json!({}));
        let new_keys = object(json!({"nested": {"a": [1, 2]}, "flag": true}));

        merge_keys(&mut target, &new_keys, Mode::Add);

        assert_eq!(
            Value::Object(target),
            json!({"nested": {"a": [1, 2]}, "flag": true}),
        );
    }
}
