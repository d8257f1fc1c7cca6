//! Deep structural merge over JSON values.
//!
//! The merge engine is the only piece of the commit protocol with a
//! configurable policy: nested objects always merge key by key, while
//! conflicts between anything else (scalars, arrays, or disagreeing types)
//! are decided by [`MergePolicy`].

use serde_json::Value;

/// Conflict policy for non-object values present on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergePolicy {
    /// Keep the existing target value.
    Keep,

    /// Latest wins: the incoming value replaces the existing one, even
    /// discarding previously nested data at that key.
    Overwrite,
}

/// Fold `source` into `target` in place.
///
/// Keys present only in `source` are inserted. Keys whose values are objects
/// on both sides merge recursively. Everything else is a conflict resolved
/// by `policy`. `source` is never mutated; callers that need the original
/// `target` preserved must pass a fresh copy.
pub fn merge_into(target: &mut Value, source: &Value, policy: MergePolicy) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(key) {
                    Some(target_value) => merge_into(target_value, source_value, policy),
                    None => {
                        target_map.insert(key.clone(), source_value.clone());
                    }
                }
            }
        }
        (target, source) => {
            if policy == MergePolicy::Overwrite {
                *target = source.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_disjoint_keys_union() {
        let mut target = json!({"a": 1});
        merge_into(&mut target, &json!({"b": 2}), MergePolicy::Overwrite);
        assert_eq!(target, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let mut target = json!({"outer": {"a": 1}});
        merge_into(
            &mut target,
            &json!({"outer": {"b": 2}}),
            MergePolicy::Overwrite,
        );
        assert_eq!(target, json!({"outer": {"a": 1, "b": 2}}));
    }

    #[test]
    fn test_overwrite_replaces_scalar() {
        let mut target = json!({"a": 1});
        merge_into(&mut target, &json!({"a": 2}), MergePolicy::Overwrite);
        assert_eq!(target, json!({"a": 2}));
    }

    #[test]
    fn test_overwrite_discards_nested_data() {
        let mut target = json!({"x": {"value0": 0}});
        merge_into(&mut target, &json!({"x": 1}), MergePolicy::Overwrite);
        assert_eq!(target, json!({"x": 1}));
    }

    #[test]
    fn test_overwrite_replaces_array_wholesale() {
        let mut target = json!({"items": [1, 2, 3]});
        merge_into(&mut target, &json!({"items": [9]}), MergePolicy::Overwrite);
        assert_eq!(target, json!({"items": [9]}));
    }

    #[test]
    fn test_keep_preserves_scalar() {
        let mut target = json!({"a": 1});
        merge_into(&mut target, &json!({"a": 2}), MergePolicy::Keep);
        assert_eq!(target, json!({"a": 1}));
    }

    #[test]
    fn test_keep_preserves_on_type_disagreement() {
        let mut target = json!({"x": {"value0": 0}});
        merge_into(&mut target, &json!({"x": 1}), MergePolicy::Keep);
        assert_eq!(target, json!({"x": {"value0": 0}}));

        // Nested keys still union under Keep.
        merge_into(
            &mut target,
            &json!({"x": {"value1": 1}}),
            MergePolicy::Keep,
        );
        assert_eq!(target, json!({"x": {"value0": 0, "value1": 1}}));
    }

    #[test]
    fn test_source_not_mutated() {
        let mut target = json!({"a": {"b": 1}});
        let source = json!({"a": {"c": 2}});
        merge_into(&mut target, &source, MergePolicy::Overwrite);
        assert_eq!(source, json!({"a": {"c": 2}}));
    }

    #[test]
    fn test_merge_is_idempotent_for_scalar_hunks() {
        let hunk = json!({"a": 1, "b": "two"});
        let mut once = json!({"a": 0, "c": true});
        merge_into(&mut once, &hunk, MergePolicy::Overwrite);

        let mut twice = once.clone();
        merge_into(&mut twice, &hunk, MergePolicy::Overwrite);
        assert_eq!(once, twice);
    }
}
