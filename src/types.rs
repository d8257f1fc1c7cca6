//! Core types for the context store.

use crate::branches::MASTER_BRANCH;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A point-in-time snapshot of the versioned resource.
///
/// Every snapshot carries the *cumulative* tag and message histories of its
/// branch lineage, not just its own delta, so a single node is
/// self-describing: the full audit trail up to that point is recoverable
/// from it alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceNode {
    /// Branch this node was created or forked from.
    pub origin: String,

    /// Incremented once per `node` operation element.
    pub version: i64,

    /// Incremented once per `branch` operation element.
    pub revision: i64,

    /// Incremented once per commit application.
    pub commit: u64,

    /// One entry per version increment, full lineage history.
    pub version_tags: Vec<String>,

    /// One entry per revision increment, full lineage history.
    pub revision_tags: Vec<String>,

    /// One entry per commit, full lineage history.
    pub commit_messages: Vec<String>,

    /// The versioned payload: an arbitrary nested key/value structure.
    pub options: Value,
}

impl ResourceNode {
    /// Create the zero-state snapshot.
    ///
    /// Counters start below their first recorded value (`version` and
    /// `revision` at -1, `commit` at 0) so that the first operation of each
    /// kind lands on 0 with exactly one tag entry.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            version: -1,
            revision: -1,
            commit: 0,
            version_tags: Vec::new(),
            revision_tags: Vec::new(),
            commit_messages: Vec::new(),
            options: Value::Object(Map::new()),
        }
    }
}

impl Default for ResourceNode {
    fn default() -> Self {
        Self::new(MASTER_BRANCH)
    }
}

/// One or more hunks to fold into a branch head.
///
/// Bulk operations accept either a single partial structure or a list of
/// them; a bare value becomes a singleton list.
#[derive(Clone, Debug)]
pub struct Hunks(pub Vec<Value>);

impl From<Value> for Hunks {
    fn from(hunk: Value) -> Self {
        Hunks(vec![hunk])
    }
}

impl From<Vec<Value>> for Hunks {
    fn from(hunks: Vec<Value>) -> Self {
        Hunks(hunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_state() {
        let node = ResourceNode::default();
        assert_eq!(node.origin, MASTER_BRANCH);
        assert_eq!(node.version, -1);
        assert_eq!(node.revision, -1);
        assert_eq!(node.commit, 0);
        assert!(node.version_tags.is_empty());
        assert!(node.revision_tags.is_empty());
        assert!(node.commit_messages.is_empty());
        assert_eq!(node.options, json!({}));
    }

    #[test]
    fn test_custom_origin() {
        let node = ResourceNode::new("feature");
        assert_eq!(node.origin, "feature");
    }

    #[test]
    fn test_node_json_roundtrip() {
        let mut node = ResourceNode::default();
        node.version = 2;
        node.version_tags = vec!["a".into(), "b".into(), "c".into()];
        node.options = json!({"nested": {"flag": true}});

        let encoded = serde_json::to_string(&node).unwrap();
        let decoded: ResourceNode = serde_json::from_str(&encoded).unwrap();
        assert_eq!(node, decoded);
    }

    #[test]
    fn test_hunks_from_bare_value() {
        let hunks: Hunks = json!({"a": 1}).into();
        assert_eq!(hunks.0.len(), 1);
    }

    #[test]
    fn test_hunks_from_list() {
        let hunks: Hunks = vec![json!({"a": 1}), json!({"b": 2})].into();
        assert_eq!(hunks.0.len(), 2);
    }
}
