//! Branch table implementation.

use crate::error::{ContextError, Result};
use crate::types::ResourceNode;
use std::collections::HashMap;
use tracing::debug;

/// Name of the default branch.
pub const MASTER_BRANCH: &str = "master";

/// Mapping from branch name to its append-only snapshot history, plus the
/// currently active branch.
///
/// A branch comes into existence the first time a node is pushed under its
/// name; `master` always pre-exists with one zero-state node. Histories only
/// grow, and stored nodes are never mutated after the append.
#[derive(Debug)]
pub struct BranchTable {
    /// Snapshot history per branch, insertion order = chronological order.
    branches: HashMap<String, Vec<ResourceNode>>,

    /// Currently active branch.
    current: String,
}

impl BranchTable {
    /// Create a table with a `master` branch holding one default node.
    pub fn new() -> Self {
        let mut branches = HashMap::new();
        branches.insert(MASTER_BRANCH.to_string(), vec![ResourceNode::default()]);

        Self {
            branches,
            current: MASTER_BRANCH.to_string(),
        }
    }

    /// Name of the currently active branch.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Move the current-branch pointer.
    ///
    /// The target does not have to exist yet; a subsequent push under its
    /// name creates it.
    pub fn set_current(&mut self, name: &str) {
        self.current = name.to_string();
    }

    /// The last appended node of a branch.
    ///
    /// Reading a branch that has never been written is an error, never a
    /// silent default.
    pub fn head(&self, name: &str) -> Result<&ResourceNode> {
        self.branches
            .get(name)
            .and_then(|history| history.last())
            .ok_or_else(|| ContextError::BranchNotFound(name.to_string()))
    }

    /// Full snapshot history of a branch, oldest first.
    pub fn history(&self, name: &str) -> Result<&[ResourceNode]> {
        self.branches
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ContextError::BranchNotFound(name.to_string()))
    }

    /// Append a node under `branch` (or the current branch), creating the
    /// branch on first write.
    ///
    /// Stamps the node's `origin` with the previously-current branch and
    /// moves the current pointer to the target. Returns the stored head.
    pub fn push(&mut self, mut node: ResourceNode, branch: Option<&str>) -> &ResourceNode {
        let target = branch.unwrap_or(&self.current).to_string();

        node.origin = self.current.clone();
        self.current = target.clone();

        if !self.branches.contains_key(&target) {
            debug!(branch = %target, "creating branch");
        }
        let history = self.branches.entry(target).or_default();
        history.push(node);

        history.last().expect("history is non-empty after push")
    }

    /// Whether a branch exists in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.branches.contains_key(name)
    }

    /// Names of all branches, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.branches.keys().cloned().collect()
    }

    /// Number of branches.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }
}

impl Default for BranchTable {
    fn default() -> Self {
        Self::new()
    }
}
