//! Context manager tying the branch table and merge engine together.

use crate::branches::{BranchTable, MASTER_BRANCH};
use crate::error::Result;
use crate::merge::{merge_into, MergePolicy};
use crate::types::{Hunks, ResourceNode};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::trace;

/// Conflict policy applied on every commit.
const COMMIT_POLICY: MergePolicy = MergePolicy::Overwrite;

/// Hook run on each commit, after the hunk is folded in and before the node
/// is appended to history.
pub type TransitionFn = Box<dyn Fn(&mut ResourceNode) + Send + Sync>;

/// Hook deriving tag metadata from a node.
pub type TagsFn = Box<dyn Fn(&ResourceNode) -> Vec<String> + Send + Sync>;

/// Extension points supplied at construction time.
///
/// The surrounding system can enrich the commit protocol (`transition`) and
/// derive tag metadata (`tags`) without touching the manager's own method
/// implementations. Defaults are no-ops.
pub struct Hooks {
    pub transition: TransitionFn,
    pub tags: TagsFn,
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            transition: Box::new(|_| {}),
            tags: Box::new(|_| Vec::new()),
        }
    }
}

/// Orchestrates node creation, branch switching, and the commit/fork
/// protocols on top of a [`BranchTable`].
///
/// Every operation runs as one critical section over the table plus the
/// current-branch pointer, so a shared manager behind `Arc` never loses
/// updates to the read-then-append sequences in [`node`](Self::node) and
/// [`branch`](Self::branch).
///
/// Returned nodes are independent copies; mutating them cannot corrupt
/// stored history.
pub struct ContextManager {
    table: Mutex<BranchTable>,
    hooks: Hooks,
}

impl ContextManager {
    /// Create a manager with a `master` branch and no-op hooks.
    pub fn new() -> Self {
        Self::with_hooks(Hooks::default())
    }

    /// Create a manager with injected extension hooks.
    pub fn with_hooks(hooks: Hooks) -> Self {
        Self {
            table: Mutex::new(BranchTable::new()),
            hooks,
        }
    }

    /// Fresh copy of the requested (or current) branch head. Read-only.
    pub fn head(&self, branch: Option<&str>) -> Result<ResourceNode> {
        let table = self.table.lock();
        Self::head_locked(&table, branch)
    }

    /// Set the current branch (default `master`) and return its head.
    ///
    /// The pointer moves even when the target has no history yet; the head
    /// read then reports the missing branch, and a subsequent write creates
    /// it.
    pub fn switch(&self, branch: Option<&str>) -> Result<ResourceNode> {
        let mut table = self.table.lock();
        let name = branch.unwrap_or(MASTER_BRANCH);
        table.set_current(name);
        trace!(branch = name, "switched branch");
        table.head(name).map(Clone::clone)
    }

    /// The fundamental mutating primitive: apply one hunk to a head and
    /// append the result.
    ///
    /// Resolves the base head (either `head_override` or a fresh read of
    /// `branch`/current), increments `commit`, records `message` (or the
    /// empty string), folds `hunk` into `options` with overwrite conflict
    /// policy when present, runs the `transition` hook, then appends the
    /// node onto the target branch (creating it on first write) and makes
    /// that branch current. Returns the new head.
    ///
    /// Either fully applies or, on an unknown branch read, applies nothing.
    pub fn commit(
        &self,
        hunk: Option<&Value>,
        message: Option<&str>,
        branch: Option<&str>,
        head_override: Option<ResourceNode>,
    ) -> Result<ResourceNode> {
        let mut table = self.table.lock();
        self.commit_locked(&mut table, hunk, message, branch, head_override)
    }

    /// Bulk commit advancing the *version* dimension.
    ///
    /// For each hunk, in order: fetch a fresh head of the target branch,
    /// increment `version`, record the tag, commit. Later hunks see the
    /// effects of earlier ones. An empty hunk list is a read-only `head`.
    pub fn node(
        &self,
        hunks: impl Into<Hunks>,
        message: Option<&str>,
        branch: Option<&str>,
    ) -> Result<ResourceNode> {
        let hunks = hunks.into();
        let mut table = self.table.lock();

        for hunk in &hunks.0 {
            let mut head = Self::head_locked(&table, branch)?;
            head.version += 1;
            head.version_tags.push(message.unwrap_or_default().to_string());
            self.commit_locked(&mut table, Some(hunk), message, branch, Some(head))?;
        }

        Self::head_locked(&table, branch)
    }

    /// Bulk commit advancing the *revision* dimension, modeling a fork.
    ///
    /// Structurally identical to [`node`](Self::node), but the fresh head is
    /// always read from the *current* branch and the result is recorded
    /// under `name`, which becomes current. Forking onto an already-existing
    /// name therefore adopts the current branch's counters, not the target's
    /// own continuity.
    pub fn branch(
        &self,
        hunks: impl Into<Hunks>,
        message: Option<&str>,
        name: Option<&str>,
    ) -> Result<ResourceNode> {
        let hunks = hunks.into();
        let mut table = self.table.lock();

        for hunk in &hunks.0 {
            let mut head = Self::head_locked(&table, None)?;
            head.revision += 1;
            head.revision_tags
                .push(message.unwrap_or_default().to_string());
            self.commit_locked(&mut table, Some(hunk), message, name, Some(head))?;
        }

        Self::head_locked(&table, name)
    }

    /// Derive tag metadata for a node via the injected `tags` hook.
    ///
    /// The core never calls this implicitly; it is an attachment point for
    /// the surrounding system.
    pub fn tags(&self, node: &ResourceNode) -> Vec<String> {
        (self.hooks.tags)(node)
    }

    /// Name of the currently active branch.
    pub fn current_branch(&self) -> String {
        self.table.lock().current().to_string()
    }

    /// Names of all branches, in no particular order.
    pub fn branch_names(&self) -> Vec<String> {
        self.table.lock().names()
    }

    /// Number of branches.
    pub fn branch_count(&self) -> usize {
        self.table.lock().branch_count()
    }

    /// Full snapshot history of the requested (or current) branch.
    pub fn history(&self, branch: Option<&str>) -> Result<Vec<ResourceNode>> {
        let table = self.table.lock();
        let name = branch.unwrap_or_else(|| table.current());
        table.history(name).map(<[ResourceNode]>::to_vec)
    }

    fn head_locked(table: &BranchTable, branch: Option<&str>) -> Result<ResourceNode> {
        let name = branch.unwrap_or_else(|| table.current());
        table.head(name).map(Clone::clone)
    }

    fn commit_locked(
        &self,
        table: &mut BranchTable,
        hunk: Option<&Value>,
        message: Option<&str>,
        branch: Option<&str>,
        head_override: Option<ResourceNode>,
    ) -> Result<ResourceNode> {
        let mut head = match head_override {
            Some(head) => head,
            None => Self::head_locked(table, branch)?,
        };

        head.commit += 1;
        head.commit_messages
            .push(message.unwrap_or_default().to_string());

        if let Some(hunk) = hunk {
            merge_into(&mut head.options, hunk, COMMIT_POLICY);
        }

        (self.hooks.transition)(&mut head);

        let node = table.push(head, branch).clone();
        trace!(branch = %table.current(), commit = node.commit, "commit applied");
        Ok(node)
    }
}

impl Default for ContextManager {
    fn default() -> Self {
        Self::new()
    }
}
