//! # Palimpsest
//!
//! An in-memory, branch-aware versioned state store: successive snapshots of
//! a mutable resource, grouped into named branches, with explicit
//! commit/version/revision counters, cumulative message history, and a
//! deterministic overwrite merge for applying partial updates.
//!
//! ## Core Concepts
//!
//! - **Snapshots**: Immutable [`ResourceNode`] records carrying counters,
//!   full tag/message histories, and an arbitrary JSON payload
//! - **Branches**: Named append-only snapshot histories with a current
//!   pointer; `master` always pre-exists
//! - **Hunks**: Partial structures folded into a head with latest-wins deep
//!   merge
//! - **Dimensions**: `node` operations advance the version counter, `branch`
//!   operations fork and advance the revision counter; both share one
//!   underlying commit log
//!
//! ## Example
//!
//! ```
//! use palimpsest::ContextManager;
//! use serde_json::json;
//!
//! let cm = ContextManager::new();
//!
//! // Advance master with a hunk
//! let head = cm.node(json!({"theme": "light"}), Some("initial"), None)?;
//! assert_eq!(head.version, 0);
//!
//! // Fork to a feature branch; the hunk folds into master's payload
//! let head = cm.branch(json!({"experiment": true}), Some("fork"), Some("feature"))?;
//! assert_eq!(head.options["theme"], "light");
//! assert_eq!(head.revision, 0);
//!
//! // Master history is untouched by the fork
//! let master = cm.switch(None)?;
//! assert!(master.options.get("experiment").is_none());
//! # Ok::<(), palimpsest::ContextError>(())
//! ```

pub mod branches;
pub mod error;
pub mod escape;
pub mod manager;
pub mod merge;
pub mod slice;
pub mod types;

// Re-exports
pub use branches::{BranchTable, MASTER_BRANCH};
pub use error::{ContextError, Result};
pub use escape::{escape, escape_all, quote_all};
pub use manager::{ContextManager, Hooks, TagsFn, TransitionFn};
pub use merge::{merge_into, MergePolicy};
pub use slice::slice;
pub use types::{Hunks, ResourceNode};
