//! Branch bookkeeping: named append-only snapshot histories.

mod table;

pub use table::{BranchTable, MASTER_BRANCH};
