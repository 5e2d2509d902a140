//! Directory tree walking logic
//!
//! `TreeWalker` renders each root path depth first through a
//! [`StyledOutput`] sink. The pieces it is built from:
//!
//! - `entry` - stat snapshots and entry classification
//! - `columns` - permission, owner, group, size and date columns
//! - `listing` - filtering and ordering of directory children
//! - `prefix` - box-drawing connectors
//! - `guard` - cycle detection for followed links
//! - `tally` - summary counts

mod columns;
mod config;
mod entry;
mod guard;
mod listing;
mod prefix;
mod tally;
mod walker;

// Re-export public types
pub use columns::{
    date, format_date, format_nice_size, group, mtime_key, owner, permission_string, permissions,
    size,
};
pub use config::{DEFAULT_INDENT, MIN_INDENT, WalkerConfig};
pub use entry::{EntryKind, EntryMetadata, StatSnapshot, classify, is_expandable, stat};
pub use guard::CycleGuard;
pub use listing::{list, sort_names, to_print};
pub use prefix::Connectors;
pub use tally::{Category, Tally, singular_or_plural};
pub use walker::{SEEN_MARKER, StyledOutput, TreeWalker, UNREADABLE_MARKER};
