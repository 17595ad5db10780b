//! # structure-rename
//!
//! Rename a structure in a CAD drawing, moving aside whichever structure
//! already holds the requested name.
//!
//! When structure `B` is renamed to a name that structure `A` already has,
//! `A` is renamed to `"<name> (2)"`, or the next free counter if that is
//! taken too. Only the first holder of the name is moved.
//!
//! ## Quick Start
//!
//! ```rust
//! use structure_rename::{RenameRequest, RenameStructureCommand, StructureDocument};
//!
//! let mut doc = StructureDocument::new();
//! let s10 = doc.add_structure("S10")?;
//! let s20 = doc.add_structure("S20")?;
//!
//! RenameStructureCommand::new().execute(&mut doc, &RenameRequest::new(s20, "S10"))?;
//!
//! assert_eq!(doc.get(s20), Some("S10"));
//! assert_eq!(doc.get(s10), Some("S10 (2)"));
//! # Ok::<(), structure_rename::RenameError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`NameResolver`] - pure collision resolution, no host access
//! - [`StructureHost`] - trait the CAD host implements (prompts, name
//!   reads/writes, structure listing, user messages)
//! - [`RenameStructureCommand`] - prompt, resolve, apply atomically, report
//! - [`StructureDocument`] - in-memory host for tests and the CLI

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod command;
pub mod document;
pub mod error;
pub mod host;
pub mod notification;
pub mod options;
pub mod resolver;
pub mod types;

pub use command::{CommandOutcome, RenameStructureCommand};
pub use document::StructureDocument;
pub use error::{RenameError, Result};
pub use host::StructureHost;
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use options::RenameOptions;
pub use resolver::{suffixed_name, NameAssignment, NameAssignmentPlan, NameResolver, RenameRequest};
pub use types::{Handle, Structure};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
