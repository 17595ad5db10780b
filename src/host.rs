//! Host application seam
//!
//! The rename command never touches a drawing directly. Everything it needs
//! from the CAD host (prompts, the list of structures, name writes and status
//! messages) goes through [`StructureHost`].

use crate::error::Result;
use crate::notification::Notification;
use crate::types::{Handle, Structure};

/// Capabilities the rename command needs from a CAD host
pub trait StructureHost {
    /// Ask the user to pick a structure.
    ///
    /// Returns [`RenameError::Cancelled`](crate::RenameError::Cancelled) if
    /// the user dismisses the prompt.
    fn select_structure(&mut self) -> Result<Handle>;

    /// Ask the user for a new name, showing the current one.
    fn prompt_name(&mut self, current: &str) -> Result<String>;

    /// Snapshot every structure in the active drawing, in drawing order
    fn structures(&self) -> Result<Vec<Structure>>;

    /// Get a structure's current name
    fn structure_name(&self, handle: Handle) -> Result<String>;

    /// Write a structure's name
    fn set_structure_name(&mut self, handle: Handle, name: &str) -> Result<()>;

    /// Show a message to the user
    fn report(&mut self, notification: Notification);
}
