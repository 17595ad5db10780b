//! In-memory structure drawing
//!
//! [`StructureDocument`] stands in for the CAD host: it keeps structures in
//! drawing order, answers prompts from queued responses, and collects the
//! messages the command reports. It can be loaded from and saved to a plain
//! listing with one `<hex handle> <name>` pair per line.

use crate::error::{RenameError, Result};
use crate::host::StructureHost;
use crate::notification::{Notification, NotificationCollection};
use crate::types::{Handle, Structure};
use indexmap::IndexMap;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct StructureRecord {
    name: String,
    locked: bool,
}

/// An ordered set of named structures
#[derive(Debug, Clone)]
pub struct StructureDocument {
    structures: IndexMap<Handle, StructureRecord>,
    notifications: NotificationCollection,
    selections: VecDeque<Option<Handle>>,
    names: VecDeque<Option<String>>,
    next_handle: u64,
}

impl StructureDocument {
    /// Create an empty document
    pub fn new() -> Self {
        StructureDocument {
            structures: IndexMap::new(),
            notifications: NotificationCollection::new(),
            selections: VecDeque::new(),
            names: VecDeque::new(),
            next_handle: 0x1,
        }
    }

    /// Allocate a new unique handle
    ///
    /// Fails once the handle space is used up, i.e. after a structure with
    /// handle `u64::MAX` exists.
    pub fn allocate_handle(&mut self) -> Result<Handle> {
        let handle = Handle::new(self.next_handle);
        if self.structures.contains_key(&handle) {
            return Err(RenameError::Custom(format!(
                "no free handle after {}",
                handle
            )));
        }
        self.next_handle = self.next_handle.saturating_add(1);
        Ok(handle)
    }

    /// Add a structure under a freshly allocated handle
    pub fn add_structure(&mut self, name: impl Into<String>) -> Result<Handle> {
        let handle = self.allocate_handle()?;
        self.structures.insert(
            handle,
            StructureRecord {
                name: name.into(),
                locked: false,
            },
        );
        Ok(handle)
    }

    /// Add a structure that already has a handle
    pub fn insert(&mut self, structure: Structure) -> Result<()> {
        if structure.handle.is_null() {
            return Err(RenameError::Custom(
                "cannot insert a structure with a null handle".to_string(),
            ));
        }
        if self.structures.contains_key(&structure.handle) {
            return Err(RenameError::DuplicateHandle(structure.handle));
        }

        self.next_handle = self
            .next_handle
            .max(structure.handle.value().saturating_add(1));
        self.structures.insert(
            structure.handle,
            StructureRecord {
                name: structure.name,
                locked: false,
            },
        );
        Ok(())
    }

    /// Get a structure's name
    pub fn get(&self, handle: Handle) -> Option<&str> {
        self.structures.get(&handle).map(|r| r.name.as_str())
    }

    /// Mark a structure read-only; writing its name will fail
    pub fn set_locked(&mut self, handle: Handle, locked: bool) -> Result<()> {
        let record = self
            .structures
            .get_mut(&handle)
            .ok_or(RenameError::ObjectNotFound(handle))?;
        record.locked = locked;
        Ok(())
    }

    /// Number of structures
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Check if the document has no structures
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Iterate over structures in drawing order
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &str)> {
        self.structures.iter().map(|(h, r)| (*h, r.name.as_str()))
    }

    /// Messages reported so far
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Mutable access to the reported messages
    pub fn notifications_mut(&mut self) -> &mut NotificationCollection {
        &mut self.notifications
    }

    /// Queue the answer to the next selection prompt (`None` cancels)
    pub fn queue_selection(&mut self, handle: Option<Handle>) {
        self.selections.push_back(handle);
    }

    /// Queue the answer to the next name prompt (`None` cancels)
    pub fn queue_name(&mut self, name: Option<String>) {
        self.names.push_back(name);
    }

    /// Parse a listing of `<hex handle> <name>` lines.
    ///
    /// The handle and the name are separated by a single space. The name is
    /// everything after it, kept byte for byte (surrounding spaces included).
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_listing(listing: &str) -> Result<Self> {
        let mut doc = Self::new();

        for (index, line) in listing.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let line_no = index + 1;
            let (handle, name) = line.split_once(' ').ok_or_else(|| {
                RenameError::Parse(format!("line {}: missing structure name", line_no))
            })?;
            let handle: Handle = handle.parse().map_err(|e| {
                RenameError::Parse(format!("line {}: bad handle '{}': {}", line_no, handle, e))
            })?;

            doc.insert(Structure::new(handle, name))
                .map_err(|e| RenameError::Parse(format!("line {}: {}", line_no, e)))?;
        }

        Ok(doc)
    }

    /// Write the document back as a listing
    pub fn to_listing(&self) -> String {
        let mut out = String::new();
        for (handle, name) in self.iter() {
            out.push_str(&format!("{:X} {}\n", handle, name));
        }
        out
    }
}

impl Default for StructureDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureHost for StructureDocument {
    fn select_structure(&mut self) -> Result<Handle> {
        let handle = self
            .selections
            .pop_front()
            .flatten()
            .ok_or(RenameError::Cancelled)?;
        if !self.structures.contains_key(&handle) {
            return Err(RenameError::ObjectNotFound(handle));
        }
        Ok(handle)
    }

    fn prompt_name(&mut self, _current: &str) -> Result<String> {
        self.names.pop_front().flatten().ok_or(RenameError::Cancelled)
    }

    fn structures(&self) -> Result<Vec<Structure>> {
        Ok(self
            .iter()
            .map(|(handle, name)| Structure::new(handle, name))
            .collect())
    }

    fn structure_name(&self, handle: Handle) -> Result<String> {
        self.get(handle)
            .map(str::to_string)
            .ok_or(RenameError::ObjectNotFound(handle))
    }

    fn set_structure_name(&mut self, handle: Handle, name: &str) -> Result<()> {
        let record = self
            .structures
            .get_mut(&handle)
            .ok_or(RenameError::ObjectNotFound(handle))?;
        if record.locked {
            return Err(RenameError::Host(format!("structure {} is locked", handle)));
        }
        record.name = name.to_string();
        Ok(())
    }

    fn report(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
