//! Name collision resolution
//!
//! [`NameResolver`] decides what has to be written when a structure is given
//! a new name. If another structure already holds that name, the other
//! structure is moved aside to `"<name> (<n>)"`, using the smallest counter
//! no other structure holds yet.
//!
//! Only the first holder of the name (in snapshot order) is moved. Further
//! holders keep the name.
//!
//! ```rust
//! use structure_rename::{NameResolver, RenameRequest, Structure, Handle};
//!
//! let structures = vec![Structure::from((1, "S10")), Structure::from((2, "S20"))];
//! let request = RenameRequest::new(Handle::new(2), "S10");
//! let plan = NameResolver::new().resolve(&request, &structures)?;
//!
//! assert_eq!(plan.len(), 2);
//! assert_eq!(plan.displaced().unwrap().new_name, "S10 (2)");
//! # Ok::<(), structure_rename::RenameError>(())
//! ```

use crate::error::{RenameError, Result};
use crate::options::RenameOptions;
use crate::types::{Handle, Structure};
use ahash::AHashSet;
use log::debug;

/// Request to give a structure a new name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    /// Structure being renamed
    pub target: Handle,
    /// Name it should end up with
    pub desired_name: String,
}

impl RenameRequest {
    pub fn new(target: Handle, desired_name: impl Into<String>) -> Self {
        RenameRequest {
            target,
            desired_name: desired_name.into(),
        }
    }
}

/// A single name write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAssignment {
    pub handle: Handle,
    pub new_name: String,
}

impl NameAssignment {
    pub fn new(handle: Handle, new_name: impl Into<String>) -> Self {
        NameAssignment {
            handle,
            new_name: new_name.into(),
        }
    }
}

/// Ordered name writes produced by [`NameResolver::resolve`]
///
/// The first assignment always renames the target. A second one, when
/// present, moves the structure that held the desired name aside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAssignmentPlan {
    assignments: Vec<NameAssignment>,
}

impl NameAssignmentPlan {
    fn rename_only(target: NameAssignment) -> Self {
        NameAssignmentPlan {
            assignments: vec![target],
        }
    }

    fn with_displaced(target: NameAssignment, displaced: NameAssignment) -> Self {
        NameAssignmentPlan {
            assignments: vec![target, displaced],
        }
    }

    /// The target's assignment
    pub fn target(&self) -> &NameAssignment {
        &self.assignments[0]
    }

    /// The conflicting structure's assignment, if there was a conflict
    pub fn displaced(&self) -> Option<&NameAssignment> {
        self.assignments.get(1)
    }

    /// Check whether another structure has to be renamed
    pub fn has_conflict(&self) -> bool {
        self.assignments.len() > 1
    }

    /// Number of writes in the plan
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Always false; a plan renames at least the target
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterate over the writes in application order
    pub fn iter(&self) -> std::slice::Iter<'_, NameAssignment> {
        self.assignments.iter()
    }

    /// Consume the plan into a `Vec`
    pub fn into_vec(self) -> Vec<NameAssignment> {
        self.assignments
    }
}

impl<'a> IntoIterator for &'a NameAssignmentPlan {
    type Item = &'a NameAssignment;
    type IntoIter = std::slice::Iter<'a, NameAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

/// Format `"<base> (<n>)"`
pub fn suffixed_name(base: &str, n: u64) -> String {
    format!("{} ({})", base, n)
}

/// Stateless collision resolver
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    options: RenameOptions,
}

impl NameResolver {
    /// Create a resolver with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with specific options
    pub fn with_options(options: RenameOptions) -> Self {
        NameResolver { options }
    }

    /// Get the resolver's options
    pub fn options(&self) -> &RenameOptions {
        &self.options
    }

    /// Compute the writes needed to give `request.target` its desired name.
    ///
    /// `structures` is a snapshot of every structure of the same kind,
    /// normally including the target. Names compare exactly (case-sensitive).
    pub fn resolve(
        &self,
        request: &RenameRequest,
        structures: &[Structure],
    ) -> Result<NameAssignmentPlan> {
        if request.desired_name.is_empty() {
            return Err(RenameError::InvalidName);
        }

        let target = NameAssignment::new(request.target, request.desired_name.as_str());

        let conflict = structures
            .iter()
            .find(|s| s.handle != request.target && s.name == request.desired_name);

        let Some(conflict) = conflict else {
            debug!("no structure holds '{}'", request.desired_name);
            return Ok(NameAssignmentPlan::rename_only(target));
        };

        let taken: AHashSet<&str> = structures
            .iter()
            .filter(|s| s.handle != conflict.handle)
            .map(|s| s.name.as_str())
            .collect();

        let mut n = u64::from(self.options.first_suffix);
        let candidate = loop {
            let candidate = suffixed_name(&conflict.name, n);
            if !taken.contains(candidate.as_str()) {
                break candidate;
            }
            n += 1;
        };

        debug!(
            "'{}' is held by {}, moving it to '{}'",
            request.desired_name, conflict.handle, candidate
        );

        Ok(NameAssignmentPlan::with_displaced(
            target,
            NameAssignment::new(conflict.handle, candidate),
        ))
    }
}
