//! The rename-structure command
//!
//! Drives one rename end to end against a [`StructureHost`]: prompt for the
//! structure and its new name, snapshot the drawing, resolve collisions, and
//! write the resulting plan. Writes are all-or-nothing; if one fails, the
//! names already written are put back before the error is returned.

use crate::error::{RenameError, Result};
use crate::host::StructureHost;
use crate::notification::Notification;
use crate::options::RenameOptions;
use crate::resolver::{NameAssignmentPlan, NameResolver, RenameRequest};
use crate::types::Handle;
use log::{info, warn};

/// Result of a successful rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The writes that were applied
    pub plan: NameAssignmentPlan,
    /// The target's name before the command ran
    pub previous_name: String,
}

/// Renames one structure, moving aside whichever structure held the name
#[derive(Debug, Clone, Default)]
pub struct RenameStructureCommand {
    resolver: NameResolver,
}

impl RenameStructureCommand {
    /// Create a command with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a command with specific options
    pub fn with_options(options: RenameOptions) -> Self {
        RenameStructureCommand {
            resolver: NameResolver::with_options(options),
        }
    }

    fn label(&self) -> &str {
        &self.resolver.options().entity_label
    }

    /// Prompt for a structure and a new name, then rename it.
    pub fn run<H: StructureHost>(&self, host: &mut H) -> Result<CommandOutcome> {
        let request = match self.prompt(host) {
            Ok(request) => request,
            Err(e) => {
                self.report_failure(host, &e);
                return Err(e);
            }
        };
        self.execute(host, &request)
    }

    /// Rename a structure without prompting.
    pub fn execute<H: StructureHost>(
        &self,
        host: &mut H,
        request: &RenameRequest,
    ) -> Result<CommandOutcome> {
        let result = self.apply(host, request);
        if let Err(e) = &result {
            self.report_failure(host, e);
        }
        result
    }

    fn prompt<H: StructureHost>(&self, host: &mut H) -> Result<RenameRequest> {
        let target = host.select_structure()?;
        let current = host.structure_name(target)?;
        let desired = host.prompt_name(&current)?;
        Ok(RenameRequest::new(target, desired))
    }

    fn apply<H: StructureHost>(
        &self,
        host: &mut H,
        request: &RenameRequest,
    ) -> Result<CommandOutcome> {
        let snapshot = host.structures()?;
        let plan = self.resolver.resolve(request, &snapshot)?;
        let previous_name = host.structure_name(request.target)?;

        let mut transaction = Transaction::new(host);
        let mut messages = Vec::with_capacity(plan.len());
        for assignment in &plan {
            let old = match transaction.write(assignment.handle, &assignment.new_name) {
                Ok(old) => old,
                Err(e) => {
                    let unrestored = transaction.rollback();
                    if unrestored.is_empty() {
                        return Err(e);
                    }
                    return Err(RenameError::Unrestored {
                        source: Box::new(e),
                        handles: unrestored,
                    });
                }
            };

            let message = if assignment.handle == request.target {
                format!("{} {} changed to {}", self.label(), old, assignment.new_name)
            } else {
                format!(
                    "{} {} already exists, changing name to {}",
                    self.label(),
                    old,
                    assignment.new_name
                )
            };
            messages.push(message);
        }
        transaction.commit();

        info!(
            "renamed {} from '{}' to '{}' ({} write(s))",
            request.target,
            previous_name,
            request.desired_name,
            plan.len()
        );
        for message in messages {
            host.report(Notification::info(message));
        }

        Ok(CommandOutcome {
            plan,
            previous_name,
        })
    }

    fn report_failure<H: StructureHost>(&self, host: &mut H, error: &RenameError) {
        let notification = match error {
            RenameError::Cancelled => Notification::warning("Canceled."),
            RenameError::InvalidName => Notification::warning("Canceled. Invalid name"),
            other => Notification::error(format!(
                "Failed to update {} name. {}",
                self.label().to_lowercase(),
                other
            )),
        };
        host.report(notification);
    }
}

/// Name writes that can be undone as a unit
struct Transaction<'h, H: StructureHost> {
    host: &'h mut H,
    undo: Vec<(Handle, String)>,
}

impl<'h, H: StructureHost> Transaction<'h, H> {
    fn new(host: &'h mut H) -> Self {
        Transaction {
            host,
            undo: Vec::new(),
        }
    }

    /// Write a name, returning the one it replaced
    fn write(&mut self, handle: Handle, name: &str) -> Result<String> {
        let old = self.host.structure_name(handle)?;
        self.host.set_structure_name(handle, name)?;
        self.undo.push((handle, old.clone()));
        Ok(old)
    }

    fn commit(self) {}

    /// Put back every name written so far, newest first.
    ///
    /// Returns the handles whose old name could not be written back.
    fn rollback(self) -> Vec<Handle> {
        let mut unrestored = Vec::new();
        for (handle, name) in self.undo.into_iter().rev() {
            if let Err(e) = self.host.set_structure_name(handle, &name) {
                warn!("could not restore {} to '{}': {}", handle, name, e);
                unrestored.push(handle);
            } else {
                warn!("restored {} to '{}'", handle, name);
            }
        }
        unrestored
    }
}
