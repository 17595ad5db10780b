//! Shared helpers for structure-rename integration tests.

#![allow(dead_code)]

pub mod builders;

use structure_rename::{NameAssignmentPlan, Structure};

/// Apply a plan to a snapshot, the way a host would write it.
pub fn apply_plan(structures: &[Structure], plan: &NameAssignmentPlan) -> Vec<Structure> {
    let mut out = structures.to_vec();
    for assignment in plan {
        if let Some(s) = out.iter_mut().find(|s| s.handle == assignment.handle) {
            s.name = assignment.new_name.clone();
        }
    }
    out
}

/// Names in snapshot order.
pub fn names(structures: &[Structure]) -> Vec<&str> {
    structures.iter().map(|s| s.name.as_str()).collect()
}
