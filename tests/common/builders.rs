//! Test drawing builders.

#![allow(dead_code)]

use structure_rename::{Handle, Structure, StructureDocument};

/// Snapshot with handles 1, 2, 3... in the given order.
pub fn snapshot(names: &[&str]) -> Vec<Structure> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Structure::new(Handle::new(i as u64 + 1), *name))
        .collect()
}

/// A small storm-sewer drawing: manholes, inlets and an outfall, with one
/// already-suffixed duplicate left over from an earlier rename.
pub fn sewer_document() -> (StructureDocument, Vec<Handle>) {
    let mut doc = StructureDocument::new();
    let handles = ["MH-1", "MH-2", "MH-2 (2)", "INL-1", "INL-2", "OUT-1"]
        .iter()
        .map(|name| doc.add_structure(*name).unwrap())
        .collect();
    (doc, handles)
}
