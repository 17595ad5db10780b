//! Property tests for the collision resolver.

mod common;

use common::builders::snapshot;
use common::{apply_plan, names};
use proptest::prelude::*;
use structure_rename::{Handle, NameResolver, RenameError, RenameRequest, Structure};

/// Small name pool so collisions and existing suffixes are common.
fn name_pool() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[AB]( \\([234]\\))?", 0..10)
}

fn build(pool: &[String]) -> Vec<Structure> {
    let refs: Vec<&str> = pool.iter().map(String::as_str).collect();
    snapshot(&refs)
}

proptest! {
    #[test]
    fn target_gets_desired_name(pool in name_pool(), target in 1u64..12, desired in "[ABC]") {
        let structures = build(&pool);
        let request = RenameRequest::new(Handle::new(target), desired.clone());
        let plan = NameResolver::new().resolve(&request, &structures).unwrap();

        prop_assert_eq!(plan.target().handle, Handle::new(target));
        prop_assert_eq!(&plan.target().new_name, &desired);
    }

    #[test]
    fn single_entry_without_conflict(pool in name_pool(), target in 1u64..12, desired in "[ABC]") {
        let structures = build(&pool);
        let held_by_other = structures
            .iter()
            .any(|s| s.handle != Handle::new(target) && s.name == desired);

        let request = RenameRequest::new(Handle::new(target), desired);
        let plan = NameResolver::new().resolve(&request, &structures).unwrap();

        prop_assert_eq!(plan.len(), if held_by_other { 2 } else { 1 });
    }

    #[test]
    fn displaced_name_is_unique_after_apply(pool in name_pool(), target in 1u64..12, desired in "[AB]") {
        let structures = build(&pool);
        let request = RenameRequest::new(Handle::new(target), desired.clone());
        let plan = NameResolver::new().resolve(&request, &structures).unwrap();

        if let Some(displaced) = plan.displaced() {
            // First holder in snapshot order is the one moved
            let first = structures
                .iter()
                .find(|s| s.handle != Handle::new(target) && s.name == desired)
                .map(|s| s.handle);
            prop_assert_eq!(Some(displaced.handle), first);

            let after = apply_plan(&structures, &plan);
            let holders = names(&after)
                .into_iter()
                .filter(|n| *n == displaced.new_name)
                .count();
            prop_assert_eq!(holders, 1);
        }
    }

    #[test]
    fn resolve_is_pure(pool in name_pool(), target in 1u64..12, desired in "[AB]") {
        let structures = build(&pool);
        let request = RenameRequest::new(Handle::new(target), desired);
        let resolver = NameResolver::new();

        prop_assert_eq!(
            resolver.resolve(&request, &structures).unwrap(),
            resolver.resolve(&request, &structures).unwrap()
        );
    }

    #[test]
    fn empty_name_always_rejected(pool in name_pool(), target in 1u64..12) {
        let structures = build(&pool);
        let result = NameResolver::new().resolve(&RenameRequest::new(Handle::new(target), ""), &structures);
        prop_assert!(matches!(result, Err(RenameError::InvalidName)));
    }
}

#[test]
fn moves_holder_to_first_suffix() {
    let structures = snapshot(&["S10", "S20"]);
    let plan = NameResolver::new()
        .resolve(&RenameRequest::new(Handle::new(2), "S10"), &structures)
        .unwrap();

    let pairs: Vec<_> = plan
        .iter()
        .map(|a| (a.handle.value(), a.new_name.as_str()))
        .collect();
    assert_eq!(pairs, vec![(2, "S10"), (1, "S10 (2)")]);
}

#[test]
fn first_match_only_leaves_later_duplicates() {
    let structures = snapshot(&["S10", "S10", "S30"]);
    let plan = NameResolver::new()
        .resolve(&RenameRequest::new(Handle::new(3), "S10"), &structures)
        .unwrap();

    let after = apply_plan(&structures, &plan);
    assert_eq!(names(&after), vec!["S10 (2)", "S10", "S10"]);
}
