//! Property tests over the resolver and aggregator

use gearcraft::pantogram::{
    compute_encoded_selection, compute_requirements, default_tables, Alignment, CompleteSelection,
    Element, LeftSacrifice, MiddleSacrifice, PartialSelection, RightSacrifice, SlotVariant,
};
use gearcraft::stillsuit::{compute_distribution, FamiliarTag};
use proptest::prelude::*;
use proptest::sample::select;

fn complete_selection() -> impl Strategy<Value = CompleteSelection> {
    (
        select(Alignment::all()),
        select(Element::all()),
        select(LeftSacrifice::all()),
        select(MiddleSacrifice::all()),
        select(RightSacrifice::all()),
    )
        .prop_map(|(a, e, l, m, r)| CompleteSelection::new(a, e, l, m, r))
}

fn partial_selection() -> impl Strategy<Value = PartialSelection> {
    (
        proptest::option::of(select(LeftSacrifice::all())),
        proptest::option::of(select(MiddleSacrifice::all())),
        proptest::option::of(select(RightSacrifice::all())),
    )
        .prop_map(|(left, middle, right)| PartialSelection {
            left_sacrifice: left,
            middle_sacrifice: middle,
            right_sacrifice: right,
            ..PartialSelection::default()
        })
}

proptest! {
    #[test]
    fn encoding_is_deterministic(selection in complete_selection()) {
        prop_assert_eq!(
            compute_encoded_selection(&selection),
            compute_encoded_selection(&selection)
        );
    }

    #[test]
    fn encoding_distinguishes_selections(a in complete_selection(), b in complete_selection()) {
        prop_assume!(a != b);
        prop_assert_ne!(compute_encoded_selection(&a), compute_encoded_selection(&b));
    }

    #[test]
    fn free_slots_never_appear_in_requirements(selection in partial_selection()) {
        let tables = default_tables();
        let requirements = compute_requirements(&selection);

        let paid = [
            selection.left_sacrifice.map(|s| tables.left(s)),
            selection.middle_sacrifice.map(|s| tables.middle(s)),
            selection.right_sacrifice.map(|s| tables.right(s)),
        ]
        .into_iter()
        .flatten()
        .filter(|cost| !cost.is_free())
        .count();

        prop_assert_eq!(requirements.len(), paid);
        prop_assert!(requirements.iter().all(|r| r.quantity > 0));
    }

    #[test]
    fn distribution_sums_to_one(tags in proptest::collection::vec(select(FamiliarTag::ALL), 0..20)) {
        let weights = compute_distribution(tags.iter().copied());
        let contributing = tags.iter().any(|t| !t.is_excluded());

        if contributing {
            prop_assert!((weights.total() - 1.0).abs() < 1e-9);
            prop_assert!(weights.iter().all(|(_, w)| w > 0.0 && w <= 1.0));
        } else {
            prop_assert!(weights.is_empty());
        }
    }
}
