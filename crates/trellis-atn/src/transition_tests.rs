use trellis_core::IntervalSet;

use crate::state::StateId;
use crate::transition::Transition;

fn target() -> StateId {
    StateId::from_index(0)
}

#[test]
fn epsilon_family_consumes_no_input() {
    let t = target();
    assert!(Transition::epsilon(t).is_epsilon());
    assert!(
        Transition::Rule {
            target: t,
            rule_index: 0,
            precedence: 0,
            follow_state: t,
        }
        .is_epsilon()
    );
    assert!(
        Transition::Predicate {
            target: t,
            rule_index: 0,
            pred_index: 0,
            is_ctx_dependent: false,
        }
        .is_epsilon()
    );
    assert!(
        Transition::PrecedencePredicate {
            target: t,
            precedence: 1,
        }
        .is_epsilon()
    );
    assert!(
        Transition::Action {
            target: t,
            rule_index: 0,
            action_index: 0,
            is_ctx_dependent: false,
        }
        .is_epsilon()
    );

    assert!(!Transition::Atom { target: t, label: 5 }.is_epsilon());
    assert!(!Transition::Wildcard { target: t }.is_epsilon());
}

#[test]
fn labels_materialize_for_consuming_variants() {
    let t = target();
    assert_eq!(
        Transition::Range {
            target: t,
            start: 3,
            stop: 6,
        }
        .label(),
        Some(IntervalSet::of_range(3, 6))
    );
    assert_eq!(
        Transition::Atom { target: t, label: 9 }.label(),
        Some(IntervalSet::of(9))
    );

    let set = IntervalSet::of_range(10, 12);
    assert_eq!(
        Transition::Set {
            target: t,
            set: set.clone(),
        }
        .label(),
        Some(set.clone())
    );
    // a not-set's label is the excluded set itself
    assert_eq!(
        Transition::NotSet {
            target: t,
            set: set.clone(),
        }
        .label(),
        Some(set)
    );

    assert_eq!(Transition::Wildcard { target: t }.label(), None);
    assert_eq!(Transition::epsilon(t).label(), None);
}

#[test]
fn range_matches_inclusive_bounds() {
    let t = Transition::Range {
        target: target(),
        start: 10,
        stop: 20,
    };
    assert!(t.matches(10, 0, 100));
    assert!(t.matches(20, 0, 100));
    assert!(!t.matches(9, 0, 100));
    assert!(!t.matches(21, 0, 100));
}

#[test]
fn atom_matches_only_its_label() {
    let t = Transition::Atom {
        target: target(),
        label: 7,
    };
    assert!(t.matches(7, 0, 100));
    assert!(!t.matches(8, 0, 100));
}

#[test]
fn set_matches_members() {
    let t = Transition::Set {
        target: target(),
        set: IntervalSet::of_range(3, 5),
    };
    assert!(t.matches(4, 0, 100));
    assert!(!t.matches(6, 0, 100));
}

#[test]
fn not_set_matches_in_vocabulary_non_members() {
    let t = Transition::NotSet {
        target: target(),
        set: IntervalSet::of_range(3, 5),
    };
    assert!(t.matches(6, 0, 100));
    assert!(!t.matches(4, 0, 100));
    // outside the vocabulary nothing matches, member or not
    assert!(!t.matches(101, 0, 100));
    assert!(!t.matches(-1, 0, 100));
}

#[test]
fn wildcard_matches_whole_vocabulary() {
    let t = Transition::Wildcard { target: target() };
    assert!(t.matches(0, 0, 100));
    assert!(t.matches(100, 0, 100));
    assert!(!t.matches(101, 0, 100));
    assert!(!t.matches(-1, 0, 100));
}

#[test]
fn epsilon_family_never_matches() {
    let t = target();
    assert!(!Transition::epsilon(t).matches(5, 0, 100));
    assert!(
        !Transition::Rule {
            target: t,
            rule_index: 0,
            precedence: 0,
            follow_state: t,
        }
        .matches(5, 0, 100)
    );
}

#[test]
fn target_is_uniform_across_variants() {
    let t = StateId::from_index(42);
    assert_eq!(Transition::epsilon(t).target(), t);
    assert_eq!(Transition::Wildcard { target: t }.target(), t);
    assert_eq!(
        Transition::Set {
            target: t,
            set: IntervalSet::of(1),
        }
        .target(),
        t
    );
}
