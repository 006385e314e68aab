use crate::interval::Interval;

#[test]
fn of_is_structural() {
    assert_eq!(Interval::of(5, 5), Interval::of(5, 5));
    assert_eq!(Interval::of(2000, 2000), Interval::of(2000, 2000));
    assert_eq!(Interval::of(3, 9), Interval::of(3, 9));
    assert_ne!(Interval::of(3, 9), Interval::of(3, 8));
}

#[test]
fn length_counts_inclusive_bounds() {
    assert_eq!(Interval::of(3, 5).length(), 3);
    assert_eq!(Interval::of(5, 5).length(), 1);
    assert_eq!(Interval::of(5, 4).length(), 0);
    assert_eq!(Interval::INVALID.length(), 0);
}

#[test]
fn starts_before_predicates() {
    let a = Interval::of(1, 3);
    let b = Interval::of(5, 9);
    assert!(a.starts_before_disjoint(&b));
    assert!(!a.starts_before_non_disjoint(&b));

    let c = Interval::of(1, 6);
    assert!(!c.starts_before_disjoint(&b));
    assert!(c.starts_before_non_disjoint(&b));
}

#[test]
fn starts_after_predicates() {
    let a = Interval::of(5, 9);
    let b = Interval::of(1, 3);
    assert!(a.starts_after(&b));
    assert!(a.starts_after_disjoint(&b));
    assert!(!a.starts_after_non_disjoint(&b));

    let c = Interval::of(2, 9);
    assert!(c.starts_after(&b));
    assert!(!c.starts_after_disjoint(&b));
    assert!(c.starts_after_non_disjoint(&b));
}

#[test]
fn disjoint_is_the_or_of_one_sided_cases() {
    // exhaustive over a small grid of bounds
    for xa in -2..=4 {
        for xb in xa..=4 {
            for ya in -2..=4 {
                for yb in ya..=4 {
                    let x = Interval::of(xa, xb);
                    let y = Interval::of(ya, yb);
                    assert_eq!(
                        x.disjoint(&y),
                        x.starts_before_disjoint(&y) || x.starts_after_disjoint(&y),
                        "x={x} y={y}"
                    );
                }
            }
        }
    }
}

#[test]
fn adjacent_touches_without_gap() {
    assert!(Interval::of(1, 3).adjacent(&Interval::of(4, 6)));
    assert!(Interval::of(4, 6).adjacent(&Interval::of(1, 3)));
    assert!(!Interval::of(1, 3).adjacent(&Interval::of(5, 6)));
    assert!(!Interval::of(1, 4).adjacent(&Interval::of(4, 6)));
}

#[test]
fn properly_contains() {
    assert!(Interval::of(1, 9).properly_contains(&Interval::of(3, 5)));
    assert!(Interval::of(1, 9).properly_contains(&Interval::of(1, 9)));
    assert!(!Interval::of(1, 9).properly_contains(&Interval::of(3, 10)));
}

#[test]
fn union_covers_both() {
    assert_eq!(
        Interval::of(1, 3).union(&Interval::of(7, 9)),
        Interval::of(1, 9)
    );
    assert_eq!(
        Interval::of(5, 9).union(&Interval::of(1, 6)),
        Interval::of(1, 9)
    );
}

#[test]
fn intersection_is_the_overlap() {
    assert_eq!(
        Interval::of(1, 5).intersection(&Interval::of(3, 9)),
        Interval::of(3, 5)
    );
    // disjoint inputs produce an empty interval
    assert_eq!(Interval::of(1, 2).intersection(&Interval::of(5, 9)).length(), 0);
}

#[test]
fn one_sided_difference() {
    let this = Interval::of(1, 10);
    // other overlaps our start
    assert_eq!(
        this.difference_not_properly_contained(&Interval::of(0, 4)),
        Some(Interval::of(5, 10))
    );
    // other overlaps our end
    assert_eq!(
        this.difference_not_properly_contained(&Interval::of(5, 12)),
        Some(Interval::of(1, 4))
    );
    // disjoint: nothing to remove
    assert_eq!(
        this.difference_not_properly_contained(&Interval::of(12, 15)),
        None
    );
    // other covers all of self: remainder is empty
    let diff = this
        .difference_not_properly_contained(&Interval::of(0, 20))
        .unwrap();
    assert_eq!(diff.length(), 0);
}

#[test]
fn display_uses_range_notation() {
    assert_eq!(Interval::of(1, 5).to_string(), "1..5");
    assert_eq!(Interval::of(7, 7).to_string(), "7..7");
}
