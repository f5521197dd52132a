//! The algebra agrees with propositional logic at every sampled point, which
//! is what makes a shaded diagram a faithful picture of a law.

use venn::{and, iff, implies_only_if, not, or, xor, Bounds, Predicate, Region};

/// Three overlapping classes in the stock arrangement.
fn classes() -> (Predicate, Predicate, Predicate) {
    (
        Region::circle(145.0, 140.0, 80.0).into_predicate(),
        Region::circle(235.0, 140.0, 80.0).into_predicate(),
        Region::circle(190.0, 220.0, 80.0).into_predicate(),
    )
}

/// Sample well beyond the universe, including exact circle rims.
fn grid() -> impl Iterator<Item = (f64, f64)> {
    (-10..=50).flat_map(|i| (-10..=50).map(move |j| (i as f64 * 7.5, j as f64 * 7.5)))
}

fn assert_equivalent(lhs: &Predicate, rhs: &Predicate) {
    for (x, y) in grid() {
        assert_eq!(
            lhs.eval(x, y).unwrap(),
            rhs.eval(x, y).unwrap(),
            "differ at ({x}, {y})"
        );
    }
}

#[test]
fn double_negation() {
    let (f, _, _) = classes();
    assert_equivalent(&not(&not(&f)), &f);
}

#[test]
fn de_morgan() {
    let (f, g, _) = classes();
    assert_equivalent(&not(&or(&f, &g)), &and(&not(&f), &not(&g)));
    assert_equivalent(&not(&and(&f, &g)), &or(&not(&f), &not(&g)));
}

#[test]
fn material_conditional() {
    let (f, g, _) = classes();
    assert_equivalent(&implies_only_if(&f, &g), &or(&not(&f), &g));
}

#[test]
fn biconditional_complements_xor() {
    let (f, g, _) = classes();
    assert_equivalent(&iff(&f, &g), &not(&xor(&f, &g)));
}

#[test]
fn distributivity() {
    let (f, g, h) = classes();
    assert_equivalent(&and(&f, &or(&g, &h)), &or(&and(&f, &g), &and(&f, &h)));
    assert_equivalent(&or(&f, &and(&g, &h)), &and(&or(&f, &g), &or(&f, &h)));
}

#[test]
fn intersection_distributes_over_xor() {
    let (f, g, h) = classes();
    assert_equivalent(&and(&f, &xor(&g, &h)), &xor(&and(&f, &g), &and(&f, &h)));
}

#[test]
fn operators_match_combinators() {
    let (f, g, _) = classes();
    assert_equivalent(&(&f & &g), &and(&f, &g));
    assert_equivalent(&(&f | &g), &or(&f, &g));
    assert_equivalent(&(&f ^ &g), &xor(&f, &g));
    assert_equivalent(&!&f, &not(&f));
}

#[test]
fn circle_membership_boundary() {
    let f = Region::circle(145.0, 140.0, 80.0).into_predicate();
    assert!(f.eval(145.0, 140.0).unwrap());
    assert!(f.eval(65.0, 140.0).unwrap());
    for eps in [1e-6, 0.5, 3.0] {
        assert!(!f.eval(225.0 + eps, 140.0).unwrap(), "eps {eps}");
    }
}

#[test]
fn universe_everywhere() {
    let u = Region::universe(Bounds::default()).into_predicate();
    for (x, y) in grid() {
        assert!(u.eval(x, y).unwrap());
    }
    assert!(u.eval(-1e300, 1e300).unwrap());
}
