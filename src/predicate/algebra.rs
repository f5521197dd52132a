//! Boolean combinators over predicates.
//!
//! Each combinator clones its operands (a reference-count bump) into a new
//! closure. `and` and `or` short-circuit like their logical counterparts, so
//! the right operand is never consulted where the left one decides.

use super::Predicate;

/// Complement: holds exactly where `f` does not.
pub fn not(f: &Predicate) -> Predicate {
    let f = f.clone();
    Predicate::fallible(move |x, y| Ok(!f.eval(x, y)?))
}

/// Intersection: holds where both `f` and `g` hold.
pub fn and(f: &Predicate, g: &Predicate) -> Predicate {
    let (f, g) = (f.clone(), g.clone());
    Predicate::fallible(move |x, y| Ok(f.eval(x, y)? && g.eval(x, y)?))
}

/// Union: holds where at least one of `f`, `g` holds.
pub fn or(f: &Predicate, g: &Predicate) -> Predicate {
    let (f, g) = (f.clone(), g.clone());
    Predicate::fallible(move |x, y| Ok(f.eval(x, y)? || g.eval(x, y)?))
}

/// Material conditional, "`f` only if `g`": `or(not(f), g)`.
pub fn implies_only_if(f: &Predicate, g: &Predicate) -> Predicate {
    or(&not(f), g)
}

/// Biconditional: holds where `f` and `g` agree.
pub fn iff(f: &Predicate, g: &Predicate) -> Predicate {
    let (f, g) = (f.clone(), g.clone());
    Predicate::fallible(move |x, y| Ok(f.eval(x, y)? == g.eval(x, y)?))
}

/// Symmetric difference: holds where `f` and `g` disagree.
pub fn xor(f: &Predicate, g: &Predicate) -> Predicate {
    let (f, g) = (f.clone(), g.clone());
    Predicate::fallible(move |x, y| Ok(f.eval(x, y)? != g.eval(x, y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VennError;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Two half-planes: every quadrant is one row of the truth table.
    fn operands() -> (Predicate, Predicate) {
        (
            Predicate::new(|x, _| x >= 0.0),
            Predicate::new(|_, y| y >= 0.0),
        )
    }

    const QUADRANTS: [(f64, f64, bool, bool); 4] = [
        (1.0, 1.0, true, true),
        (1.0, -1.0, true, false),
        (-1.0, 1.0, false, true),
        (-1.0, -1.0, false, false),
    ];

    fn check(p: &Predicate, truth: impl Fn(bool, bool) -> bool) {
        for (x, y, a, b) in QUADRANTS {
            assert_eq!(p.eval(x, y).unwrap(), truth(a, b), "at ({x}, {y})");
        }
    }

    #[test]
    fn test_truth_tables() {
        let (f, g) = operands();
        check(&not(&f), |a, _| !a);
        check(&and(&f, &g), |a, b| a && b);
        check(&or(&f, &g), |a, b| a || b);
        check(&implies_only_if(&f, &g), |a, b| !a || b);
        check(&iff(&f, &g), |a, b| a == b);
        check(&xor(&f, &g), |a, b| a != b);
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Rc::new(Cell::new(0));
        let counted = {
            let calls = Rc::clone(&calls);
            Predicate::new(move |_, _| {
                calls.set(calls.get() + 1);
                true
            })
        };

        and(&Predicate::never(), &counted).eval(0.0, 0.0).unwrap();
        or(&Predicate::always(), &counted).eval(0.0, 0.0).unwrap();
        assert_eq!(calls.get(), 0);

        and(&Predicate::always(), &counted).eval(0.0, 0.0).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_errors_propagate_through_combinators() {
        let failing = Predicate::fallible(|x, y| Err(VennError::evaluation(x, y, "boom")));
        let (f, _) = operands();

        assert!(not(&failing).eval(0.0, 0.0).is_err());
        assert!(iff(&f, &failing).eval(0.0, 0.0).is_err());
        assert!(xor(&failing, &f).eval(0.0, 0.0).is_err());
        // Decided by the left operand, so the failure is never reached.
        assert!(or(&f, &failing).eval(1.0, 0.0).unwrap());
    }

    #[test]
    fn test_operands_remain_usable() {
        let (f, g) = operands();
        let both = and(&f, &g);
        drop(g);
        assert!(both.eval(1.0, 1.0).unwrap());
        assert!(f.eval(1.0, 1.0).unwrap());
    }
}
