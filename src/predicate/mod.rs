//! Point-membership predicates and the boolean algebra over them.
//!
//! A [`Predicate`] answers "is `(x, y)` in this class?". Predicates are
//! immutable shared closures, so combining them never copies or mutates
//! the operands:
//!
//! ```
//! use venn::predicate::{implies_only_if, Predicate};
//!
//! let left = Predicate::new(|x, _| x < 0.0);
//! let low = Predicate::new(|_, y| y < 0.0);
//!
//! let law = implies_only_if(&left, &low);
//! assert!(law.eval(1.0, 1.0).unwrap());
//! assert!(!law.eval(-1.0, 1.0).unwrap());
//! ```

mod algebra;
mod expr;

pub use algebra::{and, iff, implies_only_if, not, or, xor};
pub use expr::PredicateExpr;

use std::fmt;
use std::rc::Rc;

use crate::error::Result;

type EvalFn = dyn Fn(f64, f64) -> Result<bool>;

/// A deterministic mapping from a 2D coordinate to class membership.
///
/// Cloning is cheap: clones share the same underlying closure.
#[derive(Clone)]
pub struct Predicate {
    eval: Rc<EvalFn>,
}

impl Predicate {
    /// Wrap an infallible membership test.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> bool + 'static,
    {
        Self::fallible(move |x, y| Ok(f(x, y)))
    }

    /// Wrap a membership test that may fail.
    ///
    /// A failure aborts any shading pass sampling this predicate.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> Result<bool> + 'static,
    {
        Self { eval: Rc::new(f) }
    }

    /// The predicate that holds everywhere.
    pub fn always() -> Self {
        Self::new(|_, _| true)
    }

    /// The predicate that holds nowhere.
    pub fn never() -> Self {
        Self::new(|_, _| false)
    }

    /// Evaluate membership at `(x, y)`.
    pub fn eval(&self, x: f64, y: f64) -> Result<bool> {
        (self.eval)(x, y)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        algebra::not(&self)
    }
}

impl std::ops::Not for &Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        algebra::not(self)
    }
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $combinator:path) => {
        impl std::ops::$trait for Predicate {
            type Output = Predicate;

            fn $method(self, rhs: Predicate) -> Predicate {
                $combinator(&self, &rhs)
            }
        }

        impl std::ops::$trait for &Predicate {
            type Output = Predicate;

            fn $method(self, rhs: &Predicate) -> Predicate {
                $combinator(self, rhs)
            }
        }
    };
}

binary_op!(BitAnd, bitand, algebra::and);
binary_op!(BitOr, bitor, algebra::or);
binary_op!(BitXor, bitxor, algebra::xor);
