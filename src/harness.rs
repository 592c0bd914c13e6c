//! Identity functions that make the compiler check a proof.
//!
//! None of these do anything when called, and [`test`] never even calls its
//! argument. A proposition that does not hold is a build error at the call
//! site:
//!
//! ```
//! use typerel::{refl, test, test_eq, test_sub, Union};
//!
//! test(|| {
//!     (
//!         test_eq::<f64, f64>(refl()),
//!         test_sub::<f64, Union<f64, String>>(refl()),
//!     )
//! });
//! ```
//!
//! ```compile_fail
//! use typerel::{refl, test, test_eq};
//!
//! test(|| test_eq::<f64, String>(refl()));
//! ```
//!
//! ```compile_fail
//! use typerel::{refl, test, test_sub, Union};
//!
//! test(|| test_sub::<Union<f64, String>, f64>(refl()));
//! ```

use crate::{predicate::Relate, relation::*};

/// Type-checks `thunk` without running it.
///
/// Group several checks in one thunk by returning them as a tuple.
pub fn test<T>(_thunk: impl FnOnce() -> T) {}

/// Checks any relation proof, however it was composed.
pub fn test_rel<R>(proof: R) -> R {
    proof
}

/// Attaches a label to a proof. The label is inert; it shows up in the
/// source line a failing build points at.
pub fn labelled<P>(_label: &str, proof: P) -> P {
    proof
}

/// Checks `A = B`.
pub fn test_eq<A: Relate<B>, B>(proof: Eq<A, B>) -> Eq<A, B> {
    test_rel(proof)
}

/// Checks `A != B`.
pub fn test_not_eq<A: Relate<B>, B>(proof: NotEq<A, B>) -> NotEq<A, B> {
    test_rel(proof)
}

/// Checks that `A` is assignable to `B`.
pub fn test_sub<A: Relate<B>, B>(proof: Sub<A, B>) -> Sub<A, B> {
    test_rel(proof)
}

/// Checks that `A` is not assignable to `B`.
pub fn test_not_sub<A: Relate<B>, B>(proof: NotSub<A, B>) -> NotSub<A, B> {
    test_rel(proof)
}

/// Checks that `A` is assignable to `B` and not equal to it.
///
/// ```compile_fail
/// use typerel::{labels, record, refl, test_strict_sub};
///
/// labels!(x);
/// record! { struct Obj { x: f64 } }
///
/// test_strict_sub::<Obj, Obj>(refl());
/// ```
pub fn test_strict_sub<A: Relate<B>, B>(proof: StrictSub<A, B>) -> StrictSub<A, B> {
    test_rel(proof)
}

/// Checks that `A` is not a strict subtype of `B`.
pub fn test_not_strict_sub<A: Relate<B>, B>(proof: NotStrictSub<A, B>) -> NotStrictSub<A, B> {
    test_rel(proof)
}

/// Checks that `B` is assignable to `A`.
pub fn test_super<A: Relate<B>, B>(proof: Super<A, B>) -> Super<A, B> {
    test_rel(proof)
}

/// Checks that `B` is not assignable to `A`.
pub fn test_not_super<A: Relate<B>, B>(proof: NotSuper<A, B>) -> NotSuper<A, B> {
    test_rel(proof)
}

/// Checks that `B` is assignable to `A` and not equal to it.
pub fn test_strict_super<A: Relate<B>, B>(proof: StrictSuper<A, B>) -> StrictSuper<A, B> {
    test_rel(proof)
}

/// Checks that `A` is not a strict supertype of `B`.
pub fn test_not_strict_super<A: Relate<B>, B>(
    proof: NotStrictSuper<A, B>,
) -> NotStrictSuper<A, B> {
    test_rel(proof)
}

/// Checks that one of `A`, `B` is assignable to the other.
pub fn test_related<A: Relate<B>, B>(proof: Related<A, B>) -> Related<A, B> {
    test_rel(proof)
}

/// Checks that neither of `A`, `B` is assignable to the other.
///
/// ```compile_fail
/// use typerel::{refl, test_disjoint, Union};
///
/// test_disjoint::<f64, Union<f64, bool>>(refl());
/// ```
pub fn test_disjoint<A: Relate<B>, B>(proof: Disjoint<A, B>) -> Disjoint<A, B> {
    test_rel(proof)
}
