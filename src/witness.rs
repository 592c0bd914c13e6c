//! Value-level equality witnesses.
//!
//! A [`Witness<A, B>`] can only be built for types the crate considers
//! equal, and carries the conversions between them. The free functions are
//! the laws of equality: [`refl`], [`sym`], [`trans`] and the substitutions
//! [`sub1`] and [`sub2`].

use std::{convert::identity, fmt};

use crate::{logic::True, predicate::Relate, shape::Structural};

/// Evidence that `A` and `B` are the same type, held as conversions in
/// both directions.
///
/// Safe code can only obtain one through [`refl`] or
/// [`Witness::structural`], and from there through the combinators below.
pub struct Witness<A, B> {
    a2b: fn(A) -> B,
    b2a: fn(B) -> A,
}

impl<A, B> Clone for Witness<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for Witness<A, B> {}

impl<A, B> fmt::Debug for Witness<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Witness<{}, {}>", std::any::type_name::<A>(), std::any::type_name::<B>())
    }
}

impl<A, B> Witness<A, B> {
    /// Conjures a witness whose conversions are never meant to run.
    ///
    /// *NOTE*: Only for axioms. Calling either conversion panics.
    fn axiom() -> Self {
        Witness { a2b: forged::<A, B>, b2a: forged::<B, A> }
    }

    /// Witness between two distinct types with equal shapes, converting
    /// through [`Value`](crate::value::Value). Reordered record fields and
    /// reordered union members convert fine.
    pub fn structural() -> Self
    where
        A: Structural + Relate<B, Equal = True>,
        B: Structural,
    {
        Witness { a2b: reshape::<A, B>, b2a: reshape::<B, A> }
    }

    /// Converts `A` into `B`.
    pub fn coerce(&self, a: A) -> B {
        (self.a2b)(a)
    }

    /// Converts `B` back into `A`.
    pub fn coerce_back(&self, b: B) -> A {
        (self.b2a)(b)
    }
}

fn forged<A, B>(_: A) -> B {
    unreachable!("conversion of a witness built by `trans` was run, but `trans` is an axiom")
}

// Only called between types of equal shape, where every value of `A`
// reads back as a `B`.
fn reshape<A: Structural, B: Structural>(a: A) -> B {
    match B::from_value(&a.into_value()) {
        Some(b) => b,
        None => unreachable!(
            "`{}` value does not fit the equal shape `{}`",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        ),
    }
}

/// Every type equals itself.
pub fn refl<T>() -> Witness<T, T> {
    Witness { a2b: identity, b2a: identity }
}

/// Equality is symmetric.
pub fn sym<A, B>(w: Witness<A, B>) -> Witness<B, A> {
    Witness { a2b: w.b2a, b2a: w.a2b }
}

/// Equality is transitive.
///
/// This is an axiom rather than a construction: a function pointer cannot
/// capture the two conversions it would have to chain, so the result is
/// conjured and its conversions panic if called. Proofs only ever check
/// its type.
pub fn trans<A, B, C>(_: Witness<A, B>, _: Witness<B, C>) -> Witness<A, C> {
    Witness::axiom()
}

/// Substitutes `C` for `A` on the left, given `A = B` and `A = C`.
pub fn sub1<A, B, C>(ab: Witness<A, B>, ac: Witness<A, C>) -> Witness<C, B> {
    trans(sym(ac), ab)
}

/// Substitutes `C` for `B` on the right, given `A = B` and `B = C`.
pub fn sub2<A, B, C>(ab: Witness<A, B>, bc: Witness<B, C>) -> Witness<A, C> {
    trans(ab, bc)
}

/// Extracts the forward conversion.
pub fn cast<A, B>(w: Witness<A, B>) -> fn(A) -> B {
    w.a2b
}
