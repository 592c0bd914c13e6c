//! Relation proofs between two structural types.
//!
//! Each alias here is a [`Witness`] tying a boolean expression over
//! [`Relate`] to a fixed truth value. It is inhabited exactly when the
//! expression evaluates to that value, and then [`refl`](crate::refl) is
//! the proof:
//!
//! ```
//! use typerel::{refl, relation::StrictSub, Union};
//!
//! let _: StrictSub<u8, Union<u8, bool>> = refl();
//! ```
//!
//! Asking for a relation that does not hold is a type error:
//!
//! ```compile_fail
//! use typerel::{refl, relation::StrictSub};
//!
//! let _: StrictSub<u8, u8> = refl();
//! ```
//!
//! [`composed`] spells the same relations out of other relations with
//! [`prop::And`](crate::prop::And) and [`prop::Or`](crate::prop::Or). Both
//! sets agree on every pair of types; the ones here are canonical because
//! they bottom out in the two primitive predicates directly.

use crate::{
    logic::{And, False, Not, Or, True},
    predicate::Relate,
    witness::Witness,
};

type SubOf<A, B> = <A as Relate<B>>::Subtype;
type SuperOf<A, B> = <A as Relate<B>>::Supertype;
type EqOf<A, B> = <A as Relate<B>>::Equal;
type StrictSubOf<A, B> = And<SubOf<A, B>, Not<EqOf<A, B>>>;
type StrictSuperOf<A, B> = And<SuperOf<A, B>, Not<EqOf<A, B>>>;
type RelatedOf<A, B> = Or<SubOf<A, B>, SuperOf<A, B>>;

/// `A` and `B` are assignable to each other.
pub type Eq<A, B> = Witness<EqOf<A, B>, True>;
pub type NotEq<A, B> = Witness<EqOf<A, B>, False>;

/// `A` is assignable to `B`.
pub type Sub<A, B> = Witness<SubOf<A, B>, True>;
pub type NotSub<A, B> = Witness<SubOf<A, B>, False>;

/// `B` is assignable to `A`.
pub type Super<A, B> = Witness<SuperOf<A, B>, True>;
pub type NotSuper<A, B> = Witness<SuperOf<A, B>, False>;

/// `A` is assignable to `B` but not the other way round.
pub type StrictSub<A, B> = Witness<StrictSubOf<A, B>, True>;
pub type NotStrictSub<A, B> = Witness<StrictSubOf<A, B>, False>;

/// `B` is assignable to `A` but not the other way round.
pub type StrictSuper<A, B> = Witness<StrictSuperOf<A, B>, True>;
pub type NotStrictSuper<A, B> = Witness<StrictSuperOf<A, B>, False>;

/// One of `A` and `B` is assignable to the other.
pub type Related<A, B> = Witness<RelatedOf<A, B>, True>;
pub type NotRelated<A, B> = Witness<RelatedOf<A, B>, False>;

/// Neither of `A` and `B` is assignable to the other.
pub type Disjoint<A, B> = Witness<<A as Relate<B>>::Disjoint, True>;
pub type NotDisjoint<A, B> = Witness<<A as Relate<B>>::Disjoint, False>;

/// The same relations, built from each other.
///
/// Equality is the value-level [`Witness<A, B>`] itself, so between two
/// distinct types it comes from [`Witness::structural`]. Intersections are
/// proven with [`prop::and`](crate::prop::and) and unions with
/// [`prop::or_l`](crate::prop::or_l) or [`prop::or_r`](crate::prop::or_r):
///
/// ```
/// use typerel::{prop::{and, or_r}, refl, relation::composed, Union};
///
/// type U = Union<u8, bool>;
/// let _: composed::StrictSub<u8, U> = and(refl(), refl());
/// let _: composed::NotStrictSub<u8, String> = or_r(and(refl(), refl()));
/// ```
///
/// They fail where the canonical ones do. No type is a strict subtype of
/// itself:
///
/// ```compile_fail
/// use typerel::{labels, prop::and, record, refl, relation::composed};
///
/// labels!(x);
/// record! { struct Obj { x: f64 } }
///
/// let _: composed::StrictSub<Obj, Obj> = and(refl(), refl());
/// ```
///
/// A union member is not disjoint from the union:
///
/// ```compile_fail
/// use typerel::{prop::and, refl, relation::composed, Union};
///
/// let _: composed::Disjoint<f64, Union<f64, bool>> = and(refl(), refl());
/// ```
///
/// And two disjoint types have no equality witness:
///
/// ```compile_fail
/// use typerel::{relation::composed, Witness};
///
/// let _: composed::Eq<f64, String> = Witness::structural();
/// ```
pub mod composed {
    use crate::{
        prop::{And, Or},
        witness::Witness,
    };

    pub type Eq<A, B> = Witness<A, B>;
    pub type NotEq<A, B> = super::NotEq<A, B>;
    pub type Sub<A, B> = super::Sub<A, B>;
    pub type NotSub<A, B> = super::NotSub<A, B>;
    pub type Super<A, B> = Sub<B, A>;
    pub type NotSuper<A, B> = NotSub<B, A>;
    pub type StrictSub<A, B> = And<Sub<A, B>, NotEq<A, B>>;
    pub type NotStrictSub<A, B> = Or<Super<A, B>, Disjoint<A, B>>;
    pub type StrictSuper<A, B> = And<Super<A, B>, NotEq<A, B>>;
    pub type NotStrictSuper<A, B> = Or<Sub<A, B>, Disjoint<A, B>>;
    pub type Related<A, B> = Or<Sub<A, B>, Super<A, B>>;
    pub type NotRelated<A, B> = Disjoint<A, B>;
    pub type Disjoint<A, B> = And<NotSub<A, B>, NotSuper<A, B>>;
    pub type NotDisjoint<A, B> = Related<A, B>;
}
