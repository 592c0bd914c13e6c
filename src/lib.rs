//! Compile-time proofs about how two types relate.
//!
//! A relation between `A` and `B` (equality, subtyping, disjointness and
//! so on) is a type that has a value only when the relation holds. Writing
//! that value down is the proof; if the relation does not hold the crate
//! does not compile. Nothing is checked at runtime.
//!
//! Types take part by being [`Structural`]: primitives, [`Union`],
//! `Option` and [`Never`] are built in, records are declared with
//! [`record!`]. Relations compare shapes, not names:
//!
//! ```
//! use typerel::{labels, record, refl, test, test_disjoint, test_eq, test_sub, Union};
//!
//! labels!(x);
//! record! { struct Obj1 { x: f64 } }
//! record! { struct Obj2 { x: f64 } }
//!
//! test(|| {
//!     (
//!         test_eq::<f64, f64>(refl()),
//!         test_eq::<Obj1, Obj2>(refl()),
//!         test_disjoint::<f64, String>(refl()),
//!         test_sub::<f64, Union<f64, String>>(refl()),
//!     )
//! });
//! ```
//!
//! A strict subtype is never equal to itself:
//!
//! ```compile_fail
//! use typerel::{labels, record, refl, test, test_strict_sub};
//!
//! labels!(x);
//! record! { struct Obj1 { x: f64 } }
//!
//! test(|| test_strict_sub::<Obj1, Obj1>(refl()));
//! ```
//!
//! Labels are identified by name, wherever they are declared. Records whose
//! fields are named differently are not equal:
//!
//! ```compile_fail
//! use typerel::{refl, test, test_eq};
//!
//! mod b {
//!     typerel::labels!(name);
//!     typerel::record! { pub struct Named { pub name: String } }
//! }
//!
//! mod c {
//!     typerel::labels!(x);
//!     typerel::record! { pub struct OnlyX { pub x: String } }
//! }
//!
//! test(|| test_eq::<b::Named, c::OnlyX>(refl()));
//! ```

pub mod harness;
pub mod id;
pub mod logic;
pub mod predicate;
pub mod prop;
pub mod relation;
pub mod shape;
pub mod value;
pub mod witness;

#[doc(hidden)]
pub use typerel_macros::label_id as __label_id;

pub use harness::{
    labelled, test, test_disjoint, test_eq, test_not_eq, test_not_strict_sub,
    test_not_strict_super, test_not_sub, test_not_super, test_related, test_rel,
    test_strict_sub, test_strict_super, test_sub, test_super,
};
pub use logic::{Bool, False, True};
pub use predicate::{IsDisjoint, IsEqual, IsSubtype, IsSupertype, Relate};
pub use relation::{
    Disjoint, NotDisjoint, NotEq, NotRelated, NotStrictSub, NotStrictSuper, NotSub,
    NotSuper, Related, StrictSub, StrictSuper, Sub, Super,
};
pub use shape::{Never, Structural, Union};
pub use witness::{cast, refl, sub1, sub2, sym, trans, Witness};
