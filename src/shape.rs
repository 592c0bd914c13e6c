//! Structural shapes and assignability between them.
//!
//! A shape is a type-level list of members read as their union: [`Nil`] is
//! the empty type, `Cons<M, Nil>` has exactly the values of member `M`.
//! Members are primitive kinds ([`Prim`]) or labelled records ([`Rec`]).

use std::{convert::Infallible, marker::PhantomData};

use crate::{
    id::{IdEq, S, Z},
    logic::{And, Bool, False, Or, True},
    value::Value,
};

/// Empty list.
pub enum Nil {}

/// List cell with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// Primitive member, identified by kind id `K`.
pub struct Prim<K>(PhantomData<K>);

/// Record member with field list `F`.
pub struct Rec<F>(PhantomData<F>);

/// Record field with label id `L` and shape `S`.
pub struct Field<L, S>(PhantomData<(L, S)>);

/// A type that takes part in relation checking.
///
/// `Shape` is what the predicates compare. [`Value`] is what
/// [`Witness::structural`](crate::Witness::structural) converts through:
/// any value of a type can be read back by every type whose shape accepts
/// it, so two types of equal shape convert into each other without knowing
/// about each other.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no structural shape",
    label = "relations can only be checked between structural types",
    note = "declare records with `record!`, or implement `Structural` by hand"
)]
pub trait Structural: Sized {
    type Shape;

    fn into_value(self) -> Value;

    /// Reads a value back, or `None` if the shape of `Self` does not admit
    /// it.
    fn from_value(value: &Value) -> Option<Self>;
}

/// A record field label allocated by [`labels!`](crate::labels).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a field label",
    note = "declare labels with `labels!`"
)]
pub trait Label {
    type Id;
    const NAME: &'static str;
}

/// `Self` as a shape is assignable to `B`: every member of `Self` is
/// assignable to some member of `B`.
pub trait ShapeSub<B> {
    type Out: Bool;
}

impl<B> ShapeSub<B> for Nil {
    type Out = True;
}

impl<M, T, B> ShapeSub<B> for Cons<M, T>
where
    M: AnyOf<B>,
    T: ShapeSub<B>,
{
    type Out = And<<M as AnyOf<B>>::Out, <T as ShapeSub<B>>::Out>;
}

/// Member `Self` is assignable to at least one member of the list `B`.
pub trait AnyOf<B> {
    type Out: Bool;
}

impl<M> AnyOf<Nil> for M {
    type Out = False;
}

impl<M, N, T> AnyOf<Cons<N, T>> for M
where
    M: MemberSub<N> + AnyOf<T>,
{
    type Out = Or<<M as MemberSub<N>>::Out, <M as AnyOf<T>>::Out>;
}

/// Member `Self` is assignable to member `N`.
pub trait MemberSub<N> {
    type Out: Bool;
}

impl<K, J> MemberSub<Prim<J>> for Prim<K>
where
    K: IdEq<J>,
{
    type Out = <K as IdEq<J>>::Out;
}

impl<K, G> MemberSub<Rec<G>> for Prim<K> {
    type Out = False;
}

impl<F, J> MemberSub<Prim<J>> for Rec<F> {
    type Out = False;
}

impl<F, G> MemberSub<Rec<G>> for Rec<F>
where
    F: FieldsSub<G>,
{
    type Out = <F as FieldsSub<G>>::Out;
}

/// Field list `Self` is assignable to `G`: for every field of `G`, `Self`
/// has a field with the same label whose shape is assignable to it. Field
/// order does not matter.
pub trait FieldsSub<G> {
    type Out: Bool;
}

impl<F> FieldsSub<Nil> for F {
    type Out = True;
}

impl<F, L, S, T> FieldsSub<Cons<Field<L, S>, T>> for F
where
    F: FieldAccepts<L, S> + FieldsSub<T>,
{
    type Out = And<<F as FieldAccepts<L, S>>::Out, <F as FieldsSub<T>>::Out>;
}

/// Field list `Self` has a field labelled `L` whose shape is assignable to
/// `S`.
pub trait FieldAccepts<L, S> {
    type Out: Bool;
}

impl<L, S> FieldAccepts<L, S> for Nil {
    type Out = False;
}

impl<L1, S1, T, L, S> FieldAccepts<L, S> for Cons<Field<L1, S1>, T>
where
    L1: IdEq<L>,
    S1: ShapeSub<S>,
    T: FieldAccepts<L, S>,
{
    type Out = Or<
        And<<L1 as IdEq<L>>::Out, <S1 as ShapeSub<S>>::Out>,
        <T as FieldAccepts<L, S>>::Out,
    >;
}

/// Appends list `R` to `Self`.
pub trait Concat<R> {
    type Out;
}

impl<R> Concat<R> for Nil {
    type Out = R;
}

impl<H, T, R> Concat<R> for Cons<H, T>
where
    T: Concat<R>,
{
    type Out = Cons<H, <T as Concat<R>>::Out>;
}

/// Value of either `A` or `B`; its shape is the union of theirs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Union<A, B> {
    Left(A),
    Right(B),
}

impl<A, B> Structural for Union<A, B>
where
    A: Structural,
    B: Structural,
    A::Shape: Concat<B::Shape>,
{
    type Shape = <A::Shape as Concat<B::Shape>>::Out;

    fn into_value(self) -> Value {
        match self {
            Union::Left(a) => a.into_value(),
            Union::Right(b) => b.into_value(),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        A::from_value(value)
            .map(Union::Left)
            .or_else(|| B::from_value(value).map(Union::Right))
    }
}

/// `Option<T>` is `T` or null, where null is `()`.
impl<T> Structural for Option<T>
where
    T: Structural,
    <() as Structural>::Shape: Concat<T::Shape>,
{
    type Shape = <<() as Structural>::Shape as Concat<T::Shape>>::Out;

    fn into_value(self) -> Value {
        self.map_or(Value::Unit, T::into_value)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Unit => Some(None),
            _ => T::from_value(value).map(Some),
        }
    }
}

/// The type without values. Assignable to every type.
pub type Never = Infallible;

impl Structural for Infallible {
    type Shape = Nil;

    fn into_value(self) -> Value {
        match self {}
    }

    fn from_value(_: &Value) -> Option<Self> {
        None
    }
}

impl Structural for () {
    type Shape = Cons<Prim<Z>, Nil>;

    fn into_value(self) -> Value {
        Value::Unit
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Unit => Some(()),
            _ => None,
        }
    }
}

// Each primitive gets the next kind id, after `()`.
macro_rules! primitives {
    (@next $id:ty;) => {};
    (@next $id:ty; $ty:ty => $variant:ident $(, $rest:ty => $rest_variant:ident)*) => {
        impl Structural for $ty {
            type Shape = Cons<Prim<$id>, Nil>;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(Clone::clone(v)),
                    _ => None,
                }
            }
        }

        primitives!(@next S<$id>; $($rest => $rest_variant),*);
    };
}

primitives!(
    @next S<Z>;
    bool => Bool, char => Char,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128, usize => Usize,
    f32 => F32, f64 => F64,
    &'static str => StaticStr, String => String
);

/// Declares field labels.
///
/// A label's id is spelled from its name, so labels declared in different
/// modules (or crates) with the same name are the same label.
///
/// ```
/// typerel::labels!(x, y);
/// ```
#[macro_export]
macro_rules! labels {
    ($($label:ident),+ $(,)?) => {
        $(
            #[allow(non_camel_case_types)]
            pub enum $label {}

            impl $crate::shape::Label for $label {
                type Id = $crate::__label_id!($crate; $label);
                const NAME: &'static str = ::core::stringify!($label);
            }
        )+
    };
}

/// Declares a struct together with its record shape.
///
/// Every field name must be a label in scope, declared with [`labels!`],
/// and every field type must be [`Structural`]. Field order is not part of
/// the shape.
///
/// ```
/// use typerel::{labels, record};
///
/// labels!(x);
///
/// record! {
///     #[derive(Debug)]
///     pub struct Point {
///         pub x: f64,
///     }
/// }
///
/// let p = Point { x: 1.0 };
/// assert_eq!(p.x, 1.0);
/// ```
#[macro_export]
macro_rules! record {
    (@fields) => { $crate::shape::Nil };
    (@fields $field:ident: $ty:ty $(, $rest:ident: $rest_ty:ty)*) => {
        $crate::shape::Cons<
            $crate::shape::Field<
                <$field as $crate::shape::Label>::Id,
                <$ty as $crate::shape::Structural>::Shape,
            >,
            $crate::record!(@fields $($rest: $rest_ty),*),
        >
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$field_meta:meta])* $field_vis:vis $field:ident: $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$field_meta])* $field_vis $field: $ty),*
        }

        impl $crate::shape::Structural for $name {
            type Shape = $crate::shape::Cons<
                $crate::shape::Rec<$crate::record!(@fields $($field: $ty),*)>,
                $crate::shape::Nil,
            >;

            fn into_value(self) -> $crate::value::Value {
                $crate::value::Value::Record(::std::vec![$((
                    <$field as $crate::shape::Label>::NAME,
                    $crate::shape::Structural::into_value(self.$field),
                )),*])
            }

            #[allow(unused_variables)]
            fn from_value(
                value: &$crate::value::Value,
            ) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(Self {
                    $($field: $crate::shape::Structural::from_value(
                        value.field(<$field as $crate::shape::Label>::NAME)?,
                    )?),*
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::value;

    type Sub<A, B> = <<A as Structural>::Shape as ShapeSub<<B as Structural>::Shape>>::Out;

    crate::labels!(name, age, x, y, z);

    crate::record! {
        struct Person {
            name: String,
            age: u8,
        }
    }

    crate::record! {
        #[allow(dead_code)]
        struct Named {
            name: String,
        }
    }

    crate::record! {
        #[allow(dead_code)]
        struct Aged {
            age: u8,
        }
    }

    crate::record! {
        #[derive(Debug, PartialEq)]
        struct Xy {
            x: f64,
            y: f64,
        }
    }

    crate::record! {
        #[derive(Debug, PartialEq)]
        struct Yx {
            y: f64,
            x: f64,
        }
    }

    crate::record! {
        #[derive(Debug, PartialEq)]
        struct Xyz {
            x: f64,
            y: f64,
            z: f64,
        }
    }

    crate::record! {
        #[derive(Debug, PartialEq)]
        struct Xz {
            x: f64,
            z: f64,
        }
    }

    #[test]
    fn primitives_only_accept_themselves() {
        assert!(value::<Sub<f64, f64>>());
        assert!(!value::<Sub<f64, f32>>());
        assert!(!value::<Sub<String, &'static str>>());
    }

    #[test]
    fn union_members_are_subtypes() {
        assert!(value::<Sub<u8, Union<u8, bool>>>());
        assert!(value::<Sub<bool, Union<u8, bool>>>());
        assert!(!value::<Sub<Union<u8, bool>, u8>>());
        assert!(value::<Sub<Union<bool, u8>, Union<u8, bool>>>());
    }

    #[test]
    fn option_is_union_with_unit() {
        assert!(value::<Sub<(), Option<u8>>>());
        assert!(value::<Sub<u8, Option<u8>>>());
        assert!(!value::<Sub<Option<u8>, u8>>());
    }

    #[test]
    fn never_is_below_everything() {
        assert!(value::<Sub<Never, u8>>());
        assert!(value::<Sub<Never, Person>>());
        assert!(!value::<Sub<u8, Never>>());
    }

    #[test]
    fn records_subtype_by_width() {
        assert!(value::<Sub<Person, Named>>());
        assert!(value::<Sub<Person, Aged>>());
        assert!(!value::<Sub<Named, Person>>());
        assert!(!value::<Sub<Named, Aged>>());
        assert!(!value::<Sub<Person, String>>());
    }

    #[test]
    fn field_order_is_irrelevant() {
        assert!(value::<Sub<Xy, Yx>>());
        assert!(value::<Sub<Yx, Xy>>());
        assert!(value::<Sub<Xyz, Xz>>());
        assert!(!value::<Sub<Xz, Xyz>>());
        assert!(!value::<Sub<Xz, Xy>>());
    }

    #[test]
    fn record_values_are_keyed_by_label() {
        let p = Person { name: "ada".to_owned(), age: 36 };
        let v = p.into_value();
        assert_eq!(
            v,
            Value::Record(vec![("name", Value::String("ada".to_owned())), ("age", Value::U8(36))])
        );
        let back = Person::from_value(&v).unwrap();
        assert_eq!((back.name.as_str(), back.age), ("ada", 36));

        let yx = Yx::from_value(&Xyz { x: 1.0, y: 2.0, z: 3.0 }.into_value());
        assert_eq!(yx, Some(Yx { y: 2.0, x: 1.0 }));
        assert_eq!(Xyz::from_value(&Xy { x: 1.0, y: 2.0 }.into_value()), None);
    }

    #[test]
    fn union_values_are_read_by_kind() {
        let v = Union::<f64, String>::Right("s".to_owned()).into_value();
        assert_eq!(
            Union::<String, f64>::from_value(&v),
            Some(Union::Left("s".to_owned()))
        );
        assert_eq!(Option::<u8>::from_value(&Value::Unit), Some(None));
        assert_eq!(Option::<u8>::from_value(&Value::U8(3)), Some(Some(3)));
        assert_eq!(u8::from_value(&Value::U16(3)), None);
    }
}
