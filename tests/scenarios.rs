use typerel::{
    cast, refl, sub1, sub2, sym, test, test_disjoint, test_eq, test_not_strict_sub, test_not_sub,
    test_rel, test_sub, trans, Union, Witness,
};

use crate::shapes::{Num, Obj1, Obj2, Str};

pub mod shapes {
    use typerel::{labels, record};

    pub type Num = f64;
    pub type Str = String;

    labels!(x);

    record! {
        #[derive(Debug, PartialEq)]
        pub struct Obj1 {
            pub x: f64,
        }
    }

    record! {
        #[derive(Debug, PartialEq)]
        pub struct Obj2 {
            pub x: f64,
        }
    }
}

#[test]
fn equal_primitives() {
    test(|| test_eq::<Num, Num>(refl()));
}

#[test]
fn record_is_sub_but_not_strict_sub_of_itself() {
    test(|| {
        (
            test_sub::<Obj1, Obj1>(refl()),
            test_not_strict_sub::<Obj1, Obj1>(refl()),
        )
    });
}

#[test]
fn primitives_of_different_kinds_are_disjoint() {
    test(|| test_disjoint::<Num, Str>(refl()));
}

#[test]
fn records_are_equal_by_shape_not_name() {
    test(|| test_eq::<Obj1, Obj2>(refl()));
    let w: Witness<Obj1, Obj2> = Witness::structural();
    assert_eq!(w.coerce(Obj1 { x: 2.5 }), Obj2 { x: 2.5 });
}

#[test]
fn union_is_above_its_member_only() {
    test(|| {
        (
            test_sub::<Num, Union<Num, Str>>(refl()),
            test_not_sub::<Union<Num, Str>, Num>(refl()),
        )
    });
}

#[test]
fn equality_is_reflexive_symmetric_and_transitive() {
    let ab: Witness<Obj1, Obj2> = Witness::structural();
    let ba: Witness<Obj2, Obj1> = sym(ab);
    let aa: Witness<Obj1, Obj1> = trans(ab, ba);
    let bb: Witness<Obj2, Obj2> = sub1(ab, ab);
    let ab2: Witness<Obj1, Obj2> = sub2(refl(), ab);
    test_rel((aa, bb, ab2));

    assert_eq!(ba.coerce(Obj2 { x: 1.0 }), Obj1 { x: 1.0 });
    assert_eq!(cast(refl::<Num>())(4.0), 4.0);
}
