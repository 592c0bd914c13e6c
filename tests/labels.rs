//! Labels declared in separate modules are told apart by name only.

use typerel::{refl, test, test_disjoint, test_eq, test_strict_sub, Witness};

pub mod left {
    typerel::labels!(id, name);

    typerel::record! {
        #[derive(Debug, PartialEq)]
        pub struct Account { pub id: u64, pub name: String }
    }
}

pub mod right {
    typerel::labels!(name, id);

    typerel::record! {
        #[derive(Debug, PartialEq)]
        pub struct Member { pub name: String, pub id: u64 }
    }

    typerel::record! { pub struct Tagged { pub id: u64 } }
}

pub mod other {
    typerel::labels!(key);

    typerel::record! { pub struct Keyed { pub key: u64 } }
}

#[test]
fn same_name_is_the_same_label() {
    test(|| {
        (
            test_eq::<left::Account, right::Member>(refl()),
            test_strict_sub::<left::Account, right::Tagged>(refl()),
        )
    });
}

#[test]
fn different_names_never_collide() {
    // `key` and `id` are each the first label of their module
    test(|| {
        (
            test_disjoint::<other::Keyed, right::Tagged>(refl()),
            test_disjoint::<other::Keyed, left::Account>(refl()),
        )
    });
}

#[test]
fn values_move_between_modules() {
    let w: Witness<left::Account, right::Member> = Witness::structural();
    let member = w.coerce(left::Account { id: 7, name: "kim".to_owned() });
    assert_eq!(member, right::Member { name: "kim".to_owned(), id: 7 });
}
