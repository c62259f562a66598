//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use expected::{wrap, Expected};

const OOPS: &str = "oops";

type Ex = Expected<i32, &'static str>;
type Er = Expected<i32, i32>;

fn ex(value: i32) -> Ex {
    Ex::new(value)
}
fn er(value: i32) -> Er {
    Er::new(value)
}
fn oops() -> Ex {
    Ex::from(wrap(OOPS))
}

#[test]
fn two_values() {
    assert!(ex(42) == ex(42));
    assert!(ex(42) != ex(1024));
    assert!(ex(42) < ex(1024));
    assert!(ex(1024) > ex(42));
    assert!(ex(42) <= ex(42));
    assert!(ex(42) >= ex(42));
    assert!(ex(42) <= ex(1024));
    assert!(ex(1024) >= ex(42));

    assert!(!(ex(42) == ex(1024)));
    assert!(!(ex(42) != ex(42)));
    assert!(!(ex(1024) < ex(42)));
    assert!(!(ex(42) > ex(1024)));
    assert!(!(ex(1024) <= ex(42)));
    assert!(!(ex(42) >= ex(1024)));
}

#[test]
fn value_against_error() {
    assert!(!(ex(42) == oops()));
    assert!(ex(42) != oops());
    assert!(ex(42) < oops());
    assert!(!(ex(42) > oops()));
    assert!(ex(42) <= oops());
    assert!(!(ex(42) >= oops()));

    assert!(!(oops() == ex(42)));
    assert!(oops() != ex(42));
    assert!(!(oops() < ex(42)));
    assert!(oops() > ex(42));
    assert!(!(oops() <= ex(42)));
    assert!(oops() >= ex(42));
}

#[test]
fn errors_never_equal_values() {
    // Same payload, different branches.
    let value = Er::new(42);
    let error = Er::from(wrap(42));
    assert!(value != error);
    assert!(value < error);
    assert!(error > value);
    assert!(Er::from(wrap(-1000)) > Er::new(1000));
}

#[test]
fn two_errors() {
    let e = |v: i32| Er::from(wrap(v));
    assert!(e(42) == e(42));
    assert!(e(42) != e(1024));
    assert!(e(42) < e(1024));
    assert!(e(1024) > e(42));
    assert!(e(42) <= e(42));
    assert!(e(42) >= e(42));
    assert!(!(e(1024) < e(42)));
    assert!(!(e(42) >= e(1024)));
}

#[test]
fn scenario_d() {
    assert!(er(42) == er(42));
    assert!(er(42) != er(1024));
    assert!(er(42) < er(1024));
    assert!(er(1024) > er(42));
    assert!(er(42) <= er(42));
    assert!(er(42) >= er(42));
    assert!(er(42) <= er(1024));
    assert!(er(1024) >= er(42));

    assert!(!(er(42) == er(1024)));
    assert!(!(er(42) != er(42)));
    assert!(!(er(1024) < er(42)));
    assert!(!(er(42) > er(1024)));
    assert!(!(er(1024) <= er(42)));
    assert!(!(er(42) >= er(1024)));
}

#[test]
fn against_raw_value() {
    assert!(ex(42) == 42i32);
    assert!(ex(42) != 0i32);
    assert!(ex(42) < 1024i32);
    assert!(ex(1024) > 42i32);
    assert!(ex(42) <= 42i32);
    assert!(ex(42) >= 42i32);
    assert!(ex(42) <= 1024i32);
    assert!(ex(1024) >= 42i32);

    assert!(!(ex(42) == 0i32));
    assert!(!(ex(42) != 42i32));
    assert!(!(ex(1024) < 42i32));
    assert!(!(ex(42) > 1024i32));
    assert!(!(ex(1024) <= 42i32));
    assert!(!(ex(42) >= 1024i32));

    assert!(42i32 == ex(42));
    assert!(42i32 != ex(1024));
    assert!(42i32 < ex(1024));
    assert!(1024i32 > ex(42));
    assert!(42i32 <= ex(42));
    assert!(42i32 >= ex(42));
    assert!(42i32 <= ex(1024));
    assert!(1024i32 >= ex(42));

    assert!(!(42i32 == ex(1024)));
    assert!(!(42i32 != ex(42)));
    assert!(!(1024i32 < ex(42)));
    assert!(!(42i32 > ex(1024)));
    assert!(!(1024i32 <= ex(42)));
    assert!(!(42i32 >= ex(1024)));

    // A raw value is a value, so it sorts before any error.
    assert!(oops() != 42i32);
    assert!(42i32 < oops());
    assert!(oops() > 42i32);
}

#[test]
fn against_unexpected() {
    assert!(!(ex(42) == wrap(OOPS)));
    assert!(ex(42) != wrap(OOPS));
    assert!(ex(42) < wrap(OOPS));
    assert!(!(ex(42) > wrap(OOPS)));
    assert!(ex(42) <= wrap(OOPS));
    assert!(!(ex(42) >= wrap(OOPS)));

    assert!(!(wrap(OOPS) == ex(42)));
    assert!(wrap(OOPS) != ex(42));
    assert!(!(wrap(OOPS) < ex(42)));
    assert!(wrap(OOPS) > ex(42));
    assert!(!(wrap(OOPS) <= ex(42)));
    assert!(wrap(OOPS) >= ex(42));

    assert!(oops() == wrap(OOPS));
    assert!(wrap(OOPS) == oops());
    assert!(Er::from(wrap(1)) < wrap(2));
    assert!(wrap(2) >= Er::from(wrap(2)));
}

#[test]
fn string_values() {
    let s = Expected::<String, ()>::new(String::from("abc"));
    assert!(s == String::from("abc"));
    assert!(String::from("abb") < s);
    let t = Expected::<&'static str, ()>::new("abc");
    assert!(t == "abc");
    assert!("abd" > t);
}

#[test]
fn custom_value_comparisons() {
    #[derive(Debug, PartialEq, PartialOrd)]
    struct Meters(u32);
    expected::impl_value_comparisons!(Meters);

    let m = Expected::<Meters, &str>::new(Meters(3));
    assert!(m == Meters(3));
    assert!(Meters(4) > m);
    assert!(Expected::<Meters, &str>::from(wrap(OOPS)) > Meters(1000));
}

#[test]
fn total_order() {
    let mut all = vec![
        Er::from(wrap(3)),
        er(1024),
        Er::from(wrap(-5)),
        er(42),
        er(-1),
    ];
    all.sort();
    assert_eq!(
        all,
        vec![
            er(-1),
            er(42),
            er(1024),
            Er::from(wrap(-5)),
            Er::from(wrap(3)),
        ]
    );
    assert_eq!(er(1).cmp(&er(1)), core::cmp::Ordering::Equal);
    assert_eq!(er(1).partial_cmp(&Er::from(wrap(0))), Some(core::cmp::Ordering::Less));
}

#[test]
fn void_comparisons() {
    type V = Expected<(), &'static str>;
    assert!(V::success() == V::success());
    assert!(!(V::success() < V::success()));
    assert!(V::success() < V::from(wrap(OOPS)));
    assert!(V::from(wrap("a")) < V::from(wrap("b")));
    assert!(V::from(wrap(OOPS)) != V::success());
}
