//! Overloading a function on runtime numeric tags.
//!
//! `foo` chains its candidates at the call site. Because the longest candidate
//! has four tags, calling it with fewer than four arguments is a declaration
//! error. `bar` declares the same candidates once as an `OverloadSet` that
//! skips candidates longer than the call.
//!
//! Run with `cargo run --example overloading`.

use overload::{
    Arguments, ArityPolicy, OverloadError, OverloadSet, PredicateRegistry, args,
    tags::{Int, MatrixSize, Real, standard_registry},
};

fn foo(registry: &PredicateRegistry, arguments: &Arguments) -> Result<i32, OverloadError> {
    arguments
        .session(registry)
        .signature(overload::tags![Int, Int, Real, Int], || 1)?
        .signature(overload::tags![Int], || 3)?
        .signature(overload::tags![Int, Int, Real], || 1)?
        .signature(overload::tags![Real, Int], || 2)?
        .otherwise(|| 4)
        .require()
}

fn bar() -> OverloadSet<&'static str> {
    OverloadSet::new()
        .with_arity_policy(ArityPolicy::Skip)
        .signature(overload::tags![Int, Int, Real, Int], |_| "int, int, real, int")
        .signature(overload::tags![Real, Int], |_| "real, int")
        .signature(overload::tags![MatrixSize], |_| "matrix size")
        .signature(overload::tags![Int], |_| "int")
        .otherwise(|_| "no overload")
}

fn main() {
    let registry = standard_registry();

    let calls = [
        ("foo(1, 2, 2.5, 4)", args![1, 2, 2.5, 4]),
        ("foo(2.5, 1)", args![2.5, 1]),
        ("foo(1)", args![1]),
    ];
    for (label, arguments) in &calls {
        match foo(&registry, arguments) {
            Ok(result) => println!("{label} = {result}"),
            Err(err) => println!("{label} failed: {err}"),
        }
    }

    let bar = bar();
    for shadowing in bar.shadowed() {
        println!(
            "bar: candidate {} is hidden by candidate {}",
            shadowing.shadowed, shadowing.by
        );
    }

    let calls = [
        ("bar(1, 2, 2.5, 4)", args![1, 2, 2.5, 4]),
        ("bar(2.5, 1)", args![2.5, 1]),
        ("bar(MatrixSize(2, 3))", args![MatrixSize::new(2, 3)]),
        ("bar(1)", args![1]),
        ("bar(\"text\")", args!["text"]),
    ];
    for (label, arguments) in &calls {
        match bar.dispatch(&registry, arguments) {
            Ok(outcome) => println!("{label} -> {}", outcome.into_output().unwrap_or("-")),
            Err(err) => println!("{label} failed: {err}"),
        }
    }
}
