// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Slot accounting for declarations and container literals.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use brook_runtime::Expr;
use brook_spec_tests::Stmt;
use common::{TestRuntime, id, inf, n, nan, neg_inf, t};

#[test]
fn primitive_declarations_take_one_slot_each() {
    let mut rt = TestRuntime::new();
    assert_eq!(rt.variables_count().unwrap(), 0.0);

    let declarations = [
        Stmt::Var("a1", None),
        Stmt::var("a2", id("a1")),
        Stmt::var("a3", Expr::ident("undefined")),
        Stmt::var("a4", Expr::null()),
        Stmt::var("a5", n(1.0)),
        Stmt::var("a6", nan()),
        Stmt::var("a7", inf()),
        Stmt::var("a8", neg_inf()),
        Stmt::var("a9", t("Hello")),
    ];
    for (expected, stmt) in (1..).zip(declarations) {
        rt.run(&[stmt]).unwrap();
        assert_eq!(rt.variables_count().unwrap(), f64::from(expected));
    }
}

#[test]
fn container_literals_count_container_and_fresh_members() {
    let mut rt = TestRuntime::new();
    rt.run(&[Stmt::var("a9", t("Hello"))]).unwrap();
    assert_eq!(rt.variables_count().unwrap(), 1.0);

    // Two fresh members plus the object; `say` reuses a9's slot
    rt.run(&[Stmt::var(
        "a10",
        Expr::object([("name", t("Alex")), ("age", n(1.0)), ("say", id("a9"))]),
    )])
    .unwrap();
    assert_eq!(rt.variables_count().unwrap(), 4.0);

    rt.run(&[Stmt::var("a11", Expr::array([n(1.0), n(2.0), id("a10")]))])
        .unwrap();
    assert_eq!(rt.variables_count().unwrap(), 7.0);
}

#[test]
fn full_primitive_types_program() {
    let mut rt = TestRuntime::new();
    rt.run(&[
        Stmt::Var("a1", None),
        Stmt::var("a2", id("a1")),
        Stmt::var("a3", Expr::ident("undefined")),
        Stmt::var("a4", Expr::null()),
        Stmt::var("a5", n(1.0)),
        Stmt::var("a6", nan()),
        Stmt::var("a7", inf()),
        Stmt::var("a8", neg_inf()),
        Stmt::var("a9", t("Hello")),
    ])
    .unwrap();
    assert_eq!(rt.variables_count().unwrap(), 9.0);

    rt.run(&[Stmt::var(
        "a10",
        Expr::object([("name", t("Alex")), ("age", n(1.0)), ("say", id("a9"))]),
    )])
    .unwrap();
    assert_eq!(rt.variables_count().unwrap(), 12.0);

    rt.run(&[Stmt::var("a11", Expr::array([n(1.0), n(2.0), id("a10")]))])
        .unwrap();
    assert_eq!(rt.variables_count().unwrap(), 15.0);

    rt.check(&id("a10").member("say"), &t("Hello")).unwrap();
    rt.check(&id("a11").index(n(2.0)).member("name"), &t("Alex"))
        .unwrap();
    let a11 = rt.runtime().value_of("a11").unwrap();
    assert_eq!(
        rt.runtime().display(&a11),
        r#"[1, 2, {name: "Alex", age: 1, say: "Hello"}]"#
    );
}

#[test]
fn total_allocations_survive_collection() {
    let mut rt = TestRuntime::mark_sweep();
    rt.run(&[
        Stmt::var("a", Expr::object([("x", n(1.0)), ("y", n(2.0))])),
        Stmt::var("b", n(3.0)),
    ])
    .unwrap();
    assert_eq!(rt.variables_count().unwrap(), 4.0);

    assert!(rt.runtime().remove_binding("a").is_some());
    assert_eq!(rt.variables_count().unwrap(), 1.0);
    rt.check(&Expr::call("gb_total_allocations", []), &n(4.0))
        .unwrap();
}

#[test]
fn explicit_collection_reports_freed_slots() {
    let mut rt = TestRuntime::mark_sweep();
    rt.run(&[Stmt::Eval(Expr::array([n(1.0), n(2.0)]))]).unwrap();
    assert_eq!(rt.variables_count().unwrap(), 3.0);

    rt.check(&Expr::call("gb_collect", []), &n(3.0)).unwrap();
    assert_eq!(rt.variables_count().unwrap(), 0.0);
}

#[test]
fn collection_is_a_no_op_when_disabled() {
    let mut rt = TestRuntime::new();
    rt.run(&[Stmt::Eval(Expr::array([n(1.0), n(2.0)]))]).unwrap();
    rt.check(&Expr::call("gb_collect", []), &n(0.0)).unwrap();
    assert_eq!(rt.variables_count().unwrap(), 3.0);
}
