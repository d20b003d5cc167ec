//! Behavioural properties of the content selector, through the public API.

use verifguide::content::catalog::{self, CONCOLIC_RUN, SYMBOLIC_RUN};
use verifguide::content::{HoareScenario, Tab};
use verifguide::selector::ContentSelector;

#[test]
fn select_tab_reads_back_for_every_tab() {
    let mut sel = ContentSelector::new();
    for tab in Tab::ALL {
        sel.select_tab(tab);
        assert_eq!(sel.active_tab(), tab);
    }
}

#[test]
fn any_tab_reachable_from_any_tab() {
    for from in Tab::ALL {
        for to in Tab::ALL {
            let mut sel = ContentSelector::with_tab(from);
            sel.select_tab(to);
            assert_eq!(sel.active_tab(), to);
        }
    }
}

#[test]
fn run_symbolic_is_idempotent() {
    let mut sel = ContentSelector::new();
    sel.run_symbolic();
    let first = sel.symbolic_result().unwrap().clone();
    sel.run_symbolic();
    let second = sel.symbolic_result().unwrap();
    assert_eq!(&first, second);

    assert_eq!(second.paths.len(), 4);
    assert_eq!(second.paths[0].constraints, ["x > 0", "y > 0"]);
    assert_eq!(second.paths[3].constraints, ["x ≤ 0", "y ≤ 0"]);
}

#[test]
fn run_symbolic_points_at_table() {
    let mut sel = ContentSelector::new();
    assert!(std::ptr::eq(sel.run_symbolic(), &SYMBOLIC_RUN));
}

#[test]
fn run_concolic_is_idempotent() {
    let mut sel = ContentSelector::new();
    let first = sel.run_concolic();
    let second = sel.run_concolic();
    assert_eq!(first, second);
    assert!(std::ptr::eq(second, &CONCOLIC_RUN));
    assert!(std::ptr::eq(sel.concolic_result().unwrap(), &CONCOLIC_RUN));
}

#[test]
fn verify_hoare_same_key_is_idempotent() {
    let mut sel = ContentSelector::new();
    let first = sel.verify_hoare("loop").unwrap();
    let second = sel.verify_hoare("loop").unwrap();
    assert_eq!(first, second);
    let table = catalog::hoare_result(HoareScenario::Loop);
    assert!(std::ptr::eq(second, table));
    assert!(std::ptr::eq(sel.hoare_result().unwrap(), table));
}

#[test]
fn run_concolic_shape() {
    let mut sel = ContentSelector::new();
    let result = sel.run_concolic();
    assert_eq!(result.executions.len(), 4);
    assert_eq!(result.executions[0].output, 8);
    assert!(result.executions[3].new_constraints.is_empty());
    assert_eq!(sel.concolic_result(), Some(result));
}

#[test]
fn verify_hoare_invariants() {
    let mut sel = ContentSelector::new();
    assert_eq!(sel.verify_hoare("linear").unwrap().invariant, None);
    assert_eq!(
        sel.verify_hoare("loop").unwrap().invariant,
        Some("{ sum = i(i-1)/2 && i ≤ n }")
    );
    assert!(sel.verify_hoare("conditional").is_some());
}

#[test]
fn verify_hoare_unknown_key_is_empty() {
    let mut sel = ContentSelector::new();
    assert!(sel.verify_hoare("unknown-key").is_none());
    assert!(sel.hoare_result().is_none());
}

#[test]
fn typed_and_string_lookup_agree() {
    for scenario in HoareScenario::ALL {
        let mut a = ContentSelector::new();
        let mut b = ContentSelector::new();
        a.verify_hoare(scenario.id());
        b.verify_hoare_scenario(scenario);
        assert_eq!(a, b);
    }
}

#[test]
fn tab_switch_preserves_results() {
    let mut sel = ContentSelector::new();
    sel.run_symbolic();
    sel.run_concolic();
    sel.verify_hoare("loop");
    let snapshot = sel.clone();

    sel.select_tab(Tab::Tools);
    sel.select_tab(Tab::Symbolic);

    assert_eq!(sel.symbolic_result(), snapshot.symbolic_result());
    assert_eq!(sel.concolic_result(), snapshot.concolic_result());
    assert_eq!(sel.hoare_result(), snapshot.hoare_result());
}

#[test]
fn actions_do_not_change_tab() {
    let mut sel = ContentSelector::with_tab(Tab::Tools);
    sel.run_symbolic();
    sel.run_concolic();
    sel.verify_hoare("linear");
    assert_eq!(sel.active_tab(), Tab::Tools);
}
