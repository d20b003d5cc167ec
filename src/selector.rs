//! ContentSelector: the tab-and-action state container.
//!
//! Owns the active tab and three result slots. Tab switches never touch
//! the slots; run actions fill a slot with a reference into the constant
//! tables in [`crate::content::catalog`]. Nothing here can fail.

use tracing::{debug, warn};

use crate::content::catalog::{
    self, ConcolicRunResult, HoareResult, SymbolicRunResult, CONCOLIC_RUN, SYMBOLIC_RUN,
};
use crate::content::{HoareScenario, Tab};

/// Per-session UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSelector {
    active_tab: Tab,
    symbolic_result: Option<&'static SymbolicRunResult>,
    concolic_result: Option<&'static ConcolicRunResult>,
    hoare_result: Option<&'static HoareResult>,
}

impl ContentSelector {
    /// Fresh session: Introduction tab, all slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session starting on a given tab.
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..Self::default()
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn symbolic_result(&self) -> Option<&'static SymbolicRunResult> {
        self.symbolic_result
    }

    pub fn concolic_result(&self) -> Option<&'static ConcolicRunResult> {
        self.concolic_result
    }

    pub fn hoare_result(&self) -> Option<&'static HoareResult> {
        self.hoare_result
    }

    /// Make `tab` the visible panel. Result slots are left as they are.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!(from = %self.active_tab, to = %tab, "select tab");
        self.active_tab = tab;
    }

    /// Fill the symbolic slot. Idempotent.
    pub fn run_symbolic(&mut self) -> &'static SymbolicRunResult {
        debug!(paths = SYMBOLIC_RUN.paths.len(), "run symbolic");
        self.symbolic_result = Some(&SYMBOLIC_RUN);
        &SYMBOLIC_RUN
    }

    /// Fill the concolic slot. Idempotent.
    pub fn run_concolic(&mut self) -> &'static ConcolicRunResult {
        debug!(executions = CONCOLIC_RUN.executions.len(), "run concolic");
        self.concolic_result = Some(&CONCOLIC_RUN);
        &CONCOLIC_RUN
    }

    /// Look up a scenario by id and store the record.
    ///
    /// An id outside {linear, conditional, loop} empties the slot and
    /// returns `None`; it never errors.
    pub fn verify_hoare(&mut self, scenario: &str) -> Option<&'static HoareResult> {
        match scenario.parse::<HoareScenario>() {
            Ok(s) => Some(self.verify_hoare_scenario(s)),
            Err(e) => {
                warn!("{e}; clearing Hoare result");
                self.hoare_result = None;
                None
            }
        }
    }

    /// Typed form of [`verify_hoare`](Self::verify_hoare).
    pub fn verify_hoare_scenario(&mut self, scenario: HoareScenario) -> &'static HoareResult {
        debug!(%scenario, "verify hoare");
        let result = catalog::hoare_result(scenario);
        self.hoare_result = Some(result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let sel = ContentSelector::new();
        assert_eq!(sel.active_tab(), Tab::Introduction);
        assert!(sel.symbolic_result().is_none());
        assert!(sel.concolic_result().is_none());
        assert!(sel.hoare_result().is_none());
    }

    #[test]
    fn with_tab_sets_start_tab_only() {
        let sel = ContentSelector::with_tab(Tab::Hoare);
        assert_eq!(sel.active_tab(), Tab::Hoare);
        assert!(sel.hoare_result().is_none());
    }

    #[test]
    fn run_from_any_tab() {
        let mut sel = ContentSelector::new();
        sel.run_concolic();
        assert_eq!(sel.active_tab(), Tab::Introduction);
        assert!(sel.concolic_result().is_some());
    }

    #[test]
    fn run_returns_table_reference() {
        let mut sel = ContentSelector::new();
        let r = sel.run_symbolic();
        assert!(std::ptr::eq(r, &SYMBOLIC_RUN));
        assert!(std::ptr::eq(sel.symbolic_result().unwrap(), &SYMBOLIC_RUN));
    }

    #[test]
    fn verify_replaces_previous_scenario() {
        let mut sel = ContentSelector::new();
        sel.verify_hoare("loop");
        sel.verify_hoare("linear");
        assert_eq!(sel.hoare_result().unwrap().postcondition, "{ z = 2x + 10 }");
    }

    #[test]
    fn unknown_scenario_clears_slot() {
        let mut sel = ContentSelector::new();
        sel.verify_hoare("conditional");
        assert!(sel.hoare_result().is_some());

        assert!(sel.verify_hoare("unknown-key").is_none());
        assert!(sel.hoare_result().is_none());
    }

    #[test]
    fn unknown_scenario_leaves_other_slots() {
        let mut sel = ContentSelector::new();
        sel.run_symbolic();
        sel.run_concolic();
        sel.verify_hoare("");
        assert!(sel.symbolic_result().is_some());
        assert!(sel.concolic_result().is_some());
    }
}
