use anyhow::Result;
use room_allocation_core::AllocationConfig;

pub mod catalog;
pub mod random_walk;

/// Inputs shared by every scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub seed: u64,
    pub max_edits: usize,
    pub config: AllocationConfig,
    pub verbose: bool,
}

/// What a passing run did, for verbose output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioSummary {
    pub edits_applied: usize,
    pub edits_rejected: usize,
}

impl ScenarioSummary {
    pub const fn record(&mut self, applied: bool) {
        if applied {
            self.edits_applied += 1;
        } else {
            self.edits_rejected += 1;
        }
    }
}

pub type ScenarioCheck = fn(&ScenarioCtx) -> Result<ScenarioSummary>;

#[derive(Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    check: ScenarioCheck,
}

impl TestScenario {
    #[must_use]
    pub const fn new(key: &'static str, name: &'static str, check: ScenarioCheck) -> Self {
        Self { key, name, check }
    }

    /// # Errors
    /// Returns the first invariant or expectation the run violated.
    pub fn run(&self, ctx: &ScenarioCtx) -> Result<ScenarioSummary> {
        (self.check)(ctx)
    }
}

impl std::fmt::Debug for TestScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestScenario")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn all_scenarios() -> Vec<TestScenario> {
    let mut scenarios = catalog::catalog_scenarios();
    scenarios.push(random_walk::random_walk_scenario());
    scenarios
}

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = name.to_lowercase();
    all_scenarios()
        .into_iter()
        .find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        let listed = list_scenarios();
        assert_eq!(listed.len(), 8);
        for (key, name) in listed {
            let scenario = get_scenario(key).expect("listed scenario resolves");
            assert_eq!(scenario.name, name);
        }
        assert!(get_scenario("RANDOM-WALK").is_some());
        assert!(get_scenario("missing").is_none());
    }

    #[test]
    fn summary_counts_both_outcomes() {
        let mut summary = ScenarioSummary::default();
        summary.record(true);
        summary.record(false);
        summary.record(true);
        assert_eq!(summary.edits_applied, 2);
        assert_eq!(summary.edits_rejected, 1);
    }
}
