pub mod invariants;
pub mod reports;

use colored::Colorize;
use room_allocation_core::AllocationConfig;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::{ScenarioCtx, TestScenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub edits_applied: usize,
    pub edits_rejected: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    config: AllocationConfig,
    max_edits: usize,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(config: AllocationConfig, max_edits: usize, verbose: bool) -> Self {
        Self {
            config,
            max_edits,
            verbose,
        }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut durations = Vec::new();
        let mut edits_applied = 0;
        let mut edits_rejected = 0;

        for i in 0..iterations {
            let ctx = ScenarioCtx {
                seed: seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX)),
                max_edits: self.max_edits,
                config: self.config.clone(),
                verbose: self.verbose,
            };
            let start_time = Instant::now();
            match scenario.run(&ctx) {
                Ok(summary) => {
                    successes += 1;
                    edits_applied += summary.edits_applied;
                    edits_rejected += summary.edits_rejected;
                    let duration = start_time.elapsed();
                    durations.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{} passed ({duration:?}) applied:{} rejected:{}",
                            i + 1,
                            iterations,
                            summary.edits_applied,
                            summary.edits_rejected
                        );
                    }
                }
                Err(err) => {
                    let message =
                        format!("Iteration {} (seed {}): {err:#}", i + 1, ctx.seed);
                    log::debug!("{} failed: {message}", scenario.key);
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            i + 1,
                            iterations,
                            message.clone().red()
                        );
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            edits_applied,
            edits_rejected,
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{ScenarioSummary, get_scenario};
    use anyhow::bail;

    fn failing(_: &ScenarioCtx) -> anyhow::Result<ScenarioSummary> {
        bail!("always fails")
    }

    #[test]
    fn passing_scenario_runs_every_iteration_per_seed() {
        let tester = LogicTester::new(AllocationConfig::default(), 40, false);
        let scenario = get_scenario("random-walk").expect("registered");
        let results = tester.run_scenario(&scenario, &[1, 2], 3);
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(result.passed, "{:?}", result.failures);
            assert_eq!(result.successful_iterations, 3);
            assert_eq!(result.edits_applied + result.edits_rejected, 120);
        }
    }

    #[test]
    fn failures_carry_iteration_and_seed() {
        let tester = LogicTester::new(AllocationConfig::default(), 1, false);
        let scenario = TestScenario::new("broken", "Broken", failing);
        let results = tester.run_scenario(&scenario, &[10], 2);
        let result = &results[0];
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[1].contains("Iteration 2 (seed 11)"));
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn result_serializes_duration_as_micros() {
        let result = ScenarioResult {
            scenario_name: "x".into(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            edits_applied: 0,
            edits_rejected: 0,
            failures: Vec::new(),
            average_duration: Duration::from_micros(250),
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["average_duration"], 250);
    }
}
