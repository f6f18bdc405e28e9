use std::io::Write;

use tracing::{debug, warn};

use crate::config::SweepConfig;
use crate::sweep::launcher::TuningLauncher;
use crate::sweep::plan::{sweep_plan, Invocation};

const RULE: &str = "==================================================";

pub struct SweepRunner<L> {
    pub config: SweepConfig,
    pub launcher: L,
}

impl<L: TuningLauncher> SweepRunner<L> {
    pub fn new(config: SweepConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn plan(&self) -> Vec<Invocation> {
        sweep_plan(&self.config.models, &self.config.datasets)
    }

    /// Runs every planned invocation in order, one at a time, writing banners
    /// to `out`. Neither child outcomes nor banner write errors stop the sweep.
    /// Returns the number of invocations made.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> usize {
        let plan = self.plan();
        debug!(
            tuner = %self.config.tuner_script.display(),
            invocations = plan.len(),
            "Starting sweep"
        );

        for invocation in &plan {
            banner(
                out,
                &format!(
                    "Starting tuning: model {} on dataset {}",
                    invocation.model, invocation.dataset
                ),
            );

            let outcome = self.launcher.launch(invocation).await;
            debug!(success = outcome.is_success(), ?outcome, "Tuning run returned");

            banner(
                out,
                &format!(
                    "Finished tuning: model {} on dataset {}",
                    invocation.model, invocation.dataset
                ),
            );
        }

        banner(out, "Finished tuning all models and datasets");
        plan.len()
    }
}

fn banner<W: Write>(out: &mut W, message: &str) {
    let written = writeln!(out, "{}\n{}\n{}", RULE, message, RULE).and_then(|_| out.flush());
    if let Err(err) = written {
        warn!(%message, ?err, "Failed to write banner");
    }
}
