use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{info, warn};

use crate::config::SweepConfig;
use crate::sweep::plan::Invocation;

/// How a single tuning run ended. Recorded for logging only; the sweep
/// continues whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Succeeded,
    /// Non-zero exit. `code` is `None` when the child was killed by a signal.
    Failed { code: Option<i32> },
    SpawnFailed(String),
}

impl LaunchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Succeeded)
    }
}

#[allow(async_fn_in_trait)]
pub trait TuningLauncher {
    /// Runs the tuning program for `invocation` and waits for it to finish.
    async fn launch(&mut self, invocation: &Invocation) -> LaunchOutcome;
}

/// Launches the tuning program as a child process sharing the driver's
/// stdin, stdout and stderr.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    tuner_script: PathBuf,
    interpreter: Option<String>,
}

impl ProcessLauncher {
    pub fn new(tuner_script: PathBuf, interpreter: Option<String>) -> Self {
        Self {
            tuner_script,
            interpreter,
        }
    }

    pub fn from_config(config: &SweepConfig) -> Self {
        Self::new(config.tuner_script.clone(), config.interpreter.clone())
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut command = match &self.interpreter {
            Some(interpreter) => {
                let mut command = Command::new(interpreter);
                command.arg(&self.tuner_script);
                command
            }
            None => Command::new(&self.tuner_script),
        };
        command
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl TuningLauncher for ProcessLauncher {
    async fn launch(&mut self, invocation: &Invocation) -> LaunchOutcome {
        let status = self.command(invocation).status().await;

        match status {
            Ok(status) if status.success() => {
                info!(
                    model = %invocation.model,
                    dataset = %invocation.dataset,
                    "Tuning run succeeded"
                );
                LaunchOutcome::Succeeded
            }
            Ok(status) => {
                warn!(
                    model = %invocation.model,
                    dataset = %invocation.dataset,
                    code = ?status.code(),
                    "Tuning run failed"
                );
                LaunchOutcome::Failed {
                    code: status.code(),
                }
            }
            Err(err) => {
                warn!(
                    model = %invocation.model,
                    dataset = %invocation.dataset,
                    program = %self.tuner_script.display(),
                    ?err,
                    "Failed to spawn tuning run"
                );
                LaunchOutcome::SpawnFailed(err.to_string())
            }
        }
    }
}
