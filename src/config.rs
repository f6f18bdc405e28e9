use std::env;
use std::path::{Path, PathBuf};

use crate::paths::tuner_script_path;
use crate::{Dataset, SurvivalModel, SWEEP_DATASETS, SWEEP_MODELS};

/// Everything a sweep needs, fixed for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub models: Vec<SurvivalModel>,
    pub datasets: Vec<Dataset>,
    pub base_path: PathBuf,
    pub tuner_script: PathBuf,
    /// Program used to run the tuner script. `None` executes the script directly.
    pub interpreter: Option<String>,
}

impl SweepConfig {
    pub fn new(base_path: PathBuf) -> Self {
        let tuner_script = tuner_script_path(&base_path);
        Self {
            models: SWEEP_MODELS.to_vec(),
            datasets: SWEEP_DATASETS.to_vec(),
            base_path,
            tuner_script,
            interpreter: None,
        }
    }

    /// Builds the default sweep rooted at `base_path`, then applies
    /// `SWEEP_TUNER_PATH` and `SWEEP_INTERPRETER` from the environment.
    pub fn load(base_path: &Path) -> Self {
        let mut config = SweepConfig::new(base_path.to_path_buf());
        config.apply_env_overrides();
        config
    }

    pub fn with_lists(mut self, models: Vec<SurvivalModel>, datasets: Vec<Dataset>) -> Self {
        self.models = models;
        self.datasets = datasets;
        self
    }

    pub fn invocation_count(&self) -> usize {
        self.models.len() * self.datasets.len()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("SWEEP_TUNER_PATH") {
            if !path.trim().is_empty() {
                self.tuner_script = PathBuf::from(path.trim());
            }
        }
        if let Ok(interpreter) = env::var("SWEEP_INTERPRETER") {
            if !interpreter.trim().is_empty() {
                self.interpreter = Some(interpreter.trim().to_string());
            }
        }
    }
}
