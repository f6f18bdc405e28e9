pub mod config;
pub mod paths;
pub mod sweep;

use std::fmt;

pub use config::SweepConfig;
pub use paths::{resolve_base_path, tuner_script_path};
pub use sweep::{
    sweep_plan, Invocation, LaunchOutcome, ProcessLauncher, SweepRunner, TuningLauncher,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurvivalModel {
    Cox,
    CoxBoost,
    CoxNet,
    Rsf,
    Dcm,
    Dcph,
    Dsm,
    BayCox,
    BayMtlr,
}

/// Models tuned by a default sweep, in sweep order.
pub const SWEEP_MODELS: [SurvivalModel; 8] = [
    SurvivalModel::Cox,
    SurvivalModel::CoxBoost,
    SurvivalModel::CoxNet,
    SurvivalModel::Rsf,
    SurvivalModel::Dcm,
    SurvivalModel::Dsm,
    SurvivalModel::BayCox,
    SurvivalModel::BayMtlr,
];

impl SurvivalModel {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cox" => Some(SurvivalModel::Cox),
            "coxboost" => Some(SurvivalModel::CoxBoost),
            "coxnet" => Some(SurvivalModel::CoxNet),
            "rsf" => Some(SurvivalModel::Rsf),
            "dcm" => Some(SurvivalModel::Dcm),
            "dcph" => Some(SurvivalModel::Dcph),
            "dsm" => Some(SurvivalModel::Dsm),
            "baycox" => Some(SurvivalModel::BayCox),
            "baymtlr" => Some(SurvivalModel::BayMtlr),
            _ => None,
        }
    }

    /// Name passed to the tuning program's `--model` flag.
    pub fn as_str(self) -> &'static str {
        match self {
            SurvivalModel::Cox => "cox",
            SurvivalModel::CoxBoost => "coxboost",
            SurvivalModel::CoxNet => "coxnet",
            SurvivalModel::Rsf => "rsf",
            SurvivalModel::Dcm => "dcm",
            SurvivalModel::Dcph => "dcph",
            SurvivalModel::Dsm => "dsm",
            SurvivalModel::BayCox => "baycox",
            SurvivalModel::BayMtlr => "baymtlr",
        }
    }
}

impl fmt::Display for SurvivalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Support,
    Seer,
    Metabric,
    Flchain,
    Gbsg2,
    Whas500,
}

/// Datasets visited for every model, in sweep order.
pub const SWEEP_DATASETS: [Dataset; 4] = [
    Dataset::Support,
    Dataset::Seer,
    Dataset::Metabric,
    Dataset::Flchain,
];

impl Dataset {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "SUPPORT" => Some(Dataset::Support),
            "SEER" => Some(Dataset::Seer),
            "METABRIC" => Some(Dataset::Metabric),
            "FLCHAIN" => Some(Dataset::Flchain),
            "GBSG2" => Some(Dataset::Gbsg2),
            "WHAS500" => Some(Dataset::Whas500),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Support => "SUPPORT",
            Dataset::Seer => "SEER",
            Dataset::Metabric => "METABRIC",
            Dataset::Flchain => "FLCHAIN",
            Dataset::Gbsg2 => "GBSG2",
            Dataset::Whas500 => "WHAS500",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
