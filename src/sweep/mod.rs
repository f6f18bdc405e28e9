pub mod launcher;
pub mod plan;
pub mod runner;

pub use launcher::{LaunchOutcome, ProcessLauncher, TuningLauncher};
pub use plan::{sweep_plan, Invocation};
pub use runner::SweepRunner;
