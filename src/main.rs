use clap::Parser;
use sota_sweep::{resolve_base_path, ProcessLauncher, SweepConfig, SweepRunner};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sota-sweep",
    about = "Tune every SOTA survival model on every dataset, one run at a time",
    version
)]
struct Cli {}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let _cli = Cli::parse();

    let exe = std::env::current_exe()
        .map_err(|err| format!("failed to locate driver executable: {}", err))?;
    let base_path = resolve_base_path(&exe)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = writeln!(out, "{}", base_path.display()).and_then(|_| out.flush()) {
        warn!(?err, "Failed to print base path");
    }

    let config = SweepConfig::load(&base_path);
    info!(
        tuner = %config.tuner_script.display(),
        interpreter = ?config.interpreter,
        invocations = config.invocation_count(),
        "Sweep configured"
    );

    let launcher = ProcessLauncher::from_config(&config);
    let mut runner = SweepRunner::new(config, launcher);
    runner.run(&mut out).await;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
