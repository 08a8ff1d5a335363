use anyhow::{Context, Result};
use clap::Parser;
use utopia_core::{init_logging, AppConfig};
use utopia_lib::app::probe::{EnvironmentProbe, NoProbe, SensorProbe};
use utopia_lib::app::{App, RunOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Stop after this many ticks (0 runs until extinction)
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// Fixed seed, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Time-scale multiplier, overriding the config file
    #[arg(long)]
    time_scale: Option<f64>,

    /// Ticks between report lines (0 disables them)
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Emit reports and the summary as JSON lines
    #[arg(long)]
    json: bool,

    /// Skip the hardware temperature probe
    #[arg(long)]
    no_probe: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = AppConfig::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;
    if let Some(ts) = args.time_scale {
        config.simulation.time_scale = ts;
    }

    let probe: &dyn EnvironmentProbe = if args.no_probe {
        &NoProbe
    } else {
        &SensorProbe
    };
    let options = RunOptions {
        max_ticks: (args.ticks > 0).then_some(args.ticks),
        report_every: args.report_every,
        json: args.json,
    };

    let mut app = App::new(config, args.seed, probe, options)?;
    let mut stdout = std::io::stdout().lock();
    let summary = app.run(&mut stdout)?;

    if args.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
