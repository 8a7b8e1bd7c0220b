//! dtn-config: resolve, validate, and inspect the DT noise analysis
//! configuration handed to the `dtNoiseAnalysisMonitor` analyzer.

mod exit_codes;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dtn_common::Result;
use dtn_config::{
    load_overrides, override_schema, resolve_config, AnalyzerModule, ConfigPaths, ConfigSnapshot,
    NoiseAnalysisConfig, NoiseAnalysisOverrides,
};
use tracing::debug;

use crate::exit_codes::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "dtn-config",
    version,
    about = "DT noise analysis configuration tool"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the effective config and print the module declaration
    Show {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = DocumentFormat::Json)]
        format: DocumentFormat,
    },
    /// Load and validate an override file
    Validate {
        /// Override file (TOML or JSON)
        path: PathBuf,
    },
    /// Describe every analyzer parameter
    Describe {
        #[arg(long, value_enum, default_value_t = DescribeFormat::Text)]
        format: DescribeFormat,
    },
    /// Print the JSON Schema of override files
    Schema,
    /// Print a hashed snapshot of the resolved config
    Snapshot {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Override file; takes precedence over DTN_NOISE_CONFIG and the XDG file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Per-field overrides applied on top of the config file.
#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Hit-count threshold above which a cell is noisy
    #[arg(long, allow_negative_numbers = true)]
    noisy_cell_def: Option<i64>,

    /// Enable or disable the synchronous-noise pass
    #[arg(long, value_name = "BOOL")]
    do_synch_noise: Option<bool>,

    /// Upper bound on the synchronous-noise rate, in [0, 1]
    #[arg(long, allow_negative_numbers = true)]
    max_synch_noise_rate: Option<f64>,

    /// Minimum event count before certification
    #[arg(long, allow_negative_numbers = true)]
    n_events_cert: Option<i64>,
}

impl From<&OverrideArgs> for NoiseAnalysisOverrides {
    fn from(args: &OverrideArgs) -> Self {
        NoiseAnalysisOverrides {
            noisy_cell_def: args.noisy_cell_def,
            do_synch_noise: args.do_synch_noise,
            max_synch_noise_rate: args.max_synch_noise_rate,
            n_events_cert: args.n_events_cert,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Toml,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum DescribeFormat {
    Text,
    Json,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);
    debug!(command = ?cli.command, "starting");

    let code = match run(&cli.command) {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            debug!(code = err.code(), "command failed");
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    };
    code.into()
}

fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Show {
            source,
            overrides,
            format,
        } => run_show(source, overrides, *format),
        Commands::Validate { path } => run_validate(path),
        Commands::Describe { format } => run_describe(*format),
        Commands::Schema => run_schema(),
        Commands::Snapshot { source, overrides } => run_snapshot(source, overrides),
    }
}

fn resolve(source: &SourceArgs, overrides: &OverrideArgs) -> Result<dtn_config::ResolvedConfig> {
    let paths = ConfigPaths::from_env(source.config.clone());
    resolve_config(&paths, overrides.into())
}

fn run_show(source: &SourceArgs, overrides: &OverrideArgs, format: DocumentFormat) -> Result<()> {
    let resolved = resolve(source, overrides)?;
    let module = AnalyzerModule::dt_noise_analysis_monitor(resolved.config);
    let rendered = match format {
        DocumentFormat::Json => module.to_json()?,
        DocumentFormat::Toml => module.to_toml()?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn run_validate(path: &std::path::Path) -> Result<()> {
    let config = load_overrides(path)?.build()?;
    println!(
        "{}: ok (noisyCellDef={}, doSynchNoise={}, maxSynchNoiseRate={}, nEventsCert={})",
        path.display(),
        config.noisy_cell_def(),
        config.do_synch_noise(),
        config.max_synch_noise_rate(),
        config.n_events_cert()
    );
    Ok(())
}

fn run_describe(format: DescribeFormat) -> Result<()> {
    let descriptions = NoiseAnalysisConfig::describe();
    match format {
        DescribeFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&descriptions)?);
        }
        DescribeFormat::Text => {
            for d in &descriptions {
                let tracking = if d.tracked { "tracked" } else { "untracked" };
                println!(
                    "{:<18} {:<7} {:<10} default={:<6} {}",
                    d.name,
                    d.kind.to_string(),
                    tracking,
                    d.default.to_string(),
                    d.comment
                );
            }
        }
    }
    Ok(())
}

fn run_schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&override_schema())?);
    Ok(())
}

fn run_snapshot(source: &SourceArgs, overrides: &OverrideArgs) -> Result<()> {
    let resolved = resolve(source, overrides)?;
    let snapshot = ConfigSnapshot::capture(&resolved)?;
    println!("{}", snapshot.to_json()?);
    Ok(())
}
