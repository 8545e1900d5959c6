use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use equatix::{EquationSolver, GeneratorConfig, validate_equation_length};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Equatix - Find pairs of equations that share no symbols
#[derive(Parser, Debug)]
#[command(name = "equatix")]
#[command(
    about = "Generate true arithmetic equations and print pairs whose symbols are disjoint"
)]
#[command(version)]
pub struct CliArgs {
    /// Number of symbols in each equation, excluding the equals sign
    #[arg(default_value_t = 7)]
    pub length: usize,

    /// Number of pairs to print
    #[arg(short = 'n', long, default_value_t = 10)]
    pub pairs: usize,

    /// Print every valid equation instead of pairs
    #[arg(long)]
    pub equations: bool,

    /// Run on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub length: usize,
    pub pairs: usize,
    pub equations_only: bool,
    pub generator: GeneratorConfig,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            length: args.length,
            pairs: args.pairs,
            equations_only: args.equations,
            generator: GeneratorConfig {
                parallel: !args.sequential,
            },
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_equation_length(args.length).context("Invalid equation length")?;

    Ok(args.into())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let solver = EquationSolver::with_config(config.generator);

    info!("Generating equations of length {}", config.length);
    let equations = solver
        .generate_valid_equations(config.length)
        .context("Failed to generate equations")?;

    if config.equations_only {
        for equation in &equations {
            println!("{}", equation);
        }
        return Ok(());
    }

    let pairs = solver
        .find_disjoint_pairs(&equations, config.length)
        .context("Failed to pair equations")?;

    if pairs.is_empty() {
        warn!("No disjoint pairs found");
        println!("None.");
        return Ok(());
    }

    for (first, second) in pairs.iter().take(config.pairs) {
        println!("{} {}", first, second);
    }
    Ok(())
}
