use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use xpr::{Config, Options};

#[derive(Parser)]
#[command(
    name = "xpr",
    version,
    about = "Type check, patch and optimize an expression",
    long_about = "Parses an expression, checks it against a type table, rewrites \
                  overloaded operators into calls and prints the optimized tree."
)]
struct Cli {
    /// Expression to compile (read from stdin when omitted)
    expr: Option<String>,

    /// Read the expression from a file instead
    #[arg(short, long, conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// JSON file with the type table and operator table (implies --check)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run the type checker
    #[arg(long)]
    check: bool,

    /// Skip operator patching
    #[arg(long)]
    no_patch: bool,

    /// Skip optimization
    #[arg(long)]
    no_optimize: bool,

    /// Print the tree structure instead of expression text
    #[arg(long)]
    dump: bool,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn setup_logging(verbose: u8, quiet: bool, log_level: Option<LogLevel>) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stdout carries the compiled expression, logs go to stderr
    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}

fn read_source(cli: &Cli) -> io::Result<(String, String)> {
    if let Some(expr) = &cli.expr {
        return Ok(("<expr>".to_string(), expr.clone()));
    }
    if let Some(path) = &cli.file {
        return Ok((path.display().to_string(), std::fs::read_to_string(path)?));
    }
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(("<stdin>".to_string(), source))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet, cli.log_level);

    let (filename, source) = match read_source(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: cannot read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let config = match &cli.config {
        Some(path) => match xpr::load_config(path) {
            Ok(config) => config,
            Err(err) => {
                xpr::report(&filename, &source, &err);
                return ExitCode::FAILURE;
            }
        },
        None => Config::new(),
    };

    let options = Options {
        check: cli.check || cli.config.is_some(),
        patch: !cli.no_patch,
        optimize: !cli.no_optimize,
    };

    match xpr::compile(source.trim_end(), &config, &options) {
        Ok(compiled) => {
            if cli.dump {
                println!("{:#?}", compiled.tree);
            } else {
                println!("{}", compiled.tree);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            xpr::report(&filename, &source, &err);
            ExitCode::FAILURE
        }
    }
}
