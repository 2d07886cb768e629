//! Expression compiler front end.
//!
//! Source text goes through four stages, each a separate crate:
//! parse (`parser`), type check and operator patching (`checker`), and
//! optimization (`optimizer`). [`compile`] runs them in that order.

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

pub use checker::{CheckError, Config};
pub use optimizer::Stats;
pub use parser::{Node, ParseError, Type};

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} parse error(s)", .0.len())]
    Parse(Vec<ParseError>),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("cannot read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    ConfigFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which stages [`compile`] runs after parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub check: bool,
    pub patch: bool,
    pub optimize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            check: true,
            patch: true,
            optimize: true,
        }
    }
}

/// Result of a successful [`compile`]
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    pub tree: Node,
    /// Root type, when the checker ran
    pub ty: Option<Type>,
    /// Optimizer rewrites, when the optimizer ran
    pub stats: Option<Stats>,
}

pub fn compile(source: &str, config: &Config, options: &Options) -> Result<Compiled> {
    let mut tree = parser::parse(source).map_err(Error::Parse)?;
    debug!(tree = %tree, "parsed");

    let ty = if options.check {
        Some(checker::check(&mut tree, config)?)
    } else {
        None
    };

    if options.patch {
        checker::patch_operators(&mut tree, config);
    }

    let stats = options.optimize.then(|| optimizer::optimize(&mut tree));
    if let Some(stats) = &stats {
        info!(
            folded = stats.folded,
            sets = stats.sets,
            range_checks = stats.range_checks,
            ranges_expanded = stats.ranges_expanded,
            "optimized"
        );
    }

    Ok(Compiled { tree, ty, stats })
}

/// Load a JSON [`Config`]
pub fn load_config(path: &Path) -> Result<Config> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::ConfigFormat {
        path: display,
        source,
    })
}

/// Print `error` to stderr, with source excerpts where it has a span
pub fn report(filename: &str, source: &str, error: &Error) {
    match error {
        Error::Parse(errors) => parser::report_errors(filename, source, errors),
        Error::Check(error) => checker::report_check_error(filename, source, error),
        other => eprintln!("error: {}", other),
    }
}
