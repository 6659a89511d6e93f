use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("type '{fqn}' not found")]
    #[diagnostic(
        code(smith::not_found),
        help("check that '{fqn}' is exported by the installed version of '{package}'")
    )]
    NotFound { fqn: String, package: String },

    #[error("expected '{fqn}' to be an interface, but got: {kind}")]
    #[diagnostic(code(smith::kind_mismatch))]
    KindMismatch { fqn: String, kind: String },

    #[error("unable to load catalog for '{package}': {}", join_attempts(.attempts))]
    #[diagnostic(
        code(smith::catalog_not_found),
        help("install '{package}' or run from the directory that contains its catalog")
    )]
    AggregateLoad {
        package: String,
        #[related]
        attempts: Vec<Error>,
    },

    #[error("cannot find package '{package}' (searched {} locations)", .searched.len())]
    #[diagnostic(code(smith::package_not_resolved))]
    PackageNotResolved {
        package: String,
        searched: Vec<PathBuf>,
    },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog '{path}'")]
    #[diagnostic(code(smith::parse_error))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog '{path}' belongs to '{found}', not '{expected}'")]
    #[diagnostic(code(smith::package_mismatch))]
    PackageMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("inheritance cycle: {}", .chain.join(" -> "))]
    #[diagnostic(code(smith::inheritance_cycle))]
    InheritanceCycle { chain: Vec<String> },

    #[error("invalid qualified name '{fqn}': {reason}")]
    #[diagnostic(code(smith::invalid_fqn))]
    InvalidQualifiedName { fqn: String, reason: &'static str },
}

fn join_attempts(attempts: &[Error]) -> String {
    attempts
        .iter()
        .map(|e| match std::error::Error::source(e) {
            Some(source) => format!("{e}: {source}"),
            None => e.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
