use thiserror::Error;

#[derive(Error, Debug)]
pub enum HunterError {
    #[error("-f and -r flags cannot be used together. Use the -k flag to filter results.")]
    ConflictingFlags,

    #[error("GitHub token is required. Use 'export GITHUB_TOKEN=<token>' or '-t' flag.")]
    MissingCredential,

    #[error("Invalid repo format '{input}'. Please use the format user/repo.")]
    InvalidRepoFormat { input: String },

    #[error("Arguments are required. Use -help or -h for usage and examples.")]
    MissingArguments,

    #[error("{operation} failed: {source}")]
    Upstream {
        operation: String,
        #[source]
        source: Box<octocrab::Error>,
    },

    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    #[error("Configuration error at {path}: {message}")]
    Config { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HunterError>;
