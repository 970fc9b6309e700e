use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern for {label} failed to compile: {source}")]
    Compile {
        label: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("pattern for {label} failed at runtime: {source}")]
    Runtime {
        label: String,
        #[source]
        source: fancy_regex::Error,
    },
}
