use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable `{0}` must be set")]
    Missing(&'static str),

    #[error("environment variable `{name}` is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("failed to read secret file `{path}`: {source}")]
    SecretFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
