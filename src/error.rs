// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The tile count or naming configuration cannot produce a chain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{name} is already declared in module {module}")]
    DuplicateName { module: String, name: String },

    /// A module failed structural validation.
    #[error("invalid netlist: {0}")]
    InvalidNetlist(String),

    #[error("failed to emit netlist to {path:?}: {source}")]
    Emission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to register generated files in {path:?}: {source}")]
    Registration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
