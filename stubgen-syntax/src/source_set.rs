//! A serde-loadable collection of source units.

use std::{
    path::Path,
    str::FromStr,
};

use miette::NamedSource;
use serde::{Deserialize, Serialize};

use crate::{
    SourceUnit,
    error::{Error, Result, json_span},
};

/// The complete set of source units for one generator evaluation.
///
/// Hosts that embed the generator construct this in memory; the CLI loads it
/// from a JSON file exported by the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSet {
    #[serde(default)]
    pub units: Vec<SourceUnit>,
}

impl SourceSet {
    /// Create a source set from units.
    pub fn new(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }

    /// Open and parse a source set file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a source set, attributing errors to the given filename.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            let span = json_span(content, &e);
            Box::new(Error::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source: e,
            })
        })
    }
}

impl FromStr for SourceSet {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "<string>")
    }
}
