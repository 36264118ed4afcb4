use std::{fs::metadata, io, path::Path, time::SystemTime};

use crate::BuildError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    Missing,
    Stale,
    UpToDate,
}

impl Freshness {
    pub fn needs_compile(self) -> bool {
        self != Self::UpToDate
    }
}

/// An output is stale when its source was modified strictly after it.
pub fn freshness(source: &Path, output: &Path) -> Result<Freshness, BuildError> {
    let output_modified = match modified(output) {
        Ok(time) => time,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Freshness::Missing),
        Err(error) => {
            return Err(BuildError::Metadata {
                path: output.to_owned(),
                source: error,
            })
        }
    };
    let source_modified = modified(source).map_err(|error| BuildError::Metadata {
        path: source.to_owned(),
        source: error,
    })?;
    if source_modified > output_modified {
        Ok(Freshness::Stale)
    } else {
        Ok(Freshness::UpToDate)
    }
}

fn modified(path: &Path) -> io::Result<SystemTime> {
    metadata(path)?.modified()
}
