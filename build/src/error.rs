use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("could not start shader compiler {}", .compiler.display())]
    Spawn {
        compiler: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("shader compiler returned {0}")]
    Failed(ExitStatus),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("creating output directory {} failed", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reading metadata of {} failed", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not inside source directory {}", .path.display(), .root.display())]
    OutsideSourceRoot { path: PathBuf, root: PathBuf },
    #[error("compiling shader {} failed", .path.display())]
    Compile {
        path: PathBuf,
        #[source]
        source: CompileError,
    },
}
