use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::CompileError;

pub trait ShaderCompiler {
    /// Compiles one shader source into `output`. Must not return before the
    /// compilation has finished.
    fn compile(&mut self, source: &Path, output: &Path) -> Result<(), CompileError>;
}

/// Runs `glslangValidator -V <source> -o <output>` and waits for it. Output
/// and diagnostics of the child go straight to our stdout and stderr.
#[derive(Clone, Debug)]
pub struct GlslangValidator {
    path: PathBuf,
}

impl GlslangValidator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShaderCompiler for GlslangValidator {
    fn compile(&mut self, source: &Path, output: &Path) -> Result<(), CompileError> {
        let status = Command::new(&self.path)
            .arg("-V")
            .arg(source)
            .arg("-o")
            .arg(output)
            .status()
            .map_err(|error| CompileError::Spawn {
                compiler: self.path.clone(),
                source: error,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(CompileError::Failed(status))
        }
    }
}
