use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use log::{error, info, warn};
use walkdir::WalkDir;

use crate::{
    freshness, normalize, output_path, BuildError, GlslangValidator, ShaderCompiler, ShaderStage,
};

pub const DEFAULT_SUFFIX: &str = "spv";

#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    pub compiler: PathBuf,
    pub suffix: String,
}

impl BuildConfig {
    /// Both roots are normalized lexically.
    pub fn new(
        source_root: impl AsRef<Path>,
        output_root: impl AsRef<Path>,
        compiler: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_root: normalize(source_root),
            output_root: normalize(output_root),
            compiler: compiler.into(),
            suffix: DEFAULT_SUFFIX.into(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub compiled: usize,
    pub up_to_date: usize,
}

impl BuildReport {
    pub fn visited(&self) -> usize {
        self.compiled + self.up_to_date
    }
}

pub struct BuildWalker {
    config: BuildConfig,
}

impl BuildWalker {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Compiles every missing or stale shader below the source root, one at a
    /// time. The first compiler failure ends the walk. Directories that cannot
    /// be read, including a missing source root, are skipped.
    pub fn run<C: ShaderCompiler + ?Sized>(
        &self,
        compiler: &mut C,
    ) -> Result<BuildReport, BuildError> {
        let config = &self.config;
        create_output_dir(&config.output_root)?;
        let mut report = BuildReport::default();
        for entry in WalkDir::new(&config.source_root).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!("skipping unreadable source path: {}", error);
                    continue;
                }
            };
            // Directory symlinks are not followed, but must not be taken for shaders either.
            if entry.file_type().is_dir() || entry.path().is_dir() {
                continue;
            }
            let source = entry.path();
            if ShaderStage::from_path(source).is_none() {
                continue;
            }
            let output = output_path(
                &config.source_root,
                &config.output_root,
                source,
                &config.suffix,
            )?;
            if let Some(parent) = output.parent() {
                create_output_dir(parent)?;
            }
            if !freshness(source, &output)?.needs_compile() {
                info!("up to date: {}", source.display());
                report.up_to_date += 1;
                continue;
            }
            info!("compiling {} -> {}", source.display(), output.display());
            if let Err(error) = compiler.compile(source, &output) {
                error!("error compiling shader {}: {}", source.display(), error);
                return Err(BuildError::Compile {
                    path: source.to_owned(),
                    source: error,
                });
            }
            report.compiled += 1;
        }
        Ok(report)
    }
}

/// Runs the walker with `glslangValidator` found at `config.compiler`.
pub fn build_shaders(config: BuildConfig) -> Result<BuildReport, BuildError> {
    info!("shader source directory: {}", config.source_root.display());
    info!("shader output directory: {}", config.output_root.display());
    info!("using glslangValidator at: {}", config.compiler.display());
    info!("starting shader compilation");
    let mut compiler = GlslangValidator::new(config.compiler.clone());
    let report = BuildWalker::new(config).run(&mut compiler)?;
    info!(
        "compiled {} shader(s), {} up to date",
        report.compiled, report.up_to_date
    );
    Ok(report)
}

fn create_output_dir(path: &Path) -> Result<(), BuildError> {
    create_dir_all(path).map_err(|error| BuildError::CreateOutputDir {
        path: path.to_owned(),
        source: error,
    })
}
