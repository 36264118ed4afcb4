use std::path::PathBuf;

use build::{build_shaders, BuildConfig};
use env_logger::Env;
use eyre::WrapErr;
use structopt::StructOpt;

/// Compiles GLSL shaders to SPIR-V, skipping shaders whose output is newer
/// than their source.
#[derive(Debug, StructOpt)]
#[structopt(name = "shaderbake")]
struct Options {
    /// Directory searched recursively for .vert, .frag and .comp files
    #[structopt(parse(from_os_str))]
    shader_source_dir: PathBuf,
    /// Directory receiving the compiled .spv files, mirroring the source tree
    #[structopt(parse(from_os_str))]
    shader_output_dir: PathBuf,
    /// Path of the glslangValidator executable
    #[structopt(parse(from_os_str))]
    glsl_validator: PathBuf,
}

impl From<Options> for BuildConfig {
    fn from(options: Options) -> Self {
        BuildConfig::new(
            options.shader_source_dir,
            options.shader_output_dir,
            options.glsl_validator,
        )
    }
}

fn main() -> eyre::Result<()> {
    stable_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    let options = Options::from_args();
    build_shaders(options.into()).wrap_err("an error occurred during shader compilation")?;
    Ok(())
}
