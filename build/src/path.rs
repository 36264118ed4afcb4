use std::path::{Component, Path, PathBuf};

use crate::BuildError;

/// Lexically normalizes `path`: drops `.` components and folds `..` into the
/// preceding component where there is one. The filesystem is not consulted.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            component => normalized.push(component.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Mirrors `source` from `source_root` into `output_root` and appends
/// `.{suffix}` to the file name, e.g. `src/a/b.vert` becomes
/// `out/a/b.vert.spv`.
pub fn output_path(
    source_root: &Path,
    output_root: &Path,
    source: &Path,
    suffix: &str,
) -> Result<PathBuf, BuildError> {
    let relative = source
        .strip_prefix(source_root)
        .ok()
        .filter(|relative| relative.file_name().is_some())
        .ok_or_else(|| BuildError::OutsideSourceRoot {
            path: source.to_owned(),
            root: source_root.to_owned(),
        })?;
    let mut output = output_root.join(relative).into_os_string();
    output.push(".");
    output.push(suffix);
    Ok(PathBuf::from(output))
}
