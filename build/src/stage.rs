use std::path::Path;

/// Pipeline stage of a shader source, recognised from its file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 3] = [Self::Vertex, Self::Fragment, Self::Compute];

    /// Matches on the end of the file name, so a file called just `.vert`
    /// counts as well. Returns `None` for anything else.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let name = path.as_ref().file_name()?.to_string_lossy();
        Self::ALL.iter().copied().find(|stage| {
            name.strip_suffix(stage.extension())
                .map_or(false, |stem| stem.ends_with('.'))
        })
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
            Self::Compute => "comp",
        }
    }
}
