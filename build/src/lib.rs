mod compiler;
mod error;
mod freshness;
mod path;
mod stage;
mod walker;

pub use compiler::*;
pub use error::*;
pub use freshness::*;
pub use path::*;
pub use stage::*;
pub use walker::*;
