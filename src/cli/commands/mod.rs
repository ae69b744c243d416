//! CLI command implementations

pub mod clean;
pub mod install;
pub mod path;
pub mod status;

pub use clean::execute as clean;
pub use install::execute as install;
pub use path::execute as path;
pub use status::execute as status;
