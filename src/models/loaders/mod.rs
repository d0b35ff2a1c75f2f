pub mod project_loader;
pub mod source_loader;

pub use project_loader::{load_manifest, load_readme};
pub use source_loader::load_target;
