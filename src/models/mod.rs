pub mod analysis;
pub mod context;
pub mod loaders;
pub mod target;

pub use analysis::{AnalysisResult, BatchOutput};
pub use context::{ProjectContext, ProjectManifest};
pub use loaders::load_target;
pub use target::AnalysisTarget;
