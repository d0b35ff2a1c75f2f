pub mod context_builder;
pub mod prompt_composer;
pub mod response_normalizer;
pub mod result_sink;

pub use context_builder::ContextBuilder;
pub use prompt_composer::compose_prompt;
pub use response_normalizer::normalize;
pub use result_sink::ResultSink;
