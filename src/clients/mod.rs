pub mod completion_client;
pub mod llm_client;

pub use completion_client::CompletionClient;
pub use llm_client::OpenAiCompletionClient;
