mod openai_client;
mod scaffold_llm_client;

pub use openai_client::{OpenAiClient, create_llm_client};
pub use scaffold_llm_client::ScaffoldLlmClient;
