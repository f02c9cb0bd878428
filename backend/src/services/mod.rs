pub mod canned;
pub mod chat_service;
pub mod knowledge_service;
pub mod language;
pub mod llm;
pub mod prompt;

pub use canned::CannedResponder;
pub use chat_service::ChatService;
pub use knowledge_service::{KnowledgeSource, SqlKnowledgeSource};
pub use language::Language;
pub use llm::{AzureOpenAIClient, ChatModel, LLMError};
