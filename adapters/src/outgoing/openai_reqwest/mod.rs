pub mod chat_completions;
pub mod vision_client_openai;
