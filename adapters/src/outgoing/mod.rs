pub mod filesystem;
pub mod image_rs;
pub mod openai_reqwest;
