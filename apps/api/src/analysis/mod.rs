pub mod handlers;
pub mod interpreter;
pub mod prompts;
pub mod service;
