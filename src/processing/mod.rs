//! Text in, text out: clipboard filtering, context window, prompt assembly,
//! the model client and reply parsing.

pub mod cleaner;
pub mod context_buffer;
pub mod llm_client;
pub mod prompt_builder;
pub mod response_parser;
pub mod text_filter;
