// Embedding providers

pub mod provider;
pub mod openai;

pub use provider::*;
pub use openai::*;
