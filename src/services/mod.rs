pub mod csv_processor;
pub mod llm_agent;

pub use llm_agent::LlmAgent;
