use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Instruction sent as the system message when ANALYSIS_SYSTEM_PROMPT is unset.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a data analyst. Analyze the provided dataset, \
    summarizing notable patterns, distributions, and outliers across its columns. \
    Provide the analysis in a single, coherent paragraph.";

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub max_file_size: usize,
    pub port: u16,
    pub openai_key: String,
    pub openai_api_base: Option<String>,
    pub model: String,
    pub system_prompt: String,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        let openai_key = std::env::var("OPENAI_API_KEY")
            .map_err(|e| anyhow::anyhow!("Failed to load OPENAI_API_KEY: {}", e))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value {:?}: {}", raw, e))?,
            Err(_) => 3000,
        };

        Ok(Config {
            max_file_size: 10 * 1024 * 1024, // 10MB
            port,
            openai_key,
            openai_api_base: std::env::var("OPENAI_API_BASE").ok(),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            system_prompt: std::env::var("ANALYSIS_SYSTEM_PROMPT")
                .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string()),
        })
    }
}
