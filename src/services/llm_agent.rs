use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
        CreateChatCompletionRequest, Role,
    },
    Client,
};

use crate::config::Config;
use crate::error::AppError;

const USER_PROMPT_PREFIX: &str = "Analyze the following dataset and provide key insights: ";

/// Thin wrapper around the completion API client. Constructed per request;
/// holds no state beyond the client configuration.
pub struct LlmAgent {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: String,
}

impl LlmAgent {
    pub fn new(config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.openai_key.clone());
        if let Some(base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(base.clone());
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// Send the serialized records to the completion API and return the first
    /// choice's message content verbatim. One system message, one user
    /// message, no retries.
    pub async fn analyze(&self, data_json: &str) -> Result<String, AppError> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: self.system_prompt.clone(),
                name: None,
                role: Role::System,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(format!(
                    "{}{}",
                    USER_PROMPT_PREFIX, data_json
                )),
                name: None,
                role: Role::User,
            }),
        ];

        let request = CreateChatCompletionRequest {
            model: self.model.clone(),
            messages,
            ..Default::default()
        };

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::OpenAI(e.to_string()))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::OpenAI("completion response contained no content".to_string()))
    }
}
