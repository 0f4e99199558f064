//! Prompt Command Handlers

use std::sync::Arc;

use crate::application::commands::{TransformPromptCommand, TransformPromptResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::LlmClientPort;
use crate::domain::build_transform_prompt;

/// TransformPrompt Handler - 用户描述 → 音乐提示词
pub struct TransformPromptHandler {
    llm_client: Arc<dyn LlmClientPort>,
}

impl TransformPromptHandler {
    pub fn new(llm_client: Arc<dyn LlmClientPort>) -> Self {
        Self { llm_client }
    }

    pub async fn handle(
        &self,
        cmd: TransformPromptCommand,
    ) -> Result<TransformPromptResponse, ApplicationError> {
        if cmd.user_input.trim().is_empty() {
            return Err(ApplicationError::invalid_request("user_input is required"));
        }

        tracing::info!(input_len = cmd.user_input.len(), "Transforming user input");

        let full_prompt = build_transform_prompt(&cmd.user_input);
        let generated = self.llm_client.complete(&full_prompt).await?;

        let transformed_prompt = generated.trim().to_string();
        if transformed_prompt.is_empty() {
            return Err(ApplicationError::EmptyGeneration);
        }

        tracing::info!(prompt = %transformed_prompt, "Prompt transformed");

        Ok(TransformPromptResponse { transformed_prompt })
    }
}
