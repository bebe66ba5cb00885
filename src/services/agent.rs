// src/services/agent.rs
use std::sync::Arc;

use tracing::debug;

use crate::services::model_client::{ModelClient, ModelError};

/// Wraps the model client behind a single `handle_message` operation.
/// One instance is built at startup and shared across requests; it holds
/// no per-request state.
pub struct Agent {
    model: Arc<dyn ModelClient>,
    temperature: f32,
}

impl Agent {
    pub fn new(model: Arc<dyn ModelClient>, temperature: f32) -> Self {
        Self { model, temperature }
    }

    /// Formats the prompt, forwards it to the model, and trims the reply.
    pub async fn handle_message(&self, message: &str) -> Result<String, ModelError> {
        let prompt = build_prompt(message);
        debug!(temperature = self.temperature, "forwarding message to model");
        let reply = self.model.generate_text(&prompt, self.temperature).await?;
        Ok(reply.trim().to_string())
    }
}

fn build_prompt(message: &str) -> String {
    format!("You: {message}\nAgent:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct EchoModel {
        prompts: Mutex<Vec<String>>,
        reply: String,
    }

    #[async_trait]
    impl ModelClient for EchoModel {
        async fn generate_text(
            &self,
            prompt: &str,
            _temperature: f32,
        ) -> Result<String, ModelError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn prompt_has_fixed_shape() {
        assert_eq!(build_prompt("hi"), "You: hi\nAgent:");
        assert_eq!(build_prompt(""), "You: \nAgent:");
    }

    #[tokio::test]
    async fn reply_is_trimmed() {
        let model = Arc::new(EchoModel {
            prompts: Mutex::new(Vec::new()),
            reply: "  Hello there!  \n".to_string(),
        });
        let agent = Agent::new(model.clone(), 0.7);

        let reply = agent.handle_message("hi").await.unwrap();
        assert_eq!(reply, "Hello there!");
        assert_eq!(model.prompts.lock().unwrap().as_slice(), ["You: hi\nAgent:"]);
    }

    #[tokio::test]
    async fn model_error_propagates() {
        struct FailingModel;

        #[async_trait]
        impl ModelClient for FailingModel {
            async fn generate_text(
                &self,
                _prompt: &str,
                _temperature: f32,
            ) -> Result<String, ModelError> {
                Err(ModelError::Empty)
            }
        }

        let agent = Agent::new(Arc::new(FailingModel), 0.7);
        assert!(agent.handle_message("hi").await.is_err());
    }
}
