pub mod action;
pub mod market;
pub mod risk;
pub mod validation;

use crate::error::Result;
use crate::llm::TextModel;

use tracing::{info, warn};

pub trait Agent {
    fn name(&self) -> &str;
    fn system_prompt(&self) -> &str;

    /// Send a rendered prompt to the model under this agent's role.
    async fn run(&self, prompt: &str, model: &dyn TextModel) -> Result<String> {
        info!("🤖 [AGENT] Sending request to {} ({})...", self.name(), model.model_name());
        let response = model.generate(self.system_prompt(), prompt).await?;
        info!("🤖 [AGENT] Response from {}: {}", self.name(), response);
        Ok(response)
    }

    /// Like `run`, but a failed call becomes empty text so the parsers fall
    /// back to their defaults.
    async fn run_or_empty(&self, prompt: &str, model: &dyn TextModel) -> String {
        match self.run(prompt, model).await {
            Ok(response) => response,
            Err(e) => {
                warn!("⚠️ [AGENT] {} failed, continuing with defaults: {}", self.name(), e);
                String::new()
            }
        }
    }
}
