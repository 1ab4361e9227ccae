//! Request/response contract with the hosted text-generation model.

use crate::context::{compose_system_context, financial_insight_prompt};
use crate::error::{CofounderError, Result};
use crate::schema::{BusinessProfile, PromptTemplate, Transaction};
use crate::template::VariableBindings;
use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Fixed sampling temperature; favours precise answers over creative ones.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const EMPTY_RESPONSE_FALLBACK: &str = "No response generated.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub model: String,
    pub temperature: f32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl CompletionConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// One outbound call: the prompt as primary content, the composed context as
/// the system-level instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub model: String,
    pub user_prompt: String,
    pub system_instruction: String,
    pub temperature: f32,
}

/// A provider able to answer a [`CompletionRequest`].
///
/// Implementations perform exactly one round trip and report provider
/// failures as [`CofounderError::CompletionFailed`] carrying the provider's
/// own message.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, api_key: &str, request: &CompletionRequest) -> Result<String>;
}

pub struct CompletionClient<G> {
    generator: G,
    config: CompletionConfig,
}

impl<G: TextGenerator> CompletionClient<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            config: CompletionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CompletionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Send `user_prompt` with `system_context` and return the model's text.
    ///
    /// Fails with `MissingCredential` before any I/O when the key is empty.
    /// No retries, no timeout, no streaming.
    pub async fn complete(
        &self,
        api_key: &str,
        user_prompt: &str,
        system_context: &str,
    ) -> Result<String> {
        if api_key.trim().is_empty() {
            return Err(CofounderError::MissingCredential);
        }

        let request = CompletionRequest {
            model: self.config.model.clone(),
            user_prompt: user_prompt.to_string(),
            system_instruction: system_context.to_string(),
            temperature: self.config.temperature,
        };

        debug!(
            "Requesting completion from {} ({} prompt chars)",
            request.model,
            request.user_prompt.len()
        );

        match self.generator.generate(api_key, &request).await {
            Ok(text) if text.trim().is_empty() => Ok(EMPTY_RESPONSE_FALLBACK.to_string()),
            Ok(text) => Ok(text),
            Err(CofounderError::CompletionFailed(message)) => {
                warn!("Completion failed: {}", message);
                Err(CofounderError::CompletionFailed(message))
            }
            Err(e) => {
                warn!("Completion failed: {}", e);
                Err(CofounderError::CompletionFailed(e.to_string()))
            }
        }
    }

    /// Substitute the bindings into a template and send it with the
    /// business context and the template's role instruction.
    pub async fn run_template(
        &self,
        api_key: &str,
        template: &PromptTemplate,
        bindings: &VariableBindings,
        profile: &BusinessProfile,
    ) -> Result<String> {
        let final_prompt = bindings.apply(&template.text);
        let context = compose_system_context(profile, template.role_instruction());
        self.complete(api_key, &final_prompt, &context).await
    }

    /// Ask the model for a short CFO-style review of the ledger.
    pub async fn financial_insight(
        &self,
        api_key: &str,
        profile: &BusinessProfile,
        transactions: &[Transaction],
    ) -> Result<String> {
        let prompt = financial_insight_prompt(transactions);
        let context = compose_system_context(profile, None);
        self.complete(api_key, &prompt, &context).await
    }
}

struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| CofounderError::RequestInFlight)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// One prompt card: a template, the values typed into it and a busy flag.
///
/// At most one completion is outstanding per session. Separate sessions share
/// nothing and may run concurrently.
#[derive(Debug)]
pub struct PromptSession {
    template: PromptTemplate,
    bindings: VariableBindings,
    in_flight: AtomicBool,
}

impl PromptSession {
    pub fn new(template: PromptTemplate) -> Self {
        let bindings = VariableBindings::for_template(&template.text);
        Self {
            template,
            bindings,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Switch to another template; entered values are discarded.
    pub fn set_template(&mut self, template: PromptTemplate) {
        self.bindings.reset(&template.text);
        self.template = template;
    }

    pub fn bindings(&self) -> &VariableBindings {
        &self.bindings
    }

    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.bindings.set(name, value)
    }

    pub fn final_prompt(&self) -> String {
        self.bindings.apply(&self.template.text)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn run<G: TextGenerator>(
        &self,
        client: &CompletionClient<G>,
        api_key: &str,
        profile: &BusinessProfile,
    ) -> Result<String> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        client
            .run_template(api_key, &self.template, &self.bindings, profile)
            .await
    }
}
