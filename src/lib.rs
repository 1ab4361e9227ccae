//! # Goodi Co-Founder
//!
//! The core of a "digital co-founder" for Finnish micro-enterprises: a library of
//! reusable AI prompts, a small bookkeeping ledger, and the pipeline that turns a
//! prompt template plus the company's profile into a request for a hosted model.
//!
//! ## Core Concepts
//!
//! - **Placeholder**: a `[Name]` token inside a prompt template, filled in by the user
//! - **Company Genome**: the [`BusinessProfile`] injected into every AI request
//! - **System Context**: the fixed-shape instruction built from the genome and an
//!   optional role instruction
//! - **Ledger**: newest-first log of income and expense transactions
//! - **Workspace**: owns the application state and persists it after every change
//!
//! ## Example
//!
//! ```rust,ignore
//! use goodi_cofounder::*;
//!
//! let mut workspace = Workspace::open(FileStore::new(".goodi"))?;
//! workspace.set_api_key("AIza...")?;
//!
//! let template = workspace.prompt("A_02").unwrap().clone();
//! let mut session = PromptSession::new(template);
//! session.set_variable("Total Amount", "1255")?;
//!
//! let client = CompletionClient::new(GeminiClient::new());
//! let answer = session
//!     .run(&client, workspace.api_key(), workspace.genome())
//!     .await?;
//! ```

pub mod completion;
pub mod context;
pub mod error;
pub mod export;
pub mod ledger;
pub mod prompts;
pub mod roles;
pub mod schema;
pub mod seed;
pub mod state;
pub mod template;
pub mod workspace;

#[cfg(feature = "gemini")]
pub mod llm;

pub use completion::{
    CompletionClient, CompletionConfig, CompletionRequest, PromptSession, TextGenerator,
    DEFAULT_MODEL, DEFAULT_TEMPERATURE, EMPTY_RESPONSE_FALLBACK,
};
pub use context::{compose_system_context, financial_insight_prompt};
pub use error::{CofounderError, Result};
pub use export::{export_file_name, export_prompts, import_prompts};
pub use ledger::{aggregate, recent, sorted_by_date_desc, LedgerTotals, NewTransaction};
pub use roles::{prompts_for_role, search_prompts, RoleFilter, VirtualRole, ROLE_CATEGORIES};
pub use schema::*;
pub use seed::{default_genome, seed_library, seed_products, seed_transactions};
pub use state::{
    parse_state, serialize_state, AppState, FileStore, MemoryStore, StateStore, StoredState,
    STORAGE_KEY,
};
pub use template::{placeholders, substitute, VariableBindings};
pub use workspace::Workspace;

#[cfg(feature = "gemini")]
pub use llm::GeminiClient;
