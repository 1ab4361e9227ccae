//! Persisted application state and its storage backends.

use crate::error::{CofounderError, Result};
use crate::schema::{BusinessProfile, Product, PromptTemplate, Transaction};
use crate::seed::{default_genome, seed_library, seed_products, seed_transactions};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Key the state document is stored under.
pub const STORAGE_KEY: &str = "goodi_app_data_v1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub api_key: String,
    pub genome: BusinessProfile,
    pub prompts: Vec<PromptTemplate>,
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            genome: default_genome(),
            prompts: seed_library(),
            products: seed_products(),
            transactions: seed_transactions(),
        }
    }
}

/// The stored document as found on disk, where older versions may lack
/// whole collections.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    pub api_key: Option<String>,
    pub genome: Option<BusinessProfile>,
    pub prompts: Option<Vec<PromptTemplate>>,
    pub products: Option<Vec<Product>>,
    pub transactions: Option<Vec<Transaction>>,
}

impl StoredState {
    /// Fill every missing field from its named default.
    pub fn migrate(self) -> AppState {
        if self.products.is_none() {
            debug!("Stored state has no products, using seed catalog");
        }
        if self.transactions.is_none() {
            debug!("Stored state has no transactions, using seed ledger");
        }

        AppState {
            api_key: self.api_key.unwrap_or_default(),
            genome: self.genome.unwrap_or_else(default_genome),
            prompts: self.prompts.unwrap_or_else(seed_library),
            products: self.products.unwrap_or_else(seed_products),
            transactions: self.transactions.unwrap_or_else(seed_transactions),
        }
    }
}

/// Parse a stored document, migrating older shapes.
pub fn parse_state(json: &str) -> Result<AppState> {
    let stored: StoredState = serde_json::from_str(json)
        .map_err(|e| CofounderError::MalformedStoredState(e.to_string()))?;
    Ok(stored.migrate())
}

pub fn serialize_state(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Where the state document lives between sessions.
pub trait StateStore {
    /// The raw document, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored document.
    fn save(&mut self, contents: &str) -> Result<()>;

    /// Keep a copy of a document that could not be parsed, apart from the
    /// live one, so the next save does not destroy it.
    fn backup(&mut self, contents: &str) -> Result<()>;
}

/// Keeps the document in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
    backup: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            backup: None,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn backup_contents(&self) -> Option<&str> {
        self.backup.as_deref()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn backup(&mut self, contents: &str) -> Result<()> {
        self.backup = Some(contents.to_string());
        Ok(())
    }
}

/// Stores the document as `<dir>/goodi_app_data_v1.json`, with unreadable
/// documents moved to `<dir>/goodi_app_data_v1.bak.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    backup_path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            path: dir.join(format!("{}.json", STORAGE_KEY)),
            backup_path: dir.join(format!("{}.bak.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn save(&mut self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        debug!("Saved state to {:?}", self.path);
        Ok(())
    }

    fn backup(&mut self, contents: &str) -> Result<()> {
        if let Some(parent) = self.backup_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.backup_path, contents)?;
        warn!("Kept unreadable state in {:?}", self.backup_path);
        Ok(())
    }
}
