//! The application controller: owns the state and writes it back after
//! every mutation.

use crate::error::{CofounderError, Result};
use crate::export::{export_file_name, export_prompts};
use crate::ledger::{aggregate, sorted_by_date_desc, LedgerTotals};
use crate::roles::{prompts_for_role, search_prompts, VirtualRole};
use crate::schema::{BusinessProfile, Product, PromptTemplate, Transaction};
use crate::state::{parse_state, serialize_state, AppState, StateStore};
use chrono::NaiveDate;
use log::{info, warn};

pub struct Workspace<S: StateStore> {
    state: AppState,
    store: S,
}

impl<S: StateStore> Workspace<S> {
    /// Load the stored document once. An unreadable document is copied aside
    /// with [`StateStore::backup`] and replaced by the default seed state.
    pub fn open(mut store: S) -> Result<Self> {
        let state = match store.load()? {
            None => {
                info!("No stored state found, starting from seed data");
                AppState::default()
            }
            Some(raw) => match parse_state(&raw) {
                Ok(state) => state,
                Err(e) => {
                    warn!("{}; falling back to seed data", e);
                    store.backup(&raw)?;
                    AppState::default()
                }
            },
        };

        Ok(Self { state, store })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self) -> Result<()> {
        let json = serialize_state(&self.state)?;
        self.store.save(&json)
    }

    // Settings

    pub fn api_key(&self) -> &str {
        &self.state.api_key
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) -> Result<()> {
        self.state.api_key = key.into().trim().to_string();
        self.save()
    }

    pub fn genome(&self) -> &BusinessProfile {
        &self.state.genome
    }

    pub fn save_genome(&mut self, genome: BusinessProfile) -> Result<()> {
        self.state.genome = genome;
        self.save()
    }

    // Prompt library

    pub fn prompts(&self) -> &[PromptTemplate] {
        &self.state.prompts
    }

    pub fn prompt(&self, id: &str) -> Option<&PromptTemplate> {
        self.state.prompts.iter().find(|p| p.id == id)
    }

    /// New prompts go to the top of the library.
    pub fn add_prompt(&mut self, prompt: PromptTemplate) -> Result<()> {
        if prompt.title.trim().is_empty()
            || prompt.text.trim().is_empty()
            || prompt.category.trim().is_empty()
        {
            return Err(CofounderError::Validation(
                "Prompt title, text and category are required".to_string(),
            ));
        }
        if self.prompt(&prompt.id).is_some() {
            return Err(CofounderError::Validation(format!(
                "Prompt id '{}' already exists",
                prompt.id
            )));
        }

        self.state.prompts.insert(0, prompt);
        self.save()
    }

    pub fn delete_prompt(&mut self, id: &str) -> Result<PromptTemplate> {
        let idx = self
            .state
            .prompts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found("Prompt", id))?;
        let removed = self.state.prompts.remove(idx);
        self.save()?;
        Ok(removed)
    }

    /// Flip the favorite flag; returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let prompt = self
            .state
            .prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Prompt", id))?;
        prompt.is_favorite = !prompt.is_favorite;
        let value = prompt.is_favorite;
        self.save()?;
        Ok(value)
    }

    pub fn prompts_for_role(&self, role: VirtualRole) -> Vec<&PromptTemplate> {
        prompts_for_role(&self.state.prompts, role)
    }

    pub fn search_prompts(&self, term: &str) -> Vec<&PromptTemplate> {
        search_prompts(&self.state.prompts, term)
    }

    /// File name and contents of the library export for `date`.
    pub fn export_library(&self, date: NaiveDate) -> Result<(String, String)> {
        Ok((export_file_name(date), export_prompts(&self.state.prompts)?))
    }

    // Products

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.state.products.iter().find(|p| p.id == id)
    }

    pub fn add_product(&mut self, product: Product) -> Result<()> {
        if product.name.trim().is_empty() {
            return Err(CofounderError::Validation(
                "Product name is required".to_string(),
            ));
        }
        check_amount("Product price", product.price)?;
        check_amount("Product VAT rate", product.vat_rate)?;

        self.state.products.push(product);
        self.save()
    }

    /// Transactions that reference the product are left as they are.
    pub fn delete_product(&mut self, id: &str) -> Result<Product> {
        let idx = self
            .state
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found("Product", id))?;
        let removed = self.state.products.remove(idx);
        self.save()?;
        Ok(removed)
    }

    // Ledger

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn transactions_by_date(&self) -> Vec<&Transaction> {
        sorted_by_date_desc(&self.state.transactions)
    }

    /// New entries go to the top of the log.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<()> {
        if transaction.description.trim().is_empty() {
            return Err(CofounderError::Validation(
                "Transaction description is required".to_string(),
            ));
        }
        check_amount("Transaction amount", transaction.amount)?;

        self.state.transactions.insert(0, transaction);
        self.save()
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<Transaction> {
        let idx = self
            .state
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| not_found("Transaction", id))?;
        let removed = self.state.transactions.remove(idx);
        self.save()?;
        Ok(removed)
    }

    pub fn totals(&self) -> LedgerTotals {
        aggregate(&self.state.transactions)
    }
}

/// Stored amounts must be finite; JSON has no encoding for NaN or infinity.
fn check_amount(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CofounderError::Validation(format!(
            "{} must be a finite, non-negative number, got {}",
            label, value
        )));
    }
    Ok(())
}

fn not_found(kind: &'static str, id: &str) -> CofounderError {
    CofounderError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ProductType, Tone, TransactionKind, TransactionStatus};
    use crate::seed::{seed_library, seed_products, seed_transactions};
    use crate::state::{FileStore, MemoryStore};

    fn fresh() -> Workspace<MemoryStore> {
        Workspace::open(MemoryStore::new()).unwrap()
    }

    fn stored(ws: &Workspace<MemoryStore>) -> AppState {
        parse_state(ws.store().contents().unwrap()).unwrap()
    }

    #[test]
    fn test_open_empty_store_uses_seed() {
        let ws = fresh();
        assert_eq!(ws.prompts(), seed_library().as_slice());
        assert_eq!(ws.products(), seed_products().as_slice());
        assert_eq!(ws.transactions(), seed_transactions().as_slice());
        assert_eq!(ws.api_key(), "");
    }

    #[test]
    fn test_open_malformed_store_recovers() {
        let ws = Workspace::open(MemoryStore::with_contents("{{{")).unwrap();
        assert_eq!(ws.state(), &AppState::default());
        assert_eq!(ws.store().backup_contents(), Some("{{{"));
    }

    #[test]
    fn test_malformed_document_is_kept_after_next_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(r#"{ "apiKey": "AIza-user", "prompts": 42 }"#).unwrap();

        let mut ws = Workspace::open(FileStore::new(dir.path())).unwrap();
        ws.set_api_key("AIza-new").unwrap();

        let backup = std::fs::read_to_string(ws.store().backup_path()).unwrap();
        assert!(backup.contains("AIza-user"));
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let mut ws = fresh();
        ws.set_api_key("AIza-user").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            let tx = Transaction {
                id: "T_bad".to_string(),
                date,
                kind: TransactionKind::Income,
                description: "Broken".to_string(),
                amount,
                status: TransactionStatus::Paid,
                customer: None,
                product_id: None,
            };
            assert!(matches!(
                ws.add_transaction(tx),
                Err(CofounderError::Validation(_))
            ));

            let product = Product {
                id: "P_bad".to_string(),
                name: "Broken".to_string(),
                product_type: ProductType::Service,
                price: amount,
                vat_rate: 25.5,
            };
            assert!(matches!(
                ws.add_product(product),
                Err(CofounderError::Validation(_))
            ));
        }

        let product = Product {
            id: "P_bad".to_string(),
            name: "Broken".to_string(),
            product_type: ProductType::Service,
            price: 10.0,
            vat_rate: f64::NAN,
        };
        assert!(matches!(
            ws.add_product(product),
            Err(CofounderError::Validation(_))
        ));

        assert!(ws.totals().net.is_finite());
        let reopened = Workspace::open(ws.store().clone()).unwrap();
        assert_eq!(reopened.api_key(), "AIza-user");
        assert_eq!(reopened.transactions(), seed_transactions().as_slice());
        assert_eq!(reopened.store().backup_contents(), None);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut ws = fresh();

        ws.set_api_key("  AIza-key ").unwrap();
        assert_eq!(stored(&ws).api_key, "AIza-key");

        let mut genome = ws.genome().clone();
        genome.name = "Pajakko Oy".to_string();
        genome.tone = Tone::Authoritative;
        ws.save_genome(genome.clone()).unwrap();
        assert_eq!(stored(&ws).genome, genome);

        ws.add_prompt(PromptTemplate::new("new", "Mine", "General", "Hi [Name]"))
            .unwrap();
        assert_eq!(stored(&ws).prompts[0].id, "new");

        assert!(ws.toggle_favorite("new").unwrap());
        assert!(stored(&ws).prompts[0].is_favorite);

        ws.delete_prompt("new").unwrap();
        assert!(stored(&ws).prompts.iter().all(|p| p.id != "new"));
    }

    #[test]
    fn test_add_prompt_requires_fields_and_unique_id() {
        let mut ws = fresh();
        let err = ws
            .add_prompt(PromptTemplate::new("x", "", "General", "text"))
            .unwrap_err();
        assert!(matches!(err, CofounderError::Validation(_)));

        let err = ws
            .add_prompt(PromptTemplate::new("L_01", "Dup", "Legal", "text"))
            .unwrap_err();
        assert!(matches!(err, CofounderError::Validation(_)));
        assert!(ws.store().contents().is_none());
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let mut ws = fresh();
        assert!(matches!(
            ws.delete_prompt("nope"),
            Err(CofounderError::NotFound { kind: "Prompt", .. })
        ));
        assert!(matches!(
            ws.toggle_favorite("nope"),
            Err(CofounderError::NotFound { .. })
        ));
        assert!(matches!(
            ws.delete_transaction("nope"),
            Err(CofounderError::NotFound { kind: "Transaction", .. })
        ));
    }

    #[test]
    fn test_product_delete_does_not_cascade() {
        let mut ws = fresh();
        ws.add_product(Product {
            id: "P_99".to_string(),
            name: "Workshop".to_string(),
            product_type: ProductType::Service,
            price: 800.0,
            vat_rate: 25.5,
        })
        .unwrap();
        assert_eq!(ws.products().last().unwrap().id, "P_99");

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let product = ws.product("P_99").unwrap().clone();
        ws.add_transaction(Transaction::from_product("T_99", date, &product))
            .unwrap();

        ws.delete_product("P_99").unwrap();
        assert!(ws.product("P_99").is_none());
        assert_eq!(ws.transactions()[0].product_id.as_deref(), Some("P_99"));
    }

    #[test]
    fn test_ledger_totals_and_ordering() {
        let mut ws = Workspace::open(MemoryStore::with_contents(
            r#"{ "apiKey": "", "transactions": [] }"#,
        ))
        .unwrap();

        let tx = |id: &str, kind: TransactionKind, amount: f64, day: u32| Transaction {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            kind,
            description: id.to_string(),
            amount,
            status: TransactionStatus::Paid,
            customer: None,
            product_id: None,
        };

        ws.add_transaction(tx("a", TransactionKind::Income, 100.0, 3)).unwrap();
        ws.add_transaction(tx("b", TransactionKind::Expense, 40.0, 9)).unwrap();
        ws.add_transaction(tx("c", TransactionKind::Income, 20.0, 1)).unwrap();

        let ids: Vec<&str> = ws.transactions().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        let by_date: Vec<&str> = ws
            .transactions_by_date()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(by_date, vec!["b", "a", "c"]);

        let totals = ws.totals();
        assert_eq!(totals.total_income, 120.0);
        assert_eq!(totals.total_expense, 40.0);
        assert_eq!(totals.net, 80.0);
    }

    #[test]
    fn test_export_library() {
        let ws = fresh();
        let (name, json) = ws
            .export_library(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
            .unwrap();
        assert_eq!(name, "goodi_library_2025-01-31.json");
        assert_eq!(crate::export::import_prompts(&json).unwrap(), seed_library());
    }

    #[test]
    fn test_file_backed_workspace_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut ws = Workspace::open(FileStore::new(dir.path())).unwrap();
        ws.set_api_key("AIza-file").unwrap();
        ws.toggle_favorite("L_01").unwrap();

        let reopened = Workspace::open(FileStore::new(dir.path())).unwrap();
        assert_eq!(reopened.api_key(), "AIza-file");
        assert!(reopened.prompt("L_01").unwrap().is_favorite);
    }
}
