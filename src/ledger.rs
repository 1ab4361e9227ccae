//! Ledger totals and transaction helpers.

use crate::error::{CofounderError, Result};
use crate::schema::{Product, Transaction, TransactionKind, TransactionStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
}

/// Fold transactions into income, expense and net totals.
///
/// Duplicate ids are summed like any other entry; uniqueness is the ledger
/// owner's job.
pub fn aggregate(transactions: &[Transaction]) -> LedgerTotals {
    let (total_income, total_expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), tx| match tx.kind {
                TransactionKind::Income => (income + tx.amount, expense),
                TransactionKind::Expense => (income, expense + tx.amount),
            });

    LedgerTotals {
        total_income,
        total_expense,
        net: total_income - total_expense,
    }
}

/// Display ordering: newest date first, log order kept for equal dates.
pub fn sorted_by_date_desc(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// The first `n` entries of a newest-first log.
pub fn recent(transactions: &[Transaction], n: usize) -> &[Transaction] {
    &transactions[..n.min(transactions.len())]
}

impl Transaction {
    /// Quick-add an income entry priced from a catalog product.
    pub fn from_product(id: impl Into<String>, date: NaiveDate, product: &Product) -> Self {
        Self {
            id: id.into(),
            date,
            kind: TransactionKind::Income,
            description: product.name.clone(),
            amount: product.price,
            status: TransactionStatus::Paid,
            customer: None,
            product_id: Some(product.id.clone()),
        }
    }
}

/// A transaction being filled in by the user before it is logged.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub description: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub customer: Option<String>,
    pub product_id: Option<String>,
}

impl NewTransaction {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            kind: TransactionKind::Income,
            description: String::new(),
            amount: 0.0,
            status: TransactionStatus::Paid,
            customer: None,
            product_id: None,
        }
    }

    /// Prefill description, amount and kind from a product.
    pub fn select_product(&mut self, product: &Product) {
        self.product_id = Some(product.id.clone());
        self.description = product.name.clone();
        self.amount = product.price;
        self.kind = TransactionKind::Income;
    }

    pub fn build(self, id: impl Into<String>) -> Result<Transaction> {
        if self.description.trim().is_empty() {
            return Err(CofounderError::Validation(
                "Transaction description is required".to_string(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(CofounderError::Validation(format!(
                "Transaction amount must be positive, got {}",
                self.amount
            )));
        }

        Ok(Transaction {
            id: id.into(),
            date: self.date,
            kind: self.kind,
            description: self.description,
            amount: self.amount,
            status: self.status,
            customer: self.customer.filter(|c| !c.trim().is_empty()),
            product_id: self.product_id,
        })
    }
}
