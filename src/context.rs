//! System-context assembly.
//!
//! The system context is the only steering mechanism sent to the model, so it
//! is rebuilt from scratch on every call and must be byte-for-byte stable for
//! the same inputs.

use crate::ledger::{aggregate, recent};
use crate::prompts::*;
use crate::schema::{BusinessProfile, Transaction, TransactionKind};

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Render the business profile and optional role instruction into the
/// system instruction for one request.
pub fn compose_system_context(profile: &BusinessProfile, instruction: Option<&str>) -> String {
    let mut context = String::new();

    context.push_str(CONTEXT_OPENING);
    context.push_str("\n\n");

    context.push_str(CONTEXT_GENOME_HEADER);
    context.push('\n');
    context.push_str(&format!(
        "- Name: {}\n",
        or_fallback(&profile.name, UNSPECIFIED)
    ));
    context.push_str(&format!(
        "- Business ID (Y-tunnus): {}\n",
        or_fallback(&profile.business_id, UNSPECIFIED)
    ));
    context.push_str(&format!(
        "- Industry: {}\n",
        or_fallback(&profile.industry, GENERAL_INDUSTRY)
    ));
    context.push_str(&format!("- Preferred Tone: {}\n", profile.tone.as_str()));
    context.push_str(&format!(
        "- Language Preference: {}\n",
        profile.language.as_str()
    ));

    if let Some(instruction) = instruction.map(str::trim).filter(|s| !s.is_empty()) {
        context.push('\n');
        context.push_str(&format!("{} {}\n", ROLE_INSTRUCTION_LABEL, instruction));
    }

    context.push('\n');
    context.push_str(GENERAL_RULES);
    context.push('\n');

    context
}

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Income",
        TransactionKind::Expense => "Expense",
    }
}

/// Build the "AI CFO" request from the ledger: totals plus the most recent
/// entries of the (newest-first) transaction log.
pub fn financial_insight_prompt(transactions: &[Transaction]) -> String {
    let totals = aggregate(transactions);

    let mut snapshot = String::from("Current Financial Snapshot:\n");
    snapshot.push_str(&format!("- Total Income: {:.2} EUR\n", totals.total_income));
    snapshot.push_str(&format!(
        "- Total Expenses: {:.2} EUR\n",
        totals.total_expense
    ));
    snapshot.push_str(&format!("- Net Profit: {:.2} EUR\n", totals.net));
    snapshot.push_str("\nRecent Transactions:\n");

    for tx in recent(transactions, INSIGHT_RECENT_TRANSACTIONS) {
        snapshot.push_str(&format!(
            "- {}: {} ({}) - {:.2} EUR\n",
            tx.date.format("%Y-%m-%d"),
            tx.description,
            kind_label(tx.kind),
            tx.amount
        ));
    }

    format!("{}\n\nData: {}", CFO_INSIGHT_INSTRUCTIONS, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Language, Tone, TransactionStatus};
    use chrono::NaiveDate;

    fn profile() -> BusinessProfile {
        BusinessProfile {
            name: "Pajakko Oy".to_string(),
            business_id: "1234567-8".to_string(),
            industry: "Carpentry".to_string(),
            tone: Tone::Professional,
            language: Language::Finnish,
        }
    }

    #[test]
    fn test_context_is_deterministic() {
        let a = compose_system_context(&profile(), Some("Act as a lawyer."));
        let b = compose_system_context(&profile(), Some("Act as a lawyer."));
        assert_eq!(a, b);
    }

    #[test]
    fn test_context_contains_profile_block() {
        let context = compose_system_context(&profile(), None);
        assert!(context.starts_with(CONTEXT_OPENING));
        assert!(context.contains("- Name: Pajakko Oy\n"));
        assert!(context.contains("- Business ID (Y-tunnus): 1234567-8\n"));
        assert!(context.contains("- Industry: Carpentry\n"));
        assert!(context.contains("- Preferred Tone: Professional\n"));
        assert!(context.contains("- Language Preference: Finnish\n"));
        assert!(context.trim_end().ends_with("refer to Vero.fi."));
        assert!(!context.contains(ROLE_INSTRUCTION_LABEL));
    }

    #[test]
    fn test_context_fallbacks_for_empty_fields() {
        let context = compose_system_context(&BusinessProfile::default(), None);
        assert!(context.contains("- Name: Unspecified\n"));
        assert!(context.contains("- Business ID (Y-tunnus): Unspecified\n"));
        assert!(context.contains("- Industry: General\n"));
    }

    #[test]
    fn test_role_instruction_only_when_present() {
        let with = compose_system_context(&profile(), Some("Draft under Finnish law."));
        assert!(with.contains("SPECIALIZED ROLE INSTRUCTION: Draft under Finnish law.\n"));

        let blank = compose_system_context(&profile(), Some("  "));
        assert_eq!(blank, compose_system_context(&profile(), None));
    }

    #[test]
    fn test_tone_change_only_touches_tone_line() {
        let base = compose_system_context(&profile(), None);
        let mut casual = profile();
        casual.tone = Tone::Casual;
        let changed = compose_system_context(&casual, None);

        let diff: Vec<(&str, &str)> = base
            .lines()
            .zip(changed.lines())
            .filter(|(a, b)| a != b)
            .collect();

        assert_eq!(base.lines().count(), changed.lines().count());
        assert_eq!(
            diff,
            vec![("- Preferred Tone: Professional", "- Preferred Tone: Casual")]
        );
    }

    #[test]
    fn test_financial_insight_prompt() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let txs: Vec<Transaction> = (0..7)
            .map(|i| Transaction {
                id: i.to_string(),
                date,
                kind: if i % 2 == 0 {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                },
                description: format!("Entry {}", i),
                amount: 10.0,
                status: TransactionStatus::Paid,
                customer: None,
                product_id: None,
            })
            .collect();

        let prompt = financial_insight_prompt(&txs);
        assert!(prompt.starts_with("Act as a CFO"));
        assert!(prompt.contains("- Total Income: 40.00 EUR"));
        assert!(prompt.contains("- Total Expenses: 30.00 EUR"));
        assert!(prompt.contains("- Net Profit: 10.00 EUR"));
        assert!(prompt.contains("- 2024-05-02: Entry 4 (Income) - 10.00 EUR"));
        assert!(!prompt.contains("Entry 5"));
    }
}
