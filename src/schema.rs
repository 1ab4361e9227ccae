use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplate {
    #[schemars(description = "Unique identifier, generated by the caller (e.g. a timestamp)")]
    pub id: String,

    pub title: String,

    #[schemars(description = "Library category such as 'Legal', 'Admin', 'Sales' or 'Strategy'")]
    pub category: String,

    #[schemars(
        description = "Prompt body. May embed placeholders written as [Name] that are filled in before the prompt is sent."
    )]
    pub text: String,

    #[serde(default)]
    pub is_favorite: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Hidden persona/tone instruction appended to the system context")]
    pub system_instruction: Option<String>,
}

impl PromptTemplate {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            text: text.into(),
            is_favorite: false,
            system_instruction: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// The role instruction to send along, if one is actually set.
    pub fn role_instruction(&self) -> Option<&str> {
        self.system_instruction
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Authoritative,
    Friendly,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Authoritative => "Authoritative",
            Tone::Friendly => "Friendly",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
pub enum Language {
    #[default]
    Finnish,
    English,
    Swedish,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Finnish => "Finnish",
            Language::English => "English",
            Language::Swedish => "Swedish",
        }
    }
}

/// The "company genome": structured description of the business that is
/// injected into every AI request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub name: String,

    /// Finnish Business ID (Y-tunnus).
    #[serde(default, alias = "y_tunnus")]
    pub business_id: String,

    #[serde(default)]
    pub industry: String,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub enum ProductType {
    Service,
    Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Unit price in EUR.
    pub price: f64,
    /// VAT rate in percent, e.g. 25.5.
    pub vat_rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
pub enum TransactionStatus {
    #[default]
    Paid,
    Pending,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    /// Always a positive magnitude; the sign is implied by `kind`.
    pub amount: f64,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_uses_type_key() {
        let tx = Transaction {
            id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            kind: TransactionKind::Expense,
            description: "Coworking desk".to_string(),
            amount: 180.0,
            status: TransactionStatus::Pending,
            customer: None,
            product_id: None,
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "Expense");
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["status"], "Pending");
        assert!(json.get("customer").is_none());
        assert!(json.get("productId").is_none());
    }

    #[test]
    fn test_genome_accepts_legacy_business_id_key() {
        let json = r#"{
            "name": "Pajakko Oy",
            "y_tunnus": "1234567-8",
            "industry": "Carpentry",
            "tone": "Friendly",
            "language": "Swedish"
        }"#;

        let genome: BusinessProfile = serde_json::from_str(json).unwrap();
        assert_eq!(genome.business_id, "1234567-8");
        assert_eq!(genome.tone, Tone::Friendly);
        assert_eq!(genome.language, Language::Swedish);

        let out = serde_json::to_value(&genome).unwrap();
        assert_eq!(out["businessId"], "1234567-8");
    }

    #[test]
    fn test_prompt_role_instruction_ignores_blank() {
        let prompt = PromptTemplate::new("p", "Title", "General", "Hello")
            .with_system_instruction("   ");
        assert_eq!(prompt.role_instruction(), None);

        let prompt = prompt.with_system_instruction("Act as a lawyer.");
        assert_eq!(prompt.role_instruction(), Some("Act as a lawyer."));
    }

    #[test]
    fn test_prompt_deserializes_without_optional_fields() {
        let json = r#"{"id":"x","title":"T","category":"Sales","text":"Hi [Name]"}"#;
        let prompt: PromptTemplate = serde_json::from_str(json).unwrap();
        assert!(!prompt.is_favorite);
        assert!(prompt.system_instruction.is_none());
    }
}
