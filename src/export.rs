use crate::error::Result;
use crate::schema::PromptTemplate;
use chrono::NaiveDate;

pub fn export_file_name(date: NaiveDate) -> String {
    format!("goodi_library_{}.json", date.format("%Y-%m-%d"))
}

/// Serialize the prompt library as a pretty-printed JSON array.
pub fn export_prompts(prompts: &[PromptTemplate]) -> Result<String> {
    Ok(serde_json::to_string_pretty(prompts)?)
}

pub fn import_prompts(json: &str) -> Result<Vec<PromptTemplate>> {
    Ok(serde_json::from_str(json)?)
}

pub fn library_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(Vec<PromptTemplate>)
}

pub fn library_schema_as_json() -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&library_json_schema())
}
