use rtrack_core::enums::StatusCategory;
use serde::de::DeserializeOwned;

/// Parse an enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Status categories are stored upper case; accept any case on input.
pub fn parse_category(raw: &str) -> anyhow::Result<StatusCategory> {
    let json = format!("\"{}\"", raw.trim().to_ascii_uppercase());
    serde_json::from_str(&json)
        .map_err(|error| anyhow::anyhow!("invalid category '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use rtrack_core::enums::{CatalogTable, StatusCategory};

    use super::{parse_category, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let table: CatalogTable = parse_enum("teams", "table").expect("table should parse");
        assert_eq!(table, CatalogTable::Teams);
    }

    #[test]
    fn category_is_case_insensitive() {
        assert_eq!(parse_category("qa").unwrap(), StatusCategory::Qa);
        assert_eq!(parse_category("TICKET").unwrap(), StatusCategory::Ticket);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<CatalogTable>("tables", "table").expect_err("should fail");
        assert!(err.to_string().contains("invalid table 'tables'"));
    }

    #[test]
    fn category_error_echoes_user_input() {
        let err = parse_category("done").expect_err("should fail");
        let message = err.to_string();
        assert!(message.contains("invalid category 'done'"), "{message}");
        assert!(!message.contains("'DONE'"), "{message}");
    }
}
