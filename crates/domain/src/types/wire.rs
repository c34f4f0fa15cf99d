//! Helpers for reading loosely typed directory and store records
//!
//! Live APIs disagree on key names and on whether ids are strings or numbers,
//! and some send several spellings of one field in the same record. Records
//! are read into wire structs with every spelling as its own optional field,
//! then collapsed by a fixed precedence.

use serde_json::Value;

/// Text form of a scalar key: trimmed strings, numbers, or a Mongo
/// `{"$oid": "..."}` object. Blank or other shapes give `None`.
pub(crate) fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(raw) => {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Object(mut object) => text(object.remove("$oid")),
        _ => None,
    }
}

/// First present value in precedence order.
pub(crate) fn first_text<const N: usize>(candidates: [Option<Value>; N]) -> Option<String> {
    candidates.into_iter().find_map(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_strings_numbers_and_object_ids() {
        assert_eq!(text(Some(json!(" O1 "))), Some("O1".into()));
        assert_eq!(text(Some(json!(17))), Some("17".into()));
        assert_eq!(text(Some(json!({"$oid": "64fa"}))), Some("64fa".into()));
        assert_eq!(text(Some(json!(""))), None);
        assert_eq!(text(Some(json!([1]))), None);
        assert_eq!(text(None), None);
    }

    #[test]
    fn precedence_skips_blank_candidates() {
        assert_eq!(first_text([Some(json!("  ")), None, Some(json!("REV"))]), Some("REV".into()));
        assert_eq!(first_text([Some(json!("A")), Some(json!("B"))]), Some("A".into()));
    }
}
