//! Tolerant decoding for values typed in by hand on profile and posting forms.
//!
//! Nothing here fails on a well-formed JSON value: wrong types decode to the
//! empty or absent value instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::domain::LetterGrade;

/// Accepts a JSON number or a numeric string; anything else decodes to `None`.
pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(number_from_value))
}

/// Keeps strings only.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// A list of names. `null` is empty, a bare string is a one-entry list, and
/// non-string entries keep their JSON text so they still have to be matched.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(text_from_value)
            .collect(),
        Some(Value::String(text)) => vec![text],
        _ => Vec::new(),
    })
}

/// Subject to grade map. `null` entries are dropped, a non-object is empty.
pub(crate) fn grade_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, LetterGrade>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Object(entries)) => entries
            .into_iter()
            .filter(|(_, grade)| !grade.is_null())
            .map(|(subject, grade)| (subject, LetterGrade::from_value(&grade)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|value| value.is_finite())
}

/// Strings as written; any other value as its JSON text.
pub(crate) fn text_from_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "string_list")]
        names: Vec<String>,
        #[serde(default, deserialize_with = "grade_map")]
        grades: BTreeMap<String, LetterGrade>,
        #[serde(default, deserialize_with = "optional_text")]
        label: Option<String>,
    }

    fn sample(value: Value) -> Sample {
        serde_json::from_value(value).expect("lenient fields never fail")
    }

    #[test]
    fn numbers_and_numeric_strings_decode() {
        assert_eq!(number_from_value(&json!(3.6)), Some(3.6));
        assert_eq!(number_from_value(&json!(" 3.25 ")), Some(3.25));
        assert_eq!(number_from_value(&json!(42)), Some(42.0));
    }

    #[test]
    fn garbage_decodes_to_none() {
        assert_eq!(number_from_value(&json!("three point five")), None);
        assert_eq!(number_from_value(&json!("NaN")), None);
        assert_eq!(number_from_value(&json!(true)), None);
        assert_eq!(number_from_value(&json!({ "value": 3 })), None);
        assert_eq!(number_from_value(&Value::Null), None);
    }

    #[test]
    fn null_collections_decode_empty() {
        let decoded = sample(json!({ "names": null, "grades": null, "label": null }));
        assert!(decoded.names.is_empty());
        assert!(decoded.grades.is_empty());
        assert_eq!(decoded.label, None);
    }

    #[test]
    fn odd_collection_shapes_are_tolerated() {
        let decoded = sample(json!({
            "names": ["rust", null, 7],
            "grades": { "Math": "b", "Art": null, "Music": 2 },
            "label": 12
        }));
        assert_eq!(decoded.names, vec!["rust".to_string(), "7".to_string()]);
        assert_eq!(decoded.grades.get("Math"), Some(&LetterGrade::B));
        assert!(!decoded.grades.contains_key("Art"));
        assert_eq!(
            decoded.grades.get("Music"),
            Some(&LetterGrade::Unrecognized("2".to_string()))
        );
        assert_eq!(decoded.label, None);

        let single = sample(json!({ "names": "sql", "grades": ["A"] }));
        assert_eq!(single.names, vec!["sql".to_string()]);
        assert!(single.grades.is_empty());
    }
}
