//! Export and import of the whole collection as a JSON document.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use dev_store_core::Developer;

use crate::error::ImportError;

/// Serialize developers as a pretty-printed (two-space indent) JSON array.
pub fn export_json(developers: &[Developer]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(developers)
}

/// `dev_store_export_YYYY-MM-DD.json` for the given day.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("dev_store_export_{}.json", date.format("%Y-%m-%d"))
}

/// Validate and decode an import document.
///
/// The whole document is checked before anything is returned, so a caller
/// that only replaces its collection on `Ok` never ends up half-imported.
pub fn parse_import(text: &str) -> Result<Vec<Developer>, ImportError> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Array(entries) = document else {
        return Err(ImportError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(entries.len());
    let mut developers = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let developer = parse_entry(index, entry)?;
        if !seen.insert(developer.id) {
            return Err(ImportError::DuplicateId {
                index,
                id: developer.id,
            });
        }
        developers.push(developer);
    }
    log::debug!("Validated import document with {} developers", developers.len());
    Ok(developers)
}

fn parse_entry(index: usize, entry: &Value) -> Result<Developer, ImportError> {
    let Value::Object(fields) = entry else {
        return Err(ImportError::invalid_entry(index, "not an object"));
    };

    let id = fields
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| ImportError::invalid_entry(index, "`id` must be a non-negative integer"))?;

    Ok(Developer {
        id,
        name: string_field(index, fields, "name")?,
        url: string_field(index, fields, "url")?,
        date_added: string_field(index, fields, "dateAdded")?,
        icon_url: string_field(index, fields, "iconUrl")?,
        tags: tags_field(index, fields)?,
    })
}

fn string_field(index: usize, fields: &Map<String, Value>, name: &str) -> Result<String, ImportError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ImportError::invalid_entry(index, format!("`{name}` must be a string"))),
        None => Err(ImportError::invalid_entry(index, format!("missing `{name}`"))),
    }
}

fn tags_field(index: usize, fields: &Map<String, Value>) -> Result<Option<Vec<String>>, ImportError> {
    let Some(value) = fields.get("tags") else {
        return Ok(None);
    };
    let Value::Array(items) = value else {
        return Err(ImportError::invalid_entry(index, "`tags` must be an array"));
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(tag) => Ok(tag.clone()),
            _ => Err(ImportError::invalid_entry(index, "`tags` must contain only strings")),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn developer(id: u64, tags: Option<Vec<&str>>) -> Developer {
        Developer {
            id,
            name: format!("開発者{id}"),
            url: format!("https://apps.apple.com/jp/developer/id{id}"),
            date_added: "2024-03-01T10:00:00.000Z".to_string(),
            icon_url: "https://cdn.example/icon.png".to_string(),
            tags: tags.map(|t| t.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn export_then_import_reproduces_collection() {
        let original = vec![
            developer(2, Some(vec!["games", "puzzle"])),
            developer(1, None),
            developer(3, Some(vec![])),
        ];
        let text = export_json(&original).unwrap();
        assert_eq!(parse_import(&text).unwrap(), original);
    }

    #[test]
    fn export_is_indented_with_fixed_field_order() {
        let text = export_json(&[developer(7, Some(vec!["x"]))]).unwrap();
        let expected = r#"[
  {
    "id": 7,
    "name": "開発者7",
    "url": "https://apps.apple.com/jp/developer/id7",
    "dateAdded": "2024-03-01T10:00:00.000Z",
    "iconUrl": "https://cdn.example/icon.png",
    "tags": [
      "x"
    ]
  }
]"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn file_name_uses_date() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(export_file_name(day), "dev_store_export_2025-01-09.json");
    }

    #[test]
    fn missing_icon_url_is_rejected() {
        let text = r#"[{"id":1,"name":"n","url":"u","dateAdded":"d"}]"#;
        let err = parse_import(text).unwrap_err();
        assert!(matches!(err, ImportError::InvalidEntry { index: 0, ref reason } if reason.contains("iconUrl")));
        assert_eq!(err.user_message(), "無効なファイル形式です。");
    }

    #[test]
    fn non_array_is_rejected() {
        assert!(matches!(parse_import(r#"{"id":1}"#), Err(ImportError::NotAnArray)));
    }

    #[test]
    fn malformed_json_is_a_read_failure() {
        let err = parse_import("[{").unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
        assert_eq!(err.user_message(), "ファイルの読み込みに失敗しました。");
    }

    #[test]
    fn bad_field_types_are_rejected() {
        let cases = [
            r#"[{"id":"1","name":"n","url":"u","dateAdded":"d","iconUrl":"i"}]"#,
            r#"[{"id":-1,"name":"n","url":"u","dateAdded":"d","iconUrl":"i"}]"#,
            r#"[{"id":1,"name":5,"url":"u","dateAdded":"d","iconUrl":"i"}]"#,
            r#"[{"id":1,"name":"n","url":"u","dateAdded":"d","iconUrl":"i","tags":"a"}]"#,
            r#"[{"id":1,"name":"n","url":"u","dateAdded":"d","iconUrl":"i","tags":[1]}]"#,
            r#"[3]"#,
        ];
        for case in cases {
            assert!(
                matches!(parse_import(case), Err(ImportError::InvalidEntry { .. })),
                "accepted {case}"
            );
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let text = r#"[
            {"id":1,"name":"a","url":"u","dateAdded":"d","iconUrl":"i"},
            {"id":1,"name":"b","url":"u","dateAdded":"d","iconUrl":"i"}
        ]"#;
        assert!(matches!(
            parse_import(text),
            Err(ImportError::DuplicateId { index: 1, id: 1 })
        ));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_import("[]").unwrap().is_empty());
    }
}
