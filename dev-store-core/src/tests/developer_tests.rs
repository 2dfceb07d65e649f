use super::*;

fn info() -> DeveloperInfo {
    DeveloperInfo {
        id: 284882218,
        name: "Facebook, Inc.".to_string(),
        url: "https://apps.apple.com/jp/developer/id284882218".to_string(),
        icon_url: "https://example.com/100x100bb.jpg".to_string(),
    }
}

#[test]
fn from_info_starts_with_empty_tags() {
    let dev = Developer::from_info(info(), "2024-01-01T00:00:00.000Z");
    assert_eq!(dev.id, 284882218);
    assert_eq!(dev.tags, Some(vec![]));
    assert_eq!(dev.date_added, "2024-01-01T00:00:00.000Z");
}

#[test]
fn serializes_camel_case_in_fixed_order() {
    let dev = Developer::from_info(info(), "2024-01-01T00:00:00.000Z");
    let json = serde_json::to_string(&dev).unwrap();
    let id = json.find("\"id\"").unwrap();
    let name = json.find("\"name\"").unwrap();
    let url = json.find("\"url\"").unwrap();
    let added = json.find("\"dateAdded\"").unwrap();
    let icon = json.find("\"iconUrl\"").unwrap();
    let tags = json.find("\"tags\"").unwrap();
    assert!(id < name && name < url && url < added && added < icon && icon < tags);
}

#[test]
fn missing_tags_stay_missing() {
    let json = r#"{"id":1,"name":"A","url":"u","dateAdded":"d","iconUrl":"i"}"#;
    let dev: Developer = serde_json::from_str(json).unwrap();
    assert_eq!(dev.tags, None);
    assert!(dev.tags().is_empty());
    assert_eq!(serde_json::to_string(&dev).unwrap(), json);
}

#[test]
fn has_tag_matches_exactly() {
    let mut dev = Developer::from_info(info(), "d");
    dev.tags = Some(vec!["social".to_string()]);
    assert!(dev.has_tag("social"));
    assert!(!dev.has_tag("Social"));
}
