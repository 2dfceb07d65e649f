use super::*;
use crate::storage::MemoryStorage;
use chrono::TimeZone;

fn info(id: u64, name: &str) -> DeveloperInfo {
    DeveloperInfo {
        id,
        name: name.to_string(),
        url: format!("https://apps.apple.com/jp/developer/id{id}"),
        icon_url: String::new(),
    }
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

fn collection() -> DeveloperCollection<MemoryStorage> {
    DeveloperCollection::load(MemoryStorage::new())
}

fn persisted(c: &DeveloperCollection<MemoryStorage>) -> Vec<Developer> {
    serde_json::from_str(c.storage().raw(DEVELOPERS_KEY).unwrap()).unwrap()
}

#[test]
fn add_prepends_and_stamps() {
    let mut c = collection();
    assert!(c.add_at(info(1, "One"), at(1)));
    assert!(c.add_at(info(2, "Two"), at(2)));

    let ids: Vec<u64> = c.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(c.get(1).unwrap().date_added, "2024-01-01T12:00:00.000Z");
    assert_eq!(c.get(2).unwrap().tags, Some(vec![]));
    assert_eq!(persisted(&c), c.as_slice());
}

#[test]
fn add_twice_keeps_one_entry() {
    let mut c = collection();
    assert!(c.add_at(info(7, "First"), at(1)));
    assert!(!c.add_at(info(7, "Renamed"), at(2)));
    assert_eq!(c.len(), 1);
    assert_eq!(c.get(7).unwrap().name, "First");
    assert_eq!(c.get(7).unwrap().date_added, "2024-01-01T12:00:00.000Z");
}

#[test]
fn delete_is_idempotent() {
    let mut c = collection();
    c.add_at(info(1, "One"), at(1));
    c.add_at(info(2, "Two"), at(2));

    assert!(c.delete(1));
    assert!(!c.delete(1));
    assert_eq!(c.len(), 1);
    assert_eq!(persisted(&c).len(), 1);
}

#[test]
fn update_keeps_position() {
    let mut c = collection();
    c.add_at(info(1, "One"), at(1));
    c.add_at(info(2, "Two"), at(2));
    c.add_at(info(3, "Three"), at(3));

    let mut middle = c.get(2).unwrap().clone();
    middle.name = "Deux".to_string();
    assert!(c.update(middle));

    let names: Vec<&str> = c.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Three", "Deux", "One"]);
}

#[test]
fn update_unknown_id_changes_nothing() {
    let mut c = collection();
    c.add_at(info(1, "One"), at(1));
    let stranger = Developer::from_info(info(9, "Nine"), "2024-01-01T00:00:00.000Z");
    assert!(!c.update(stranger));
    assert_eq!(c.len(), 1);
}

#[test]
fn set_tags_replaces_only_tags() {
    let mut c = collection();
    c.add_at(info(1, "One"), at(1));
    let before = c.get(1).unwrap().clone();

    assert!(c.set_tags(1, vec!["games".to_string(), "indie".to_string()]));
    let after = c.get(1).unwrap();
    assert_eq!(after.tags, Some(vec!["games".to_string(), "indie".to_string()]));
    assert_eq!(after.name, before.name);
    assert_eq!(after.date_added, before.date_added);
    assert!(!c.set_tags(42, vec![]));
}

#[test]
fn replace_all_overwrites() {
    let mut c = collection();
    c.add_at(info(1, "One"), at(1));
    let incoming = vec![Developer::from_info(info(5, "Five"), "2023-05-05T00:00:00.000Z")];
    c.replace_all(incoming.clone());
    assert_eq!(c.as_slice(), incoming.as_slice());
    assert_eq!(persisted(&c), incoming);
}

#[test]
fn load_reads_persisted_slot() {
    let json = r#"[{"id":3,"name":"Saved","url":"u","dateAdded":"2024-02-02T00:00:00.000Z","iconUrl":""}]"#;
    let c = DeveloperCollection::load(MemoryStorage::new().with_item(DEVELOPERS_KEY, json));
    assert_eq!(c.len(), 1);
    assert_eq!(c.get(3).unwrap().name, "Saved");
}

#[test]
fn load_corrupt_slot_starts_empty() {
    let c = DeveloperCollection::load(MemoryStorage::new().with_item(DEVELOPERS_KEY, "not json"));
    assert!(c.is_empty());
}

#[test]
fn failed_persist_keeps_memory_state() {
    let mut storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let mut c = DeveloperCollection::load(storage);
    assert!(c.add_at(info(1, "One"), at(1)));
    assert_eq!(c.len(), 1);
    assert!(c.storage().raw(DEVELOPERS_KEY).is_none());
}

#[test]
fn all_tags_sorted_and_deduplicated() {
    let mut c = collection();
    c.add_at(info(1, "One"), at(1));
    c.add_at(info(2, "Two"), at(2));
    c.set_tags(1, vec!["tools".to_string(), "games".to_string()]);
    c.set_tags(2, vec!["games".to_string(), "art".to_string()]);
    assert_eq!(c.all_tags(), vec!["art", "games", "tools"]);
}

#[test]
fn filtered_by_tag() {
    let mut c = collection();
    c.add_at(info(1, "One"), at(1));
    c.add_at(info(2, "Two"), at(2));
    c.set_tags(2, vec!["games".to_string()]);

    let tagged: Vec<u64> = c.filtered(Some("games")).iter().map(|d| d.id).collect();
    assert_eq!(tagged, vec![2]);
    assert_eq!(c.filtered(None).len(), 2);
    assert!(c.filtered(Some("missing")).is_empty());
}

#[test]
fn sorted_by_name_reverses_cleanly() {
    let mut c = collection();
    c.add_at(info(1, "banana"), at(1));
    c.add_at(info(2, "Apple"), at(2));
    c.add_at(info(3, "cherry"), at(3));

    let mut sort = SortState::new(DeveloperSortKey::Name);
    let asc: Vec<u64> = c.sorted(None, sort).iter().map(|d| d.id).collect();
    assert_eq!(asc, vec![2, 1, 3]);

    sort.toggle(DeveloperSortKey::Name);
    let desc: Vec<u64> = c.sorted(None, sort).iter().map(|d| d.id).collect();
    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(desc, reversed);
}

#[test]
fn default_sort_is_most_recent_first() {
    let mut c = collection();
    c.add_at(info(1, "One"), at(3));
    c.add_at(info(2, "Two"), at(1));
    c.add_at(info(3, "Three"), at(2));

    let ids: Vec<u64> = c.sorted(None, SortState::default()).iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
    // display sorting leaves the stored order alone
    let stored: Vec<u64> = c.iter().map(|d| d.id).collect();
    assert_eq!(stored, vec![3, 2, 1]);
}

#[test]
fn switching_developer_sort_key_starts_ascending() {
    let mut sort = SortState::<DeveloperSortKey>::default();
    sort.toggle(DeveloperSortKey::Name);
    assert_eq!(sort.direction(), SortDirection::Ascending);
    sort.toggle(DeveloperSortKey::DateAdded);
    assert_eq!(sort.direction(), SortDirection::Ascending);
}
