//! Integration tests for search plus paged display of the results.

use rolodex::{ContactRecord, Directory, Name, OutOfRangeError, Paginator, PhoneNumber};
use tempfile::tempdir;

fn seeded_directory(path: &std::path::Path, count: usize) -> Directory {
    let mut directory = Directory::load(path).unwrap();
    for i in 0..count {
        let mut record = ContactRecord::new(Name::new(format!("Contact{:02}", i)).unwrap(), None);
        record.add_phone(PhoneNumber::new(format!("38050{:07}", i)).unwrap());
        directory.add_record(record).unwrap();
    }
    directory
}

#[test]
fn add_then_find_renders_expected_text() {
    let dir = tempdir().unwrap();
    let mut directory = Directory::load(dir.path().join("contacts.json")).unwrap();

    let mut ann = ContactRecord::new(Name::new("Ann").unwrap(), None);
    ann.add_phone(PhoneNumber::new("123456789012").unwrap());
    directory.add_record(ann).unwrap();

    let found = directory.find_by_name("Ann").unwrap();
    assert_eq!(found.render(), "Ann: 123456789012");
}

#[test]
fn search_matches_phone_substring_case_insensitively() {
    let dir = tempdir().unwrap();
    let mut directory = Directory::load(dir.path().join("contacts.json")).unwrap();

    let mut ann = ContactRecord::new(Name::new("Ann").unwrap(), None);
    ann.add_phone(PhoneNumber::new("380501234567").unwrap());
    directory.add_record(ann).unwrap();

    let mut bob = ContactRecord::new(Name::new("BOB").unwrap(), None);
    bob.add_phone(PhoneNumber::new("380509999999").unwrap());
    directory.add_record(bob).unwrap();

    // Name match ignores case
    assert_eq!(directory.search("bob").len(), 1);
    // Digit substring matches against the rendered phone list
    let hits = directory.search("123456");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name().as_str(), "Ann");
    // Empty query matches everything
    assert_eq!(directory.search("").len(), 2);
}

#[test]
fn paging_search_results() {
    let dir = tempdir().unwrap();
    let directory = seeded_directory(&dir.path().join("contacts.json"), 10);

    let matches = directory.search("contact");
    assert_eq!(matches.len(), 10);

    let pager = Paginator::new(matches, 3).unwrap();
    assert_eq!(pager.page_count(), 4);

    // Pages cover the results in directory order with no overlap
    let mut seen = Vec::new();
    for page in 1..=pager.page_count() {
        for record in pager.page(page).unwrap() {
            seen.push(record.name().as_str().to_string());
        }
    }
    let expected: Vec<String> = (0..10).map(|i| format!("Contact{:02}", i)).collect();
    assert_eq!(seen, expected);

    assert_eq!(pager.page(4).unwrap().len(), 1);
    assert_eq!(
        pager.page(5).unwrap_err(),
        OutOfRangeError {
            page: 5,
            page_count: 4
        }
    );
    assert_eq!(
        pager.page(0).unwrap_err(),
        OutOfRangeError {
            page: 0,
            page_count: 4
        }
    );
}

#[test]
fn page_walk_over_live_search_is_a_snapshot() {
    let dir = tempdir().unwrap();
    let mut directory = seeded_directory(&dir.path().join("contacts.json"), 5);

    let matches = directory.search("");
    let pager = Paginator::new(matches, 2).unwrap();

    // Mutating the directory mid-walk does not disturb the pages
    directory.remove_record("Contact00").unwrap();
    assert_eq!(pager.page(1).unwrap()[0].name().as_str(), "Contact00");
    assert_eq!(pager.page_count(), 3);
}
