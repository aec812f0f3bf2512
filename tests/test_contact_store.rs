//! Store contract tests through the public API.

use contact_book::{
    is_valid_email, is_valid_name, is_valid_phone_number, Contact, ContactError,
    ContactRepository, ContactStore, ValidationError,
};

fn numbered(n: usize) -> Contact {
    Contact::new(
        "Test Person",
        format!("{:010}", n),
        format!("person{}@example.com", n),
    )
    .unwrap()
}

#[test]
fn test_validators_from_public_api() {
    assert!(is_valid_name("Grace Hopper"));
    assert!(is_valid_name(""));
    assert!(!is_valid_name("Grace!"));

    assert!(is_valid_phone_number("1234567890"));
    assert!(!is_valid_phone_number("123456789"));
    assert!(!is_valid_phone_number("12345abcde"));

    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("a.b@c"));
    assert!(!is_valid_email("abc"));
    assert!(!is_valid_email("a@b"));
}

#[test]
fn test_fifty_first_add_exceeds_capacity() {
    let mut store = ContactStore::new();
    for n in 0..50 {
        assert!(store.add(numbered(n)).is_ok(), "add #{} should succeed", n);
    }

    match store.add(numbered(50)) {
        Err(ContactError::CapacityExceeded { capacity }) => assert_eq!(capacity, 50),
        other => panic!("Expected CapacityExceeded, got: {:?}", other),
    }
}

#[test]
fn test_capacity_checked_before_uniqueness() {
    let mut store = ContactStore::with_capacity(1);
    let first = numbered(0);
    store.add(first.clone()).unwrap();

    // Same phone and email, but the full store is reported first
    assert!(matches!(
        store.add(first),
        Err(ContactError::CapacityExceeded { .. })
    ));
}

#[test]
fn test_invalid_fields_never_reach_the_store() {
    assert_eq!(
        Contact::new("Ada", "12345", "ada@example.com"),
        Err(ValidationError::InvalidPhone("12345".to_string()))
    );
    assert_eq!(
        Contact::new("Ada", "1234567890", "ada-example-com"),
        Err(ValidationError::InvalidEmail("ada-example-com".to_string()))
    );
}

#[test]
fn test_full_lifecycle() {
    let mut store = ContactStore::new();
    assert_eq!(store.list_all(), Err(ContactError::Empty));

    store
        .add(Contact::new("Ada", "5551234567", "ada@example.com").unwrap())
        .unwrap();
    store
        .add(Contact::new("Grace", "5559876543", "grace@example.com").unwrap())
        .unwrap();

    assert_eq!(store.search_by_name("Grace").unwrap().email(), "grace@example.com");
    assert_eq!(store.find_index_by_email("grace@example.com"), Some(1));

    let removed = store.delete_by_name("Ada").unwrap();
    assert_eq!(removed.name(), "Ada");
    assert_eq!(store.find_index_by_email("grace@example.com"), Some(0));
    assert!(matches!(
        store.search_by_name("Ada"),
        Err(ContactError::NotFound(_))
    ));

    store.delete_by_name("Grace").unwrap();
    assert!(store.is_empty());
    assert_eq!(store.list_all(), Err(ContactError::Empty));
}
