mod support;

use book_catalog::{BookId, Catalog, CatalogError, Query, Status, ValidationError, EMPTY_CATALOG};
use pretty_assertions::assert_eq;
use support::{ids, shelf};

#[test]
fn walkthrough() {
    let mut catalog = Catalog::new();

    let dune = catalog.add("Dune", "Frank Herbert", 1965).unwrap();
    assert_eq!(dune.id(), BookId::new(1));
    assert_eq!(dune.status(), Status::Available);

    let foundation = catalog.add("Foundation", "Isaac Asimov", 1951).unwrap();
    assert_eq!(foundation.id(), BookId::new(2));

    assert!(catalog.remove(BookId::new(1)));
    assert_eq!(ids(&catalog.find(&Query::new().author("Isaac Asimov"))), vec![2]);

    assert!(catalog.toggle_status(BookId::new(2)));
    assert_eq!(
        catalog.get(BookId::new(2)).unwrap().status(),
        Status::CheckedOut
    );
}

#[test]
fn author_validation() {
    let mut catalog = Catalog::new();

    let err = catalog.add("Anything", "1234", 1999).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Validation(ValidationError::NumericAuthor(ref author)) if author == "1234"
    ));
    assert_eq!(catalog.next_id(), 1);

    let book = catalog.add("The Happy Prince", "O. Wilde", 1888).unwrap();
    assert_eq!(book.id(), BookId::new(1));
}

#[test]
fn find_without_criteria_returns_everything_in_order() {
    let catalog = shelf();
    assert!(Query::new().is_empty());
    assert_eq!(ids(&catalog.find(&Query::new())), vec![1, 2, 3]);
}

#[test]
fn find_by_title_and_year() {
    let catalog = shelf();
    assert_eq!(ids(&catalog.find(&Query::new().title("Dune"))), vec![1]);
    assert_eq!(ids(&catalog.find(&Query::new().year(1950))), vec![3]);
    assert!(catalog
        .find(&Query::new().title("Dune").author("Isaac Asimov"))
        .is_empty());
}

#[test]
fn removed_book_cannot_be_toggled() {
    let mut catalog = shelf();
    assert!(catalog.remove(BookId::new(2)));
    assert!(!catalog.toggle_status(BookId::new(2)));
    assert!(!catalog.remove(BookId::new(2)));
}

#[test]
fn ids_stay_unique_after_churn() {
    let mut catalog = shelf();
    catalog.remove(BookId::new(3));
    catalog.remove(BookId::new(1));
    catalog.add("Emma", "Jane Austen", 1815).unwrap();
    catalog.add("Persuasion", "Jane Austen", 1817).unwrap();

    assert_eq!(ids(&catalog.find(&Query::new())), vec![2, 4, 5]);
    assert_eq!(catalog.next_id(), 6);
}

#[test]
fn display_lines() {
    assert_eq!(
        Catalog::new().display().collect::<Vec<_>>(),
        vec![EMPTY_CATALOG.to_string()]
    );

    let mut catalog = shelf();
    catalog.toggle_status(BookId::new(1));
    let lines: Vec<String> = catalog.display().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "1. ID: 1, Title: Dune, Author: Frank Herbert, Year: 1965, Status: checked_out"
    );
}
