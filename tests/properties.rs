use book_catalog::{BookId, Catalog, Format, NewBook, Query, Status};
use proptest::prelude::*;

/// Authors with at least one non-digit character.
fn author() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 .'-]{0,20}"
}

/// Titles and authors that the delimited-line format can carry.
fn field() -> impl Strategy<Value = String> {
    "[^|\r\n]{0,24}"
}

fn entries() -> impl Strategy<Value = Vec<(String, String, i64)>> {
    prop::collection::vec((field(), author(), any::<i64>()), 0..12)
}

proptest! {
    /// Every valid input is admitted with the previous next_id and starts available.
    #[test]
    fn add_uses_next_id(books in entries()) {
        let mut catalog = Catalog::new();
        for (title, author, year) in books {
            let expected = catalog.next_id();
            let book = catalog.add(title, author, year).unwrap();
            prop_assert_eq!(book.id().get(), expected);
            prop_assert_eq!(book.status(), Status::Available);
        }
    }

    /// N adds give ids 1..=N in order.
    #[test]
    fn ids_are_sequential(books in entries()) {
        let mut catalog = Catalog::new();
        let count = books.len() as u64;
        for (title, author, year) in books {
            catalog.add(title, author, year).unwrap();
        }
        let ids: Vec<u64> = catalog.books().iter().map(|book| book.id().get()).collect();
        prop_assert_eq!(ids, (1..=count).collect::<Vec<_>>());
    }

    /// A removed id never comes back.
    #[test]
    fn removed_ids_are_never_reissued(books in entries(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!books.is_empty());
        let mut catalog = Catalog::new();
        for (title, author, year) in &books {
            catalog.add(title.clone(), author.clone(), *year).unwrap();
        }

        let removed = catalog.books()[pick.index(catalog.len())].id();
        prop_assert!(catalog.remove(removed));
        let added = catalog.add("New", "Someone", 2024).unwrap().id();
        prop_assert_ne!(added, removed);
        prop_assert_eq!(added.get(), books.len() as u64 + 1);
    }

    /// Both codecs reproduce ids, fields, status, order and next_id.
    #[test]
    fn codecs_round_trip(books in entries(), toggles in prop::collection::vec(1u64..16, 0..8)) {
        let mut catalog = Catalog::new();
        for (title, author, year) in books {
            catalog.add(title, author, year).unwrap();
        }
        for id in toggles {
            catalog.toggle_status(BookId::new(id));
        }

        for format in [Format::Json, Format::Text] {
            let encoded = catalog.serialize(format).unwrap();
            let mut loaded = Catalog::new();
            loaded.deserialize(format, &encoded).unwrap();
            prop_assert_eq!(&loaded, &catalog);
        }
    }

    /// Searching by title returns exactly the books with that title, in order.
    #[test]
    fn find_by_title_is_a_subsequence(books in entries(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!books.is_empty());
        let mut catalog = Catalog::new();
        for (title, author, year) in &books {
            catalog.add(title.clone(), author.clone(), *year).unwrap();
        }

        let title = books[pick.index(books.len())].0.clone();
        let found: Vec<_> = catalog.find(&Query::new().title(title.clone()));
        let expected: Vec<_> = catalog.books().iter().filter(|book| book.title() == title).collect();
        prop_assert_eq!(found, expected);
    }

    /// Toggling twice restores the original status.
    #[test]
    fn double_toggle_is_identity(books in entries(), id in 0u64..16) {
        let mut catalog = Catalog::new();
        for (title, author, year) in books {
            catalog.add(title, author, year).unwrap();
        }
        let before = catalog.clone();
        let present = catalog.get(BookId::new(id)).is_some();

        prop_assert_eq!(catalog.toggle_status(BookId::new(id)), present);
        prop_assert_eq!(catalog.toggle_status(BookId::new(id)), present);
        prop_assert_eq!(catalog, before);
    }

    /// Digit-only authors are always rejected.
    #[test]
    fn numeric_authors_are_rejected(digits in "[0-9]{1,12}", year in any::<i64>()) {
        prop_assert!(NewBook::new("Title", digits, year).is_err());
    }
}
