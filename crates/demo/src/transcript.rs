//! Builds the console transcript of the sets demo.
//!
//! Each section exercises one collection kind and returns the lines it would
//! print. Nothing here writes to stdout; the binary does that.

use bookshelf_core::{Book, ById, ByTitle, ByTitleThenId, DomainResult};
use bookshelf_sets::{OrderedSet, UnorderedSet};

use crate::config::{DemoConfig, Section};

pub const HEADER: &str = "Set Demonstration App - Sets store UNIQUE values - No Duplicates allowed";

/// The literal shelf the book sections insert, duplicates included.
pub fn shelf() -> Vec<Book> {
    vec![
        Book::new(9999, "Jaws"),
        Book::new(9999, "Jaws"),
        Book::new(7777, "Jaws"),
        Book::new(2222, "Heist"),
        Book::new(4444, "Alien"),
        Book::new(1111, "Tatoos"),
        Book::new(3333, "Life on Earth"),
    ]
}

/// [`shelf`] plus a second title under an existing code.
pub fn shelf_with_stardust() -> Vec<Book> {
    let mut books = shelf();
    books.insert(3, Book::new(9999, "Stardust"));
    books
}

/// Renders every configured section, header first.
pub fn transcript(config: &DemoConfig) -> DomainResult<Vec<String>> {
    let mut lines = vec![HEADER.to_string()];
    for &section in &config.sections {
        tracing::debug!(section = section.name(), "rendering section");
        lines.extend(render(section)?);
    }
    Ok(lines)
}

pub fn render(section: Section) -> DomainResult<Vec<String>> {
    match section {
        Section::HashStrings => Ok(hash_set_of_strings()),
        Section::TreeStrings => tree_set_of_strings(),
        Section::TreeBooks => tree_set_of_books(),
        Section::TreeBooksComparator => tree_set_with_comparator(),
        Section::TreeBooksById => tree_set_by_id(),
        Section::TreeBooksByTitle => tree_set_by_title(),
        Section::HashBooks => Ok(hash_set_of_books()),
    }
}

fn membership(found: bool, what: &str) -> String {
    if found {
        format!("{what} is in the Set.")
    } else {
        format!("{what} NOT found in the Set")
    }
}

fn hash_set_of_strings() -> Vec<String> {
    let mut names = UnorderedSet::new();
    for name in ["Zoe", "Donald", "John", "Bill", "Bill", "Adam", "Niamh"] {
        names.insert(name.to_string());
    }
    names.remove(&"Donald".to_string());

    let name = "John".to_string();
    let mut lines = vec![membership(names.contains(&name), &name)];
    lines.push("Names from the HashSet - no duplicates, and NOT in order".to_string());
    lines.push("Display set using for() loop:".to_string());
    lines.extend(names.iter().cloned());
    lines
}

fn tree_set_of_strings() -> DomainResult<Vec<String>> {
    let mut cars = OrderedSet::new();
    for car in ["Nissan", "BMW", "Audi", "Audi", "Jaguar"] {
        cars.insert(car.to_string())?;
    }

    let mut lines = vec![
        "Cars (String) from the TreeSet - no duplicates, sorted in order".to_string(),
        "Display set using for() loop:".to_string(),
    ];
    lines.extend(cars.iter().cloned());

    let car = "Maserati".to_string();
    lines.push(membership(cars.contains(&car)?, &car));
    Ok(lines)
}

fn tree_set_of_books() -> DomainResult<Vec<String>> {
    let mut books = OrderedSet::new();
    for book in shelf() {
        books.insert(book)?;
    }

    let mut lines =
        vec!["Books from the TreeSet - no duplicates, in order (by code)".to_string()];
    lines.extend(books.iter().map(ToString::to_string));
    Ok(lines)
}

fn tree_set_with_comparator() -> DomainResult<Vec<String>> {
    let mut books = OrderedSet::with_policy(ByTitleThenId);
    for book in shelf_with_stardust() {
        books.insert(book)?;
    }

    let mut lines = vec![
        "Books from the TreeSet - no duplicates,  in order (sorted by title then code) - Using Comparator"
            .to_string(),
    ];
    lines.extend(books.iter().map(ToString::to_string));
    Ok(lines)
}

fn tree_set_by_id() -> DomainResult<Vec<String>> {
    let mut books = OrderedSet::with_policy(ById);
    for book in shelf_with_stardust() {
        books.insert(book)?;
    }

    let mut lines = vec![
        "Books from the TreeSet - no duplicates, in order (by code) - Using by-id Comparator"
            .to_string(),
    ];
    lines.extend(books.iter().map(ToString::to_string));

    let key = Book::search_key(7777);
    lines.push(membership(
        books.contains(&key)?,
        &format!("Book with code {}", key.code()),
    ));
    Ok(lines)
}

fn tree_set_by_title() -> DomainResult<Vec<String>> {
    let mut books = OrderedSet::with_policy(ByTitle);
    let mut lines = vec![
        "Books from the TreeSet - no duplicates, in order (by title) - Using by-title Comparator"
            .to_string(),
    ];

    for book in [
        Book::new(9999, "Jaws"),
        Book::new(7777, "Jaws"),
        Book::new(4444, "Alien"),
    ] {
        let rendered = book.to_string();
        let outcome = if books.insert(book)? { "added" } else { "rejected" };
        lines.push(format!("{rendered} {outcome}"));
    }
    lines.extend(books.iter().map(ToString::to_string));
    Ok(lines)
}

fn hash_set_of_books() -> Vec<String> {
    let books: UnorderedSet<Book> = shelf_with_stardust().into_iter().collect();

    let mut lines = vec![
        "Books from the HashSet - no duplicates,  NO particular order - not even chronological order"
            .to_string(),
    ];
    lines.extend(books.iter().map(ToString::to_string));
    lines
}
