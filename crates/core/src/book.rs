use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A book on the shelf: a scanner code plus a title.
///
/// Identity is the scanner code alone. Two books with the same code are equal,
/// hash the same and sort together, whatever their titles say. Collections that
/// need a different notion of "same book" take an explicit policy instead (see
/// [`crate::policy`]).
///
/// The title is optional only so that search keys can be built from a code
/// alone ([`Book::search_key`]); stored books are expected to carry one, but
/// nothing enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl Book {
    pub fn new(code: i32, title: impl Into<String>) -> Self {
        Self {
            code,
            title: Some(title.into()),
        }
    }

    /// A query object carrying only the scanner code.
    pub fn search_key(code: i32) -> Self {
        Self { code, title: None }
    }

    pub fn with_optional_title(code: i32, title: Option<String>) -> Self {
        Self { code, title }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Equality against a possibly-absent book; `None` is never equal.
    pub fn equals(&self, other: Option<&Book>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Deterministic hash of the equality fields.
    ///
    /// Uses fixed-key SipHash, so the value is stable for a given toolchain
    /// but must not be persisted.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl core::fmt::Display for Book {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.title {
            Some(title) => write!(f, "Book{{code={}, title={}}}", self.code, title),
            None => write!(f, "Book{{code={}, title=null}}", self.code),
        }
    }
}

impl ValueObject for Book {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_value_object<T: ValueObject>() {}

    #[test]
    fn book_is_a_value_object() {
        assert_value_object::<Book>();
    }

    #[test]
    fn equality_ignores_title() {
        let jaws = Book::new(9999, "Jaws");
        let stardust = Book::new(9999, "Stardust");
        let other_jaws = Book::new(7777, "Jaws");

        assert_eq!(jaws, stardust);
        assert_ne!(jaws, other_jaws);
        assert_eq!(jaws.hash_value(), stardust.hash_value());
    }

    #[test]
    fn search_key_equals_stored_book_with_same_code() {
        let stored = Book::new(7777, "Jaws");
        let key = Book::search_key(7777);

        assert_eq!(key.title(), None);
        assert_eq!(stored, key);
        assert_eq!(stored.hash_value(), key.hash_value());
        assert_eq!(stored.cmp(&key), Ordering::Equal);
    }

    #[test]
    fn equals_absent_is_false() {
        let book = Book::new(1111, "Tatoos");
        assert!(!book.equals(None));
        assert!(book.equals(Some(&Book::new(1111, "Tatoos"))));
        assert!(book.equals(Some(&book)));
    }

    #[test]
    fn natural_order_is_numeric_by_code() {
        let mut books = vec![
            Book::new(9999, "Jaws"),
            Book::new(2222, "Heist"),
            Book::new(10000, "Alien"),
            Book::new(-5, "Negative"),
        ];
        books.sort();

        let codes: Vec<i32> = books.iter().map(Book::code).collect();
        assert_eq!(codes, vec![-5, 2222, 9999, 10000]);
    }

    #[test]
    fn display_matches_transcript_format() {
        assert_eq!(
            Book::new(4444, "Alien").to_string(),
            "Book{code=4444, title=Alien}"
        );
        assert_eq!(Book::search_key(4444).to_string(), "Book{code=4444, title=null}");
    }

    #[test]
    fn serde_omits_absent_title() {
        let json = serde_json::to_value(Book::search_key(3333)).unwrap();
        assert_eq!(json, serde_json::json!({ "code": 3333 }));

        let book: Book =
            serde_json::from_str(r#"{"code":3333,"title":"Life on Earth"}"#).unwrap();
        assert_eq!(book.code(), 3333);
        assert_eq!(book.title(), Some("Life on Earth"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn book() -> impl Strategy<Value = Book> {
            (-50i32..50, proptest::option::of("[A-Za-z ]{0,12}"))
                .prop_map(|(code, title)| Book::with_optional_title(code, title))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: equality is reflexive and symmetric.
            #[test]
            fn equality_is_reflexive_and_symmetric(a in book(), b in book()) {
                prop_assert_eq!(&a, &a);
                prop_assert_eq!(a == b, b == a);
            }

            /// Property: equality is transitive.
            #[test]
            fn equality_is_transitive(a in book(), b in book(), c in book()) {
                if a == b && b == c {
                    prop_assert_eq!(&a, &c);
                }
            }

            /// Property: equal books hash equally.
            #[test]
            fn equal_books_hash_equally(a in book(), b in book()) {
                if a == b {
                    prop_assert_eq!(a.hash_value(), b.hash_value());
                }
            }

            /// Property: natural order agrees with equality.
            #[test]
            fn order_is_consistent_with_equality(a in book(), b in book()) {
                prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
                prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            }
        }
    }
}
