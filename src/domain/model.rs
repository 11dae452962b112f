use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full catalog, keyed by ISBN. BTreeMap keeps iteration order
/// deterministic, which fixes the order of author/title search results.
pub type Catalog = BTreeMap<String, Book>;

/// Reviewer identifier -> review text.
pub type Reviews = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Absent in seed data deserializes as empty; the two are equivalent.
    #[serde(default)]
    pub reviews: Reviews,
}

/// A search hit: the matched book tagged with the ISBN it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookMatch {
    pub isbn: String,
    #[serde(flatten)]
    pub book: Book,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    // Stored plaintext, matching upstream behavior. Known smell.
    pub password: String,
}

/// Outcome of a review lookup for an existing book. An empty review map is
/// a successful response with a fixed message, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    Reviews(Reviews),
    Empty,
}
