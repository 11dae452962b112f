use crate::core::{Book, BookMatch, BookRepository, Catalog, ReviewOutcome};
use crate::utils::error::{BookstoreError, Result};

/// Read-only queries over the catalog. All matching is exact-string and
/// case-sensitive; searches scan the catalog in iteration order.
pub struct QueryService<B: BookRepository> {
    books: B,
}

impl<B: BookRepository> QueryService<B> {
    pub fn new(books: B) -> Self {
        Self { books }
    }

    pub async fn list_all(&self) -> Result<Catalog> {
        Ok(self.books.all().await)
    }

    pub async fn by_isbn(&self, isbn: &str) -> Result<Book> {
        self.books
            .find(isbn)
            .await
            .ok_or_else(|| BookstoreError::not_found("Book not found"))
    }

    pub async fn by_author(&self, author: &str) -> Result<Vec<BookMatch>> {
        let matches = self
            .scan(|book| book.author == author)
            .await;

        if matches.is_empty() {
            return Err(BookstoreError::not_found("No books found for this author"));
        }
        Ok(matches)
    }

    pub async fn by_title(&self, title: &str) -> Result<Vec<BookMatch>> {
        let matches = self
            .scan(|book| book.title == title)
            .await;

        if matches.is_empty() {
            return Err(BookstoreError::not_found("No books found for this title"));
        }
        Ok(matches)
    }

    pub async fn reviews(&self, isbn: &str) -> Result<ReviewOutcome> {
        let book = self.by_isbn(isbn).await?;

        if book.reviews.is_empty() {
            Ok(ReviewOutcome::Empty)
        } else {
            Ok(ReviewOutcome::Reviews(book.reviews))
        }
    }

    async fn scan(&self, matches: impl Fn(&Book) -> bool) -> Vec<BookMatch> {
        self.books
            .all()
            .await
            .into_iter()
            .filter(|(_, book)| matches(book))
            .map(|(isbn, book)| BookMatch { isbn, book })
            .collect()
    }
}
