use crate::domain::model::{Book, Catalog, User};
use async_trait::async_trait;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Snapshot of the whole catalog in iteration order.
    async fn all(&self) -> Catalog;

    /// Exact-key lookup.
    async fn find(&self, isbn: &str) -> Option<Book>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Appends the user unless the username is already taken. The check and
    /// the append must happen atomically with respect to other callers.
    /// Returns false when the username already exists.
    async fn add_unique(&self, user: User) -> bool;

    async fn exists(&self, username: &str) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn books_file(&self) -> Option<&str>;
}
