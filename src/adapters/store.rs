use crate::domain::model::{Book, Catalog, User};
use crate::domain::ports::{BookRepository, UserRepository};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Built-in seed catalog, same shape as a `--books` override file.
const SEED_BOOKS: &str = include_str!("../../data/books.json");

/// Loads the catalog from an override file, or the built-in seed.
pub fn load_catalog(path: Option<&str>) -> Result<MemoryCatalog> {
    match path {
        Some(path) => MemoryCatalog::from_file(path),
        None => MemoryCatalog::from_json_str(SEED_BOOKS),
    }
}

/// In-memory catalog. The map is read-mostly; the lock exists so review
/// writers outside this crate's routes could share the store.
#[derive(Clone)]
pub struct MemoryCatalog {
    books: Arc<RwLock<Catalog>>,
}

impl MemoryCatalog {
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            books: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        Ok(Self::from_catalog(catalog))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookRepository for MemoryCatalog {
    async fn all(&self) -> Catalog {
        self.books.read().await.clone()
    }

    async fn find(&self, isbn: &str) -> Option<Book> {
        self.books.read().await.get(isbn).cloned()
    }
}

/// In-memory user registry. The duplicate check and the append share one
/// lock acquisition, so concurrent registrations for the same username
/// serialize and exactly one succeeds.
#[derive(Clone, Default)]
pub struct MemoryUserRegistry {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.lock().await.len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRegistry {
    async fn add_unique(&self, user: User) -> bool {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.username == user.username) {
            return false;
        }
        users.push(user);
        true
    }

    async fn exists(&self, username: &str) -> bool {
        self.users
            .lock()
            .await
            .iter()
            .any(|u| u.username == username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_catalog_loads() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len().await, 10);

        let book = catalog.find("1").await.unwrap();
        assert_eq!(book.title, "Things Fall Apart");
        assert_eq!(book.author, "Chinua Achebe");
        assert!(book.reviews.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_iteration_order_is_key_order() {
        let catalog = load_catalog(None).unwrap();
        let keys: Vec<String> = catalog.all().await.into_keys().collect();

        // BTreeMap order: "10" sorts between "1" and "2".
        assert_eq!(keys[0], "1");
        assert_eq!(keys[1], "10");
        assert_eq!(keys[2], "2");
    }

    #[tokio::test]
    async fn test_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(
            &path,
            r#"{ "42": { "title": "T", "author": "A" } }"#,
        )
        .unwrap();

        let catalog = MemoryCatalog::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(catalog.len().await, 1);

        // "reviews" was absent in the file and defaults to empty.
        let book = catalog.find("42").await.unwrap();
        assert!(book.reviews.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(MemoryCatalog::from_file(path.to_str().unwrap()).is_err());
        assert!(MemoryCatalog::from_file(dir.path().join("missing.json")).is_err());
    }

    #[tokio::test]
    async fn test_add_unique_rejects_duplicates() {
        let registry = MemoryUserRegistry::new();
        let user = User {
            username: "alice".to_string(),
            password: "pw1".to_string(),
        };

        assert!(registry.add_unique(user.clone()).await);
        assert!(!registry.add_unique(user).await);
        assert_eq!(registry.count().await, 1);
        assert!(registry.exists("alice").await);
        assert!(!registry.exists("bob").await);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_registrations_admit_exactly_one() {
        let registry = MemoryUserRegistry::new();

        let mut handles = Vec::new();
        for i in 0..16 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry
                    .add_unique(User {
                        username: "alice".to_string(),
                        password: format!("pw{}", i),
                    })
                    .await
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 1);
        assert_eq!(registry.count().await, 1);
    }
}
