pub mod query;
pub mod registration;

pub use crate::domain::model::{Book, BookMatch, Catalog, ReviewOutcome, User};
pub use crate::domain::ports::{BookRepository, ConfigProvider, UserRepository};
pub use crate::utils::error::Result;
