//! Repository layer over the in-memory store

pub mod books;

use crate::error::AppResult;

/// Main repository struct holding every store the service owns
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository, optionally pre-populated with the sample books
    pub fn with_seed(seed_sample_books: bool) -> AppResult<Self> {
        let repository = Self::new();
        if seed_sample_books {
            repository.books.seed_sample_books()?;
            tracing::info!("Seeded store with sample books");
        }
        Ok(repository)
    }
}
