//! Book management service

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Store a new book; any id carried by the payload is discarded
    pub async fn create(&self, mut book: Book) -> AppResult<Book> {
        book.id = None;
        let saved = self.repository.books.save(book)?;
        tracing::info!(id = ?saved.id, title = %saved.title, "Book created");
        Ok(saved)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.find_all()?)
    }

    /// Replace every field of an existing book except its id
    pub async fn update(&self, id: i64, book: Book) -> AppResult<Book> {
        let updated = self
            .repository
            .books
            .replace(id, book)?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        tracing::info!(id, "Book updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository
            .books
            .remove(id)?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        tracing::info!(id, "Book deleted");
        Ok(())
    }

    /// Number of stored books (for readiness reporting)
    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.repository.books.count()?)
    }
}
