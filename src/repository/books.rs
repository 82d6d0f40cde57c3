//! In-memory book store

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{error::StoreError, models::Book};

type StoreResult<T> = Result<T, StoreError>;

/// Books keyed by id, with ids drawn from a single monotonic counter.
///
/// Clones share the same map and counter.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<HashMap<i64, Book>>>,
    counter: Arc<AtomicI64>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<i64, Book>>> {
        self.books.read().map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<i64, Book>>> {
        self.books.write().map_err(|_| StoreError::LockPoisoned("write"))
    }

    fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Insert or overwrite a book, assigning the next id when it has none.
    /// A preset id moves the counter past it so later ids stay unique.
    pub fn save(&self, mut book: Book) -> StoreResult<Book> {
        let id = match book.id {
            Some(id) => {
                self.counter.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => {
                let id = self.next_id();
                book.id = Some(id);
                id
            }
        };
        self.write()?.insert(id, book.clone());
        Ok(book)
    }

    pub fn find_by_id(&self, id: i64) -> StoreResult<Option<Book>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Snapshot of every stored book, ordered by id
    pub fn find_all(&self) -> StoreResult<Vec<Book>> {
        let mut books: Vec<Book> = self.read()?.values().cloned().collect();
        books.sort_by_key(|book| book.id);
        Ok(books)
    }

    /// Remove a book if present; absent ids are ignored
    pub fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.write()?.remove(&id);
        Ok(())
    }

    /// Overwrite an existing entry, keeping its id. Returns `None` without
    /// inserting anything when `id` is unknown.
    pub fn replace(&self, id: i64, mut book: Book) -> StoreResult<Option<Book>> {
        let mut books = self.write()?;
        match books.get_mut(&id) {
            Some(slot) => {
                book.id = Some(id);
                *slot = book.clone();
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// Remove and return a book
    pub fn remove(&self, id: i64) -> StoreResult<Option<Book>> {
        Ok(self.write()?.remove(&id))
    }

    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Store the two sample books shipped with the service (ids 1 and 2 on a
    /// fresh store)
    pub fn seed_sample_books(&self) -> StoreResult<()> {
        self.save(Book::new("1984", "George Orwell", "9780451524935"))?;
        self.save(Book::new("Brave New World", "Aldous Huxley", "9780060850524"))?;
        Ok(())
    }
}
