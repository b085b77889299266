//! Ordered in-memory table with a per-table identity counter.

use crate::models::RecordId;

/// A row that carries its own identity.
pub trait Record: Clone {
    fn id(&self) -> RecordId;
}

/// Rows in insertion order plus the next identity to hand out.
///
/// The counter only moves forward: removing a row never frees its identity.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    next_id: RecordId,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Table<T> {
    /// Create an empty table whose first identity is 1.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a table from rows that already carry identities.
    ///
    /// The counter resumes after the highest identity present.
    pub fn from_rows(rows: Vec<T>) -> Self {
        let next_id = rows.iter().map(Record::id).max().map_or(1, |max| max + 1);
        Self { rows, next_id }
    }

    /// Reserve the next identity, build the row from it and append it.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(RecordId) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.push(row.clone());
        row
    }

    /// First row with the given identity.
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// Remove the row with the given identity, keeping the order of the rest.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    /// Borrow the rows in insertion order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Owned copy of every row in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.rows.clone()
    }

    /// Owned copies of the rows matching `predicate`, in insertion order.
    pub fn filtered<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().filter(|row| predicate(row)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identity the next insert will receive.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }
}
