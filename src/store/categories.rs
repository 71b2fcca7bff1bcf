//! Category store, consumed read-only by the submission form.

use std::sync::Arc;
use tokio::sync::watch;

use crate::models::Category;

#[derive(Clone)]
pub struct CategoryStore {
    tx: Arc<watch::Sender<Vec<Category>>>,
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CategoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        let (tx, _rx) = watch::channel(categories);
        Self { tx: Arc::new(tx) }
    }

    /// Load categories from a JSON array of `{id, name}` records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn categories(&self) -> Vec<Category> {
        self.tx.borrow().clone()
    }

    pub fn set_categories(&self, categories: Vec<Category>) {
        self.tx.send_replace(categories);
    }

    pub fn get(&self, id: i64) -> Option<Category> {
        self.tx.borrow().iter().find(|c| c.id == id).cloned()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.tx.borrow().iter().any(|c| c.id == id)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Category>> {
        self.tx.subscribe()
    }
}
