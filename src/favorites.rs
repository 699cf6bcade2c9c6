use indexmap::IndexSet;

use crate::{KeyValueStore, ProductId, Result};

/// Store key holding the favorites as a JSON array of product ids.
pub const FAVORITES_KEY: &str = "ecom_favorites_v1";

/// The user's favorite products, read once from the store and written back on every change.
///
/// Insertion order is kept so the persisted array reads in the order the user added items.
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
    ids: IndexSet<ProductId>,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Reads the persisted favorites.
    ///
    /// A value that does not decode as an id array counts as "no favorites"; only a failing
    /// store is an error.
    pub fn load(store: S) -> Result<Self> {
        let ids = match store.get(FAVORITES_KEY)? {
            None => IndexSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<ProductId>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    tracing::warn!(key = FAVORITES_KEY, %err, "ignoring malformed favorites");
                    IndexSet::new()
                }
            },
        };
        tracing::debug!(count = ids.len(), "favorites loaded");
        Ok(Self { store, ids })
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> + '_ {
        self.ids.iter()
    }

    /// Adds `id` if absent, removes it otherwise, then persists.
    ///
    /// Returns whether `id` is a favorite afterwards. The in-memory set only changes once the
    /// store accepted the new value.
    pub fn toggle(&mut self, id: ProductId) -> Result<bool> {
        let mut next = self.ids.clone();
        let now_favorite = if next.shift_remove(&id) {
            false
        } else {
            next.insert(id);
            true
        };
        self.commit(next)?;
        Ok(now_favorite)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.commit(IndexSet::new())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, next: IndexSet<ProductId>) -> Result<()> {
        let raw = serde_json::to_string(&next)?;
        self.store.set(FAVORITES_KEY, &raw)?;
        self.ids = next;
        Ok(())
    }
}
