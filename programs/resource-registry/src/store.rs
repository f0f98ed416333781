//! Resource storage primitives. Stores never validate; that is the
//! engine's job.

use std::collections::BTreeMap;

use crate::state::{HashIndex, Resource, ResourceUpdate};

pub trait ResourceStore {
    fn get(&self, id: u64) -> Option<&Resource>;

    fn id_by_hash(&self, hash: &[u8; 32]) -> Option<u64>;

    fn contains_hash(&self, hash: &[u8; 32]) -> bool {
        self.id_by_hash(hash).is_some()
    }

    /// Insert keyed by both id and hash. Returns false, leaving the store
    /// untouched, when either key is already taken.
    fn insert(&mut self, id: u64, resource: Resource) -> bool;

    /// Overwrite an existing record. The hash must not change.
    fn replace(&mut self, id: u64, resource: Resource);

    fn update_record(&self, id: u64) -> Option<&ResourceUpdate>;

    fn put_update(&mut self, id: u64, update: ResourceUpdate);
}

/// Ordered in-memory store for deterministic hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    resources: BTreeMap<u64, Resource>,
    updates: BTreeMap<u64, ResourceUpdate>,
    by_hash: BTreeMap<[u8; 32], u64>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Resource)> {
        self.resources.iter().map(|(id, resource)| (*id, resource))
    }
}

impl ResourceStore for MemoryStore {
    fn get(&self, id: u64) -> Option<&Resource> {
        self.resources.get(&id)
    }

    fn id_by_hash(&self, hash: &[u8; 32]) -> Option<u64> {
        self.by_hash.get(hash).copied()
    }

    fn insert(&mut self, id: u64, resource: Resource) -> bool {
        if self.resources.contains_key(&id) || self.by_hash.contains_key(&resource.hash) {
            return false;
        }
        self.by_hash.insert(resource.hash, id);
        self.resources.insert(id, resource);
        true
    }

    fn replace(&mut self, id: u64, resource: Resource) {
        if let Some(slot) = self.resources.get_mut(&id) {
            *slot = resource;
        }
    }

    fn update_record(&self, id: u64) -> Option<&ResourceUpdate> {
        self.updates.get(&id)
    }

    fn put_update(&mut self, id: u64, update: ResourceUpdate) {
        self.updates.insert(id, update);
    }
}

/// Window over the accounts loaded by a single instruction.
///
/// Only the resource at `id` is visible. A vacant window wraps a freshly
/// created resource account together with its hash index entry; a window
/// without a resource account sees nothing at all.
pub struct AccountStore<'a> {
    id: u64,
    resource: Option<&'a mut Resource>,
    occupied: bool,
    hash_index: Option<&'a mut HashIndex>,
    update: Option<&'a mut ResourceUpdate>,
    has_update: bool,
}

impl<'a> AccountStore<'a> {
    /// Window over a resource account that may not have been supplied.
    pub fn loaded(id: u64, resource: Option<&'a mut Resource>) -> Self {
        Self {
            id,
            occupied: resource.is_some(),
            resource,
            hash_index: None,
            update: None,
            has_update: false,
        }
    }

    pub fn existing(id: u64, resource: &'a mut Resource) -> Self {
        Self::loaded(id, Some(resource))
    }

    pub fn vacant(id: u64, resource: &'a mut Resource, hash_index: &'a mut HashIndex) -> Self {
        Self {
            id,
            resource: Some(resource),
            occupied: false,
            hash_index: Some(hash_index),
            update: None,
            has_update: false,
        }
    }

    /// Attach the update audit slot. `has_update` tells whether it held a
    /// record before this instruction.
    pub fn with_update(mut self, update: &'a mut ResourceUpdate, has_update: bool) -> Self {
        self.update = Some(update);
        self.has_update = has_update;
        self
    }
}

impl ResourceStore for AccountStore<'_> {
    fn get(&self, id: u64) -> Option<&Resource> {
        if !self.occupied || id != self.id {
            return None;
        }
        self.resource.as_deref()
    }

    fn id_by_hash(&self, hash: &[u8; 32]) -> Option<u64> {
        if self.get(self.id).is_some_and(|resource| &resource.hash == hash) {
            return Some(self.id);
        }
        self.hash_index.as_deref().and_then(|index| index.resolves(hash))
    }

    fn insert(&mut self, id: u64, resource: Resource) -> bool {
        if self.occupied || id != self.id {
            return false;
        }
        let (Some(slot), Some(index)) =
            (self.resource.as_deref_mut(), self.hash_index.as_deref_mut())
        else {
            return false;
        };
        if index.is_registered {
            return false;
        }

        index.hash = resource.hash;
        index.resource_id = id;
        index.is_registered = true;
        *slot = resource;
        self.occupied = true;
        true
    }

    fn replace(&mut self, id: u64, resource: Resource) {
        if !self.occupied || id != self.id {
            return;
        }
        if let Some(slot) = self.resource.as_deref_mut() {
            *slot = resource;
        }
    }

    fn update_record(&self, id: u64) -> Option<&ResourceUpdate> {
        if !self.has_update || id != self.id {
            return None;
        }
        self.update.as_deref()
    }

    fn put_update(&mut self, id: u64, update: ResourceUpdate) {
        if id != self.id {
            return;
        }
        if let Some(slot) = self.update.as_deref_mut() {
            *slot = update;
            self.has_update = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, Format, License};
    use anchor_lang::prelude::Pubkey;

    fn resource(fill: u8) -> Resource {
        Resource {
            hash: [fill; 32],
            title: "Title".to_string(),
            description: String::new(),
            ipfs_link: "ipfs://x".to_string(),
            owner: Pubkey::new_from_array([1u8; 32]),
            registered_at: 0,
            category: Category::Ebook,
            status: true,
            format: Format::Pdf,
            visibility: true,
            license: License::CcBy,
            max_versions: 3,
            current_version: 1,
            access_fee: 0,
        }
    }

    fn blank_update() -> ResourceUpdate {
        ResourceUpdate {
            title: String::new(),
            description: String::new(),
            ipfs_link: String::new(),
            updated_at: 0,
            updater: Pubkey::default(),
        }
    }

    #[test]
    fn memory_store_insert_is_keyed_by_id_and_hash() {
        let mut store = MemoryStore::default();
        assert!(store.insert(0, resource(1)));
        assert!(!store.insert(0, resource(2)), "id already taken");
        assert!(!store.insert(1, resource(1)), "hash already taken");
        assert_eq!(store.len(), 1);
        assert_eq!(store.id_by_hash(&[1u8; 32]), Some(0));
        assert!(!store.contains_hash(&[2u8; 32]));
    }

    #[test]
    fn memory_store_replace_ignores_unknown_ids() {
        let mut store = MemoryStore::default();
        store.replace(4, resource(4));
        assert!(store.is_empty());
    }

    #[test]
    fn vacant_account_store_fills_resource_and_index() {
        let mut slot = resource(0);
        let mut index = HashIndex {
            hash: [0u8; 32],
            resource_id: 0,
            is_registered: false,
        };
        let mut store = AccountStore::vacant(7, &mut slot, &mut index);
        assert!(store.get(7).is_none());
        assert!(!store.contains_hash(&[5u8; 32]));
        assert!(!store.insert(8, resource(5)), "only the loaded id is writable");
        assert!(store.insert(7, resource(5)));
        assert_eq!(store.get(7).map(|r| r.hash), Some([5u8; 32]));
        assert_eq!(store.id_by_hash(&[5u8; 32]), Some(7));
        drop(store);

        assert!(index.is_registered);
        assert_eq!(index.resource_id, 7);
    }

    #[test]
    fn registered_index_reports_existing_hash() {
        let mut slot = resource(0);
        let mut index = HashIndex {
            hash: [5u8; 32],
            resource_id: 2,
            is_registered: true,
        };
        let mut store = AccountStore::vacant(3, &mut slot, &mut index);
        assert_eq!(store.id_by_hash(&[5u8; 32]), Some(2));
        assert!(!store.insert(3, resource(5)));
    }

    #[test]
    fn existing_account_store_tracks_update_slot() {
        let mut slot = resource(1);
        let mut update = blank_update();
        let mut store = AccountStore::existing(0, &mut slot).with_update(&mut update, false);
        assert!(store.update_record(0).is_none());

        let mut record = blank_update();
        record.title = "New".to_string();
        store.put_update(0, record.clone());
        assert_eq!(store.update_record(0), Some(&record));
    }

    #[test]
    fn window_without_resource_account_sees_nothing() {
        let mut update = blank_update();
        let mut store = AccountStore::loaded(4, None).with_update(&mut update, false);
        assert!(store.get(4).is_none());
        assert!(!store.contains_hash(&[1u8; 32]));
        assert!(!store.insert(4, resource(1)));
        store.replace(4, resource(1));
        assert!(store.get(4).is_none());
    }
}
