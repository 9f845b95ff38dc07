pub mod seed;

pub use seed::seed_properties;

use crate::models::{Property, PropertyDraft, PropertyPatch, PLACEHOLDER_IMAGE};
use std::sync::Arc;
use tracing::debug;

/// In-memory collection of listings for one session.
///
/// The store is the single source of truth every view reads from.
/// Mutations publish a fresh snapshot rather than touching one already
/// handed out, so a view holding an older `Arc<[Property]>` keeps seeing
/// the state it rendered from.
///
/// Ids come from a monotonic counter owned by the store; removing a
/// listing never frees its id for reuse.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    snapshot: Arc<[Property]>,
    next_id: u64,
}

impl PropertyStore {
    /// Empty store, first id will be "1"
    pub fn new() -> Self {
        Self::from_properties(Vec::new())
    }

    /// Store preloaded with the fixed seed listings (ids "1".."6")
    pub fn with_seed() -> Self {
        Self::from_properties(seed::seed_properties())
    }

    /// Store over an arbitrary initial collection. The id counter starts
    /// one past the highest numeric id already present, so later adds can
    /// never collide with an initial record; with no numeric ids it falls
    /// back to one past the initial length.
    pub fn from_properties(properties: Vec<Property>) -> Self {
        let max_id = properties
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max();
        let next_id = max_id.unwrap_or(properties.len() as u64) + 1;
        Self {
            snapshot: properties.into(),
            next_id,
        }
    }

    /// Current published snapshot, newest listing first
    pub fn snapshot(&self) -> Arc<[Property]> {
        Arc::clone(&self.snapshot)
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Look up a listing by id in the current snapshot
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.snapshot.iter().find(|p| p.id == id)
    }

    /// Assign the next id to `draft` and prepend it to the collection.
    /// Always succeeds; returns the stored record.
    pub fn add(&mut self, draft: PropertyDraft) -> &Property {
        let id = self.next_id.to_string();
        self.next_id += 1;

        let image = if draft.image.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            draft.image
        };

        let property = Property {
            id,
            title: draft.title,
            price: draft.price,
            location: draft.location,
            status: draft.status,
            image,
            coordinates: draft.coordinates,
            size: draft.size,
            property_type: draft.property_type,
            description: draft.description,
        };
        debug!("added listing {} ({})", property.id, property.title);

        let mut next = Vec::with_capacity(self.snapshot.len() + 1);
        next.push(property);
        next.extend(self.snapshot.iter().cloned());
        self.snapshot = next.into();
        &self.snapshot[0]
    }

    /// Merge `patch` over the listing with `id`. Silent no-op if absent.
    pub fn update(&mut self, id: &str, patch: PropertyPatch) {
        let next: Vec<Property> = self
            .snapshot
            .iter()
            .map(|p| {
                if p.id == id {
                    let mut updated = p.clone();
                    patch.apply(&mut updated);
                    debug!("updated listing {}", id);
                    updated
                } else {
                    p.clone()
                }
            })
            .collect();
        self.snapshot = next.into();
    }

    /// Drop the listing with `id`. Silent no-op if absent.
    pub fn remove(&mut self, id: &str) {
        let next: Vec<Property> = self
            .snapshot
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        if next.len() < self.snapshot.len() {
            debug!("removed listing {}", id);
        }
        self.snapshot = next.into();
    }
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self::new()
    }
}
