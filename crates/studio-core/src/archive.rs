//! Asset archive: bounded, newest-first history of generated assets.
//!
//! Persisted as one JSON array under "archive". The archive is shared by
//! every identity on the device.

use std::collections::HashSet;
use std::rc::Rc;

use studio_types::asset::{Asset, AssetKind};

use crate::ports::KvStore;
use crate::Recovery;

pub const ARCHIVE_KEY: &str = "archive";

pub struct AssetArchive {
    store: Rc<dyn KvStore>,
    capacity: usize,
    assets: Vec<Asset>,
    recoveries: Vec<Recovery>,
}

impl AssetArchive {
    /// An empty archive that has not read storage.
    pub fn new(store: Rc<dyn KvStore>, capacity: usize) -> Self {
        Self {
            store,
            capacity: capacity.max(1),
            assets: Vec::new(),
            recoveries: Vec::new(),
        }
    }

    /// Restore the archive from storage. Missing data gives an empty archive;
    /// unreadable data is logged and also gives an empty archive.
    pub fn load(store: Rc<dyn KvStore>, capacity: usize) -> Self {
        let mut archive = Self::new(store, capacity);
        archive.reload();
        archive
    }

    pub fn reload(&mut self) {
        self.assets = match self.store.get(ARCHIVE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Asset>>(&raw) {
                Ok(stored) => {
                    let stored_len = stored.len();
                    let assets = normalize(stored, self.capacity);
                    if assets.len() != stored_len {
                        log::info!(
                            "Archive trimmed from {} to {} entries",
                            stored_len,
                            assets.len()
                        );
                        self.persist_list(&assets);
                    }
                    assets
                }
                Err(e) => {
                    self.recover(e.to_string());
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                self.recover(e.to_string());
                Vec::new()
            }
        };
    }

    /// Prepend `asset`, drop the oldest beyond capacity, persist.
    ///
    /// An asset whose id is already archived replaces the older entry.
    pub fn record(&mut self, asset: Asset) {
        self.assets.retain(|a| a.id() != asset.id());
        self.assets.insert(0, asset);
        self.assets.truncate(self.capacity);
        self.persist();
    }

    /// Snapshot, newest first.
    pub fn all(&self) -> Vec<Asset> {
        self.assets.clone()
    }

    pub fn filter_kind(&self, kind: AssetKind) -> Vec<Asset> {
        self.assets
            .iter()
            .filter(|a| a.kind() == kind)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.assets.clear();
        if let Err(e) = self.store.remove(ARCHIVE_KEY) {
            log::warn!("Failed to remove archive: {}", e);
        }
    }

    pub fn take_recoveries(&mut self) -> Vec<Recovery> {
        std::mem::take(&mut self.recoveries)
    }

    fn persist(&self) {
        self.persist_list(&self.assets);
    }

    fn persist_list(&self, assets: &[Asset]) {
        let result = serde_json::to_string(assets)
            .map_err(studio_types::StudioError::from)
            .and_then(|json| self.store.set(ARCHIVE_KEY, &json));
        if let Err(e) = result {
            log::warn!("Failed to persist archive: {}", e);
        }
    }

    fn recover(&mut self, detail: String) {
        log::warn!("Unreadable archive ({}); starting empty", detail);
        self.recoveries.push(Recovery {
            key: ARCHIVE_KEY.to_string(),
            detail,
        });
    }
}

/// Keep the first (newest) occurrence of each id, then cap the length.
fn normalize(stored: Vec<Asset>, capacity: usize) -> Vec<Asset> {
    let mut seen = HashSet::new();
    stored
        .into_iter()
        .filter(|a| seen.insert(a.id().to_string()))
        .take(capacity)
        .collect()
}
