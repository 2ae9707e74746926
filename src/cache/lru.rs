//! LRU Engine Module
//!
//! Main cache engine combining a key index, the eviction list and an expiry
//! queue under a single reader/writer lock.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::contract::Cache;
use super::entry::{self, Entry};
use super::list::{EvictionList, Slot};
use crate::error::{CacheError, Result};

// == Sweep Report ==
/// Entries physically dropped by a call to [`LruCache::sweep`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sweep {
    /// Entries whose TTL had elapsed
    pub expired: usize,
    /// Purged entries still occupying slots
    pub reclaimed: usize,
}

impl Sweep {
    pub fn total(&self) -> usize {
        self.expired + self.reclaimed
    }
}

// == Engine State ==
/// State guarded by the engine lock.
///
/// Entries from an older generation are logically purged. They are never
/// promoted and every insertion goes to the front, so they always form a
/// contiguous tail of the eviction list.
struct Inner<V> {
    index: HashMap<String, Slot>,
    list: EvictionList<V>,
    /// (deadline, slot) for every entry carrying a TTL
    expiry: BTreeSet<(Instant, Slot)>,
    generation: u64,
    /// Physically present entries of the current generation
    len: usize,
}

impl<V> Inner<V> {
    fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            list: EvictionList::with_capacity(capacity),
            expiry: BTreeSet::new(),
            generation: 0,
            len: 0,
        }
    }

    // == Unlink ==
    /// Physically removes the entry at `slot` from index, list and expiry
    /// queue, keeping the live count in step.
    fn unlink(&mut self, slot: Slot) -> Option<Entry<V>> {
        let entry = self.list.remove(slot)?;
        self.forget(slot, &entry);
        Some(entry)
    }

    /// Drops the least recently used entry.
    fn evict_back(&mut self) -> Option<Entry<V>> {
        let (slot, entry) = self.list.pop_back()?;
        self.forget(slot, &entry);
        Some(entry)
    }

    /// Index, expiry queue and live count bookkeeping for a removed entry.
    fn forget(&mut self, slot: Slot, entry: &Entry<V>) {
        self.index.remove(&entry.key);
        if let Some(deadline) = entry.expires_at {
            self.expiry.remove(&(deadline, slot));
        }
        if entry.generation == self.generation {
            self.len -= 1;
        }
    }

    // == Reap Expired ==
    /// Drops every entry whose deadline is at or before `now`.
    fn reap_expired(&mut self, now: Instant) -> usize {
        let mut reaped = 0;
        while let Some(&(deadline, slot)) = self.expiry.first() {
            if deadline > now {
                break;
            }
            self.expiry.pop_first();
            if self.unlink(slot).is_some() {
                reaped += 1;
            }
        }
        reaped
    }

    // == Reclaim Purged ==
    /// Drops the purged tail of the eviction list.
    fn reclaim_purged(&mut self) -> usize {
        let mut reclaimed = 0;
        while let Some(slot) = self.list.back() {
            match self.list.get(slot) {
                Some(entry) if entry.generation != self.generation => {}
                _ => break,
            }
            self.evict_back();
            reclaimed += 1;
        }
        reclaimed
    }

    // == Lookup ==
    /// Finds the live slot for `key`, cleaning up purged or expired residue.
    fn lookup(&mut self, key: &str, now: Instant) -> Option<Slot> {
        let slot = *self.index.get(key)?;
        let generation = self.generation;
        let live = self
            .list
            .get(slot)
            .map_or(false, |e| e.generation == generation && !e.is_expired(now));
        if live {
            Some(slot)
        } else {
            self.unlink(slot);
            None
        }
    }

    // == Insert ==
    fn insert(&mut self, key: String, value: V, expires_at: Option<Instant>, capacity: usize) {
        if let Some(&slot) = self.index.get(&key) {
            let generation = self.generation;
            if let Some(entry) = self
                .list
                .get_mut(slot)
                .filter(|e| e.generation == generation)
            {
                // Overwrite: refresh value and deadline, usage is unchanged
                let previous = std::mem::replace(&mut entry.expires_at, expires_at);
                entry.value = value;
                if let Some(deadline) = previous {
                    self.expiry.remove(&(deadline, slot));
                }
                if let Some(deadline) = expires_at {
                    self.expiry.insert((deadline, slot));
                }
                self.list.move_to_front(slot);
                return;
            }
            self.unlink(slot);
        }

        while self.index.len() >= capacity {
            if self.evict_back().is_none() {
                break;
            }
        }

        let entry = Entry::new(key.clone(), value, expires_at, self.generation);
        let slot = self.list.push_front(entry);
        if let Some(deadline) = expires_at {
            self.expiry.insert((deadline, slot));
        }
        self.index.insert(key, slot);
        self.len += 1;
    }

    // == Live Keys ==
    fn live_keys(&mut self) -> Vec<String> {
        let generation = self.generation;
        let mut keys = Vec::with_capacity(self.len);
        let mut stale = Vec::new();
        for (slot, entry) in self.list.iter() {
            if entry.generation == generation {
                keys.push(entry.key.clone());
            } else {
                stale.push(slot);
            }
        }
        for slot in stale {
            self.unlink(slot);
        }
        keys
    }
}

// == LRU Cache ==
/// Fixed-capacity cache with LRU eviction and per-entry TTL.
///
/// Every operation runs to completion under one write lock, so concurrent
/// calls behave as some serial interleaving of them. Expired entries are
/// dropped at the start of each operation; purged entries are dropped
/// lazily when encountered.
pub struct LruCache<V> {
    name: String,
    capacity: usize,
    default_ttl: Duration,
    inner: RwLock<Inner<V>>,
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl<V: Clone> LruCache<V> {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of live entries, must be positive
    /// * `default_ttl` - TTL applied by [`LruCache::set`], zero = no expiry
    pub fn new(capacity: usize, default_ttl: Duration) -> Result<Self> {
        Self::with_name("default", capacity, default_ttl)
    }

    /// Same as [`LruCache::new`] with a diagnostic name.
    pub fn with_name(
        name: impl Into<String>,
        capacity: usize,
        default_ttl: Duration,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(0));
        }
        Ok(Self {
            name: name.into(),
            capacity,
            default_ttl,
            inner: RwLock::new(Inner::new(capacity)),
        })
    }

    // == Set ==
    /// Stores a value with the default TTL.
    pub fn set(&self, key: String, value: V) -> Result<()> {
        self.set_with_expiry(key, value, self.default_ttl)
    }

    // == Set With Expiry ==
    /// Stores a value that expires after `ttl` (zero = never).
    ///
    /// An existing key is overwritten and promoted. A new key evicts the
    /// least recently used entry when the cache is full.
    pub fn set_with_expiry(&self, key: String, value: V, ttl: Duration) -> Result<()> {
        let mut inner = self.inner.write();
        // Read the clock only once the lock is held
        let now = Instant::now();
        let expires_at = entry::deadline(now, ttl)?;

        inner.reap_expired(now);
        inner.insert(key, value, expires_at, self.capacity);
        Ok(())
    }

    // == Get ==
    /// Returns a copy of the value and marks the key as recently used.
    pub fn get(&self, key: &str) -> Result<V> {
        let mut inner = self.inner.write();
        let now = Instant::now();
        inner.reap_expired(now);

        let slot = inner
            .lookup(key, now)
            .ok_or_else(|| CacheError::KeyNotFound(key.to_string()))?;
        inner.list.move_to_front(slot);
        inner
            .list
            .get(slot)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::KeyNotFound(key.to_string()))
    }

    // == Remove ==
    /// Removes a key if present.
    pub fn remove(&self, key: &str) {
        let mut inner = self.inner.write();
        inner.reap_expired(Instant::now());
        if let Some(slot) = inner.index.get(key).copied() {
            inner.unlink(slot);
        }
    }

    // == Keys ==
    /// Returns live keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        let mut inner = self.inner.write();
        inner.reap_expired(Instant::now());
        inner.live_keys()
    }

    // == Length ==
    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        let mut inner = self.inner.write();
        inner.reap_expired(Instant::now());
        inner.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Purge ==
    /// Invalidates every entry in O(1) by moving to a new generation.
    pub fn purge(&self) {
        let mut inner = self.inner.write();
        inner.generation = inner.generation.wrapping_add(1);
        inner.len = 0;
    }

    // == Sweep ==
    /// Physically drops expired entries and purged residue.
    ///
    /// Never changes what other operations observe; it only releases memory
    /// that lazy cleanup would otherwise hold until the slots are reused.
    pub fn sweep(&self) -> Sweep {
        let mut inner = self.inner.write();
        let expired = inner.reap_expired(Instant::now());
        let reclaimed = inner.reclaim_purged();
        Sweep { expired, reclaimed }
    }

    // == Accessors ==
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl<V: Clone + Send + Sync> Cache<V> for LruCache<V> {
    fn set(&self, key: String, value: V) -> Result<()> {
        LruCache::set(self, key, value)
    }

    fn set_with_expiry(&self, key: String, value: V, ttl: Duration) -> Result<()> {
        LruCache::set_with_expiry(self, key, value, ttl)
    }

    fn get(&self, key: &str) -> Result<V> {
        LruCache::get(self, key)
    }

    fn remove(&self, key: &str) {
        LruCache::remove(self, key)
    }

    fn keys(&self) -> Vec<String> {
        LruCache::keys(self)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn purge(&self) {
        LruCache::purge(self)
    }
}
