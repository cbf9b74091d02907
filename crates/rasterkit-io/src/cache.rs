//! Path-keyed image cache
//!
//! The cache maps a file path to a *weak* handle on the decoded buffer. As
//! long as some caller holds the image, loading the same path again returns
//! the very same buffer ([`RasterImage::same_buffer`]). Once every strong
//! handle is dropped the entry is dead, and the next load decodes the file
//! again.
//!
//! Residency is best effort: the cache never keeps an image alive on its
//! own, and when it is full it forgets the oldest entry even if that entry
//! is still alive (the caller's handle stays valid; only sharing is lost).
//!
//! Files are decoded outside the lock, so two threads loading the same
//! uncached path may both decode it; the first insert wins and the second
//! caller receives the winner's buffer.

use crate::{IoResult, read_image, write_image};
use log::{debug, warn};
use rasterkit_core::{RasterImage, WeakRasterImage};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Default number of entries kept by the cache
pub const DEFAULT_CAPACITY: usize = 32;

/// Cache configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Maximum number of entries, live or dead; at least 1
    pub capacity: usize,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheOptions {
    /// Set the capacity (clamped to at least 1)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }
}

#[derive(Debug)]
struct Entry {
    image: WeakRasterImage,
    /// Insertion order, for eviction
    seq: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<PathBuf, Entry>,
    next_seq: u64,
}

impl CacheState {
    fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| !e.image.is_reclaimed());
        before - self.entries.len()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.seq)
            .map(|(k, _)| k.clone());
        if let Some(key) = oldest {
            warn!("image cache full, evicting live entry {}", key.display());
            self.entries.remove(&key);
        }
    }
}

/// Path-keyed cache of decoded images held through weak references
#[derive(Debug, Default)]
pub struct ImageCache {
    state: Mutex<CacheState>,
    options: CacheOptions,
}

/// Cache key: the canonical path when the file exists, the path as given
/// otherwise.
fn cache_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

impl ImageCache {
    /// Create an empty cache
    pub fn new(options: CacheOptions) -> Self {
        Self {
            state: Mutex::default(),
            options: CacheOptions::default().capacity(options.capacity),
        }
    }

    /// The process-wide cache used by [`crate::load`] and [`crate::save`]
    pub fn global() -> &'static ImageCache {
        static GLOBAL: OnceLock<ImageCache> = OnceLock::new();
        GLOBAL.get_or_init(|| ImageCache::new(CacheOptions::default()))
    }

    /// Options in effect, with the capacity already clamped
    pub fn options(&self) -> CacheOptions {
        self.options
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // the map stays consistent even if a holder panicked
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load an image, sharing the buffer with any live handle from an
    /// earlier load of the same path.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`](crate::IoError::FileNotFound) for a
    /// missing file and [`IoError::DecodeError`](crate::IoError::DecodeError)
    /// if decoding fails.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> IoResult<RasterImage> {
        let key = cache_key(path.as_ref());

        if let Some(image) = self.lookup(&key) {
            debug!("image cache hit: {}", key.display());
            return Ok(image);
        }

        debug!("image cache miss: {}", key.display());
        let image = read_image(&key)?;
        Ok(self.insert(key, image))
    }

    fn lookup(&self, key: &Path) -> Option<RasterImage> {
        let mut state = self.lock();
        let entry = state.entries.get(key)?;
        match entry.image.upgrade() {
            Some(image) => Some(image),
            None => {
                debug!("image cache entry reclaimed: {}", key.display());
                state.entries.remove(key);
                None
            }
        }
    }

    /// Record `image` under `key` and return the handle callers should use.
    fn insert(&self, key: PathBuf, image: RasterImage) -> RasterImage {
        let mut state = self.lock();

        // another thread may have finished decoding the same file first
        if let Some(live) = state.entries.get(&key).and_then(|e| e.image.upgrade()) {
            return live;
        }

        if !state.entries.contains_key(&key) && state.entries.len() >= self.options.capacity {
            let pruned = state.prune();
            if pruned > 0 {
                debug!("image cache pruned {pruned} dead entries");
            }
            if state.entries.len() >= self.options.capacity {
                state.evict_oldest();
            }
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.entries.insert(
            key,
            Entry {
                image: image.downgrade(),
                seq,
            },
        );
        image
    }

    /// Write `image` as PNG and drop any cache entry for `path`, so the
    /// next load decodes the new file.
    pub fn save<P: AsRef<Path>>(&self, path: P, image: &RasterImage) -> IoResult<()> {
        let path = path.as_ref();
        write_image(image, path)?;
        if self.invalidate(path) {
            debug!("image cache invalidated after save: {}", path.display());
        }
        Ok(())
    }

    /// `true` if `path` has a live entry.
    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        let key = cache_key(path.as_ref());
        self.lock()
            .entries
            .get(&key)
            .is_some_and(|e| !e.image.is_reclaimed())
    }

    /// Forget the entry for `path`. Returns `true` if there was one.
    pub fn invalidate<P: AsRef<Path>>(&self, path: P) -> bool {
        let key = cache_key(path.as_ref());
        self.lock().entries.remove(&key).is_some()
    }

    /// Forget every entry.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    /// Drop dead entries; returns how many were removed.
    pub fn prune(&self) -> usize {
        self.lock().prune()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.lock()
            .entries
            .values()
            .filter(|e| !e.image.is_reclaimed())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
