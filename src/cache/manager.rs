//! Cache manager for persisting API responses to disk
//!
//! Provides a `CacheManager` that stores serializable data to JSON files with
//! expiry timestamps. All backend failures degrade to a cache miss (on read)
//! or a no-op (on write); they are logged and never surfaced to callers.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires
    expires_at: DateTime<Utc>,
}

/// Manages reading and writing cached data to disk
///
/// The cache manager stores data as JSON files in an XDG-compliant cache
/// directory (`~/.cache/launchtrack/` on Linux). Each entry carries an expiry
/// timestamp; an expired entry is reported exactly like a missing one.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "launchtrack")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager with a custom cache directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Writes data to the cache with the given TTL in seconds
    ///
    /// Overwrites any existing entry at `key`. Returns `false` if the write
    /// failed for any reason; the failure is logged and otherwise ignored.
    pub fn set<T: Serialize>(&self, key: &str, data: &T, ttl_secs: u64) -> bool {
        if let Err(e) = self.ensure_dir() {
            warn!(key, error = %e, "cache write failed: cannot create cache directory");
            return false;
        }

        let now = Utc::now();
        let entry = CacheEntry {
            data,
            cached_at: now,
            expires_at: now + Duration::seconds(ttl_secs as i64),
        };

        let json = match serde_json::to_string(&entry) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "cache write failed: cannot serialize entry");
                return false;
            }
        };

        match fs::write(self.cache_path(key), json) {
            Ok(()) => {
                debug!(key, ttl_secs, "cache entry written");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "cache write failed");
                false
            }
        }
    }

    /// Reads an unexpired entry from the cache
    ///
    /// Returns `None` if the entry is missing, expired, or cannot be read or
    /// parsed. Callers cannot distinguish these cases; backend problems are
    /// only logged.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.cache_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(key, error = %e, "cache read failed");
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key, error = %e, "cache read failed: cannot parse entry");
                return None;
            }
        };

        if Utc::now() > entry.expires_at {
            debug!(key, "cache entry expired");
            return None;
        }

        debug!(key, "cache hit");
        Some(entry.data)
    }

    /// Removes a single cache entry
    ///
    /// Returns `true` if an entry was removed. Administrative; not used in
    /// the hot read path.
    pub fn delete(&self, key: &str) -> bool {
        match fs::remove_file(self.cache_path(key)) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                warn!(key, error = %e, "cache delete failed");
                false
            }
        }
    }

    /// Removes every cache entry in the cache directory
    ///
    /// Returns `true` if the directory was cleared (or did not exist).
    pub fn clear_all(&self) -> bool {
        let entries = match fs::read_dir(&self.cache_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return true,
            Err(e) => {
                warn!(error = %e, "cache clear failed: cannot read cache directory");
                return false;
            }
        };

        let mut ok = true;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Err(e) = fs::remove_file(&path) {
                    warn!(path = %path.display(), error = %e, "cache clear failed to remove entry");
                    ok = false;
                }
            }
        }
        ok
    }
}
