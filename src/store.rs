// src/store.rs
//
// Dashboard data loading. The cleaned file is read, capacities are derived
// from titles, and rows the charts cannot use are dropped. Results are
// memoized per file, keyed on modification time and size, so a reload after
// the normalizer runs again picks up the new data.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::SystemTime,
};

use crate::error::Result;
use crate::extract::enrich;
use crate::file::require_input;
use crate::model::{CleanListing, Listing};
use crate::table::read_rows;

/// Immutable, shareable dataset.
pub type DataSet = Arc<[Listing]>;

/// Keep rows with a RAM figure no larger than `max_ram_gb` (bigger values are
/// almost always misreads) and a storage figure.
pub fn prepare(rows: Vec<CleanListing>, max_ram_gb: u32) -> Vec<Listing> {
    rows.into_iter()
        .map(enrich)
        .filter(|l| l.ram_gb.is_some_and(|r| r <= max_ram_gb))
        .filter(|l| l.storage_gb.is_some())
        .collect()
}

pub fn load_listings(path: &Path, max_ram_gb: u32) -> Result<Vec<Listing>> {
    let rows: Vec<CleanListing> = read_rows(path)?;
    let total = rows.len();
    let kept = prepare(rows, max_ram_gb);
    logf!(
        "Store: loaded {} of {} rows from {} (dropped {} without usable RAM/SSD)",
        kept.len(), total, path.display(), total - kept.len()
    );
    Ok(kept)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Stamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl Stamp {
    fn of(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path)?;
        Ok(Self { modified: meta.modified().ok(), len: meta.len() })
    }
}

struct Entry {
    stamp: Stamp,
    data: DataSet,
}

/// Explicit memoization for `load_listings`.
pub struct DatasetCache {
    max_ram_gb: u32,
    entries: HashMap<PathBuf, Entry>,
}

/// Whether `DatasetCache::get` had to read the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loaded {
    Cached,
    Fresh,
}

impl DatasetCache {
    pub fn new(max_ram_gb: u32) -> Self {
        Self { max_ram_gb, entries: HashMap::new() }
    }

    pub fn get(&mut self, path: &Path) -> Result<(DataSet, Loaded)> {
        require_input(path)?;
        let stamp = Stamp::of(path)?;

        if let Some(e) = self.entries.get(path) {
            if e.stamp == stamp {
                logd!("Store: cache hit {}", path.display());
                return Ok((Arc::clone(&e.data), Loaded::Cached));
            }
        }

        let data: DataSet = load_listings(path, self.max_ram_gb)?.into();
        self.entries.insert(path.to_path_buf(), Entry { stamp, data: Arc::clone(&data) });
        Ok((data, Loaded::Fresh))
    }

    pub fn invalidate(&mut self, path: &Path) {
        self.entries.remove(path);
    }
}
