//! Position index: maps element keys to heap slots
//!
//! An open-addressing hash table with linear probing. The heap consults it to
//! find where an element currently lives so that priority changes and
//! arbitrary removals do not need a linear scan of the heap array.
//!
//! # Layout
//!
//! Every cell is either empty or holds an entry `(key, slot)`. Removing a key
//! does not empty its cell: the slot is replaced by the absent sentinel
//! (`None`) so probe chains running through the cell stay intact. Setting the
//! same key again finds the dead entry by identity and revives it in place.
//!
//! When the share of occupied cells exceeds [`MAX_LOAD_FACTOR`] the table is
//! rebuilt from its live entries. It doubles if the live entries alone are
//! over the threshold; otherwise it keeps its capacity and only sheds dead
//! entries, so churning through many distinct keys does not grow it.
//!
//! Each doubling also doubles a scale factor `s`, and the raw key hash is
//! multiplied by `2s - 1` before reduction modulo the capacity. The
//! multiplier starts at 1 and stays odd, so a fresh table is a plain modulo
//! and a resized table does not repeat the old distribution.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::position_index::PositionIndex;
//!
//! let mut index = PositionIndex::with_capacity(8);
//! index.set("a-1", 0);
//! index.set("b-2", 1);
//! assert_eq!(index.get("b-2"), Ok(1));
//!
//! index.remove("a-1");
//! assert!(!index.contains("a-1"));
//! ```

use crate::config::DEFAULT_INDEX_CAPACITY;
use crate::traits::{KeyHasher, QueueError};

/// Occupied-cell ratio above which the table doubles
pub const MAX_LOAD_FACTOR: f64 = 0.6;

/// Character skipped by [`CharSumHasher`]
pub const KEY_SEPARATOR: char = '-';

/// Hash of the form used by graph node ids such as `"a-12"`
///
/// Sums the characters of the key, skipping [`KEY_SEPARATOR`]. Alphabetic
/// characters contribute their code point; every other character contributes
/// its code point minus 48, which is the digit value for ASCII digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSumHasher;

impl KeyHasher for CharSumHasher {
    fn hash_key(&self, key: &str) -> u64 {
        let sum = key
            .chars()
            .filter(|&c| c != KEY_SEPARATOR)
            .fold(0i64, |acc, c| {
                let code = c as i64;
                if c.is_alphabetic() {
                    acc.wrapping_add(code)
                } else {
                    acc.wrapping_add(code - 48)
                }
            });
        sum as u64
    }
}

/// Default hasher, backed by `rustc_hash::FxHasher`
///
/// [`CharSumHasher`] maps every id with the same characters (and every id
/// whose digits add up alike) to one cell, which turns linear probing
/// quadratic on large graphs. Fx spreads such ids at a similar cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FxKeyHasher;

impl KeyHasher for FxKeyHasher {
    fn hash_key(&self, key: &str) -> u64 {
        use std::hash::Hasher;

        let mut hasher = rustc_hash::FxHasher::default();
        hasher.write(key.as_bytes());
        hasher.finish()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    key: Box<str>,
    /// `None` is the absent sentinel left behind by `remove`
    slot: Option<usize>,
}

/// Result of probing for a key
enum Probe {
    /// Cell holding an entry (live or dead) for the key
    Found(usize),
    /// First empty cell on the probe chain
    Vacant(usize),
}

/// Open-addressing table from key to heap slot
#[derive(Debug, Clone)]
pub struct PositionIndex<H = FxKeyHasher> {
    cells: Vec<Option<Entry>>,
    /// Cells holding an entry, live or dead
    occupied: usize,
    /// Entries whose slot is not the absent sentinel
    live: usize,
    /// Hash scale factor, doubled on every resize
    scale: u64,
    hasher: H,
}

impl PositionIndex<FxKeyHasher> {
    /// Creates an index with [`DEFAULT_INDEX_CAPACITY`] cells
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INDEX_CAPACITY)
    }

    /// Creates an index with `capacity` cells (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxKeyHasher)
    }
}

impl Default for PositionIndex<FxKeyHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: KeyHasher> PositionIndex<H> {
    /// Creates an index with `capacity` cells using a custom hasher
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        let capacity = capacity.max(1);
        Self {
            cells: empty_cells(capacity),
            occupied: 0,
            live: 0,
            scale: 1,
            hasher,
        }
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no key is live
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of cells in the table
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Share of cells holding an entry, dead entries included
    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.cells.len() as f64
    }

    /// Returns true if `key` has a live entry
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the heap slot recorded for `key`
    ///
    /// # Errors
    /// [`QueueError::KeyNotFound`] if the key is absent or was removed.
    pub fn get(&self, key: &str) -> Result<usize, QueueError> {
        match self.probe(key) {
            Probe::Found(cell) => self.cells[cell]
                .as_ref()
                .and_then(|entry| entry.slot)
                .ok_or(QueueError::KeyNotFound),
            Probe::Vacant(_) => Err(QueueError::KeyNotFound),
        }
    }

    /// Records `slot` for `key`, inserting the key if needed
    ///
    /// A dead entry for the same key is revived in its old cell. Inserting
    /// into a fresh cell may rebuild the table, see [`PositionIndex::resize`]
    /// and [`PositionIndex::purge`].
    pub fn set(&mut self, key: &str, slot: usize) {
        match self.probe(key) {
            Probe::Found(cell) => {
                if let Some(entry) = self.cells[cell].as_mut() {
                    if entry.slot.is_none() {
                        self.live += 1;
                    }
                    entry.slot = Some(slot);
                }
            }
            Probe::Vacant(cell) => {
                self.cells[cell] = Some(Entry {
                    key: key.into(),
                    slot: Some(slot),
                });
                self.occupied += 1;
                self.live += 1;
                if self.load_factor() > MAX_LOAD_FACTOR {
                    if self.live as f64 / self.cells.len() as f64 > MAX_LOAD_FACTOR {
                        self.resize();
                    } else {
                        self.purge();
                    }
                }
            }
        }
    }

    /// Marks `key` absent, returning true if it was live
    ///
    /// The cell stays occupied by the dead entry.
    pub fn remove(&mut self, key: &str) -> bool {
        if let Probe::Found(cell) = self.probe(key) {
            if let Some(entry) = self.cells[cell].as_mut() {
                if entry.slot.take().is_some() {
                    self.live -= 1;
                    return true;
                }
            }
        }
        false
    }

    /// Drops every entry, keeping the current capacity and scale
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.occupied = 0;
        self.live = 0;
    }

    /// Iterates over live `(key, slot)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.cells
            .iter()
            .flatten()
            .filter_map(|entry| entry.slot.map(|slot| (&*entry.key, slot)))
    }

    /// Doubles the table and the hash scale, then re-inserts live entries
    ///
    /// Dead entries are dropped, so occupancy afterwards equals the live count.
    pub fn resize(&mut self) {
        self.scale = self.scale.checked_mul(2).unwrap_or(self.scale);
        self.rebuild(self.cells.len() * 2);
    }

    /// Re-inserts live entries into a table of the same capacity and scale
    ///
    /// Drops every dead entry. Occupancy afterwards equals the live count.
    pub fn purge(&mut self) {
        self.rebuild(self.cells.len());
    }

    fn rebuild(&mut self, capacity: usize) {
        let old = std::mem::replace(&mut self.cells, empty_cells(capacity));
        self.occupied = 0;
        self.live = 0;

        for entry in old.into_iter().flatten() {
            if entry.slot.is_none() {
                continue;
            }
            // live entries never fill the rebuilt table
            if let Probe::Vacant(cell) = self.probe(&entry.key) {
                self.cells[cell] = Some(entry);
                self.occupied += 1;
                self.live += 1;
            }
        }
    }

    fn base_cell(&self, key: &str) -> usize {
        let capacity = self.cells.len() as u64;
        let multiplier = self.scale.wrapping_mul(2).wrapping_sub(1);
        (self.hasher.hash_key(key).wrapping_mul(multiplier) % capacity) as usize
    }

    /// Linear probe from the key's base cell, wrapping at the table end
    ///
    /// Every insert into an empty cell leaves occupancy at or below
    /// [`MAX_LOAD_FACTOR`] and revivals do not add occupancy, so at least one
    /// cell is always empty and the probe terminates.
    fn probe(&self, key: &str) -> Probe {
        let capacity = self.cells.len();
        debug_assert!(self.occupied < capacity);
        let mut cell = self.base_cell(key);
        loop {
            match &self.cells[cell] {
                None => return Probe::Vacant(cell),
                Some(entry) if &*entry.key == key => return Probe::Found(cell),
                Some(_) => cell = (cell + 1) % capacity,
            }
        }
    }
}

fn empty_cells(capacity: usize) -> Vec<Option<Entry>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
