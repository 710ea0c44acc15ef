//! Encode lookup tables and their cache.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use super::encode::encode_str;
use super::{push_escaped, EncodeOptions};

/// 128-slot lookup table: for each ASCII code, either the literal character or
/// its `%XX` escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeTable {
    slots: [Box<str>; 128],
}

impl EncodeTable {
    /// Builds the table for `exclude`. Alphanumerics are always literal;
    /// non-ASCII characters in `exclude` are ignored.
    pub fn build(exclude: &str) -> Self {
        let mut safe = [false; 128];
        for b in exclude.bytes().filter(u8::is_ascii) {
            safe[b as usize] = true;
        }
        let slots = std::array::from_fn(|i| {
            let b = i as u8;
            if b.is_ascii_alphanumeric() || safe[i] {
                (b as char).to_string().into_boxed_str()
            } else {
                let mut s = String::with_capacity(3);
                push_escaped(&mut s, b);
                s.into_boxed_str()
            }
        });
        Self { slots }
    }

    /// Entry for an ASCII code. Panics if `code >= 128`.
    pub fn get(&self, code: u8) -> &str {
        &self.slots[code as usize]
    }
}

/// Append-only cache of [`EncodeTable`]s keyed by exclude string.
///
/// Entries are never evicted: memory grows with the number of distinct exclude
/// strings seen. Do not feed it an unbounded set of caller-controlled values.
/// Tables are fully built before they are published, so concurrent readers
/// only ever see complete tables.
#[derive(Debug, Default)]
pub struct EncodeCache {
    tables: RwLock<HashMap<String, Arc<EncodeTable>>>,
}

impl EncodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used by the free `encode*` functions.
    pub fn global() -> &'static EncodeCache {
        static GLOBAL: OnceLock<EncodeCache> = OnceLock::new();
        GLOBAL.get_or_init(EncodeCache::new)
    }

    /// Returns the table for `exclude`, building and caching it on first use.
    pub fn table(&self, exclude: &str) -> Arc<EncodeTable> {
        // A poisoned lock still holds only complete tables.
        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(exclude)
        {
            return Arc::clone(table);
        }

        let built = Arc::new(EncodeTable::build(exclude));
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let table = tables.entry(exclude.to_string()).or_insert_with(|| {
            tracing::debug!(exclude = %exclude, "built encode table");
            built
        });
        Arc::clone(table)
    }

    /// Encodes `input` with tables from this cache instead of the global one.
    pub fn encode(&self, input: &str, opts: &EncodeOptions<'_>) -> String {
        let table = self.table(opts.exclude);
        encode_str(input, &table, opts.keep_escaped)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
