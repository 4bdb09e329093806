use std::collections::HashMap;

use meridian_core::LookupKey;

/// Access to page-language detection results.
///
/// The two layers of `Option` separate "this key was never resolved"
/// (outer `None`) from "resolution ran and found no usable language"
/// (inner `None`). Both end up uninformative for the language signal,
/// but callers warming caches need the distinction.
pub trait ILanguageLookup: Send + Sync {
    fn lookup(&self, key: &LookupKey) -> Option<Option<&str>>;
}

/// In-memory language table keyed by the verbatim key string.
#[derive(Debug, Default, Clone)]
pub struct LanguageTable {
    entries: HashMap<String, Option<String>>,
}

impl LanguageTable {
    pub fn new(entries: HashMap<String, Option<String>>) -> Self {
        Self { entries }
    }

    /// Records a detected language for a key.
    pub fn insert(&mut self, key: impl Into<String>, lang: impl Into<String>) {
        self.entries.insert(key.into(), Some(lang.into()));
    }

    /// Records that resolution ran but produced no usable language.
    pub fn insert_unknown(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), None);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ILanguageLookup for LanguageTable {
    fn lookup(&self, key: &LookupKey) -> Option<Option<&str>> {
        self.entries.get(key.as_str()).map(|v| v.as_deref())
    }
}
