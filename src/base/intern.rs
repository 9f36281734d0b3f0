//! Identifier interner.
//!
//! Names are backed by [`SmolStr`]: short identifiers live inline and longer ones
//! share a single heap allocation, so cloning a [`Name`] never allocates. The
//! interner deduplicates so every occurrence of the same identifier in a session
//! hands out clones of one stored value.

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// An interned identifier - cheap to clone, compares by text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(SmolStr);

impl Name {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::ops::Deref for Name {
    type Target = str;

    fn deref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::borrow::Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-wide identifier interner.
///
/// Safe to share between threads; interning takes a short lock.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Mutex<FxHashSet<SmolStr>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning the shared [`Name`] for it.
    pub fn intern(&self, s: &str) -> Name {
        let mut strings = self.strings.lock();
        if let Some(existing) = strings.get(s) {
            return Name(existing.clone());
        }
        let stored = SmolStr::new(s);
        strings.insert(stored.clone());
        Name(stored)
    }

    /// Get an interned name if it exists, without creating it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.strings.lock().get(s).cloned().map(Name)
    }

    /// Number of unique strings interned.
    pub fn len(&self) -> usize {
        self.strings.lock().len()
    }

    /// Returns true if no strings have been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.lock().is_empty()
    }
}
