//! Class inheritance snapshot supplied by the host engine
//!
//! The engine's config space is a forest of single-inheritance classes: every
//! class has at most one parent, root classes have none. The host builds this
//! snapshot once at load time and the rest of the crate only reads it, so it
//! can be shared across threads without locking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Immutable view of the engine's class-inheritance table.
///
/// Maps each known class name to its parent class name, or `None` for roots.
/// Construction consumes the full table up front; there is no way to add or
/// remove classes afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassHierarchy {
    parents: HashMap<String, Option<String>>,
}

impl ClassHierarchy {
    /// Create an empty hierarchy (useful as a test fixture, not much else).
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Build a hierarchy from `(class, parent)` pairs.
    ///
    /// A parent of `None` marks a root class. Parents referenced by a child
    /// but never listed themselves are added as implicit roots, matching how
    /// the engine treats forward-declared classes.
    pub fn from_links<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<S>)>,
        S: Into<String>,
    {
        let mut parents: HashMap<String, Option<String>> = HashMap::new();
        for (class, parent) in links {
            let parent = parent.map(Into::into);
            parents.insert(class.into(), parent.clone());
            if let Some(p) = parent {
                parents.entry(p).or_insert(None);
            }
        }
        debug!("Built class hierarchy with {} classes", parents.len());
        Self { parents }
    }

    /// Parse a hierarchy from a JSON snapshot exported by the host.
    ///
    /// The expected shape is a flat object of `"Class": "Parent"` entries,
    /// with `null` for root classes.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let parents: HashMap<String, Option<String>> = serde_json::from_str(json)?;
        Ok(Self::from_links(parents))
    }

    /// Whether `class` is present in the snapshot.
    pub fn contains(&self, class: &str) -> bool {
        self.parents.contains_key(class)
    }

    /// Immediate parent of `class`, if it has one.
    ///
    /// Returns `None` both for root classes and for unknown classes; callers
    /// that need to distinguish the two should check [`contains`] first.
    ///
    /// [`contains`]: ClassHierarchy::contains
    pub fn parent_of(&self, class: &str) -> Option<&str> {
        self.parents.get(class)?.as_deref()
    }

    /// Number of classes in the snapshot.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the snapshot holds no classes at all.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterate over the ancestor chain of `class`, starting with `class`
    /// itself and ending at its root.
    ///
    /// The iterator does not guard against cycles; the resolver layers its
    /// own visited-set check on top.
    pub fn ancestors<'a>(&'a self, class: &'a str) -> Ancestors<'a> {
        Ancestors {
            hierarchy: self,
            current: self.contains(class).then_some(class),
        }
    }
}

/// Iterator over a class and its ancestors, nearest first.
pub struct Ancestors<'a> {
    hierarchy: &'a ClassHierarchy,
    current: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let class = self.current?;
        self.current = self.hierarchy.parent_of(class);
        Some(class)
    }
}
