//! Card registry for spec lookup by name.
//!
//! Deck lists name cards; the registry turns those names into shared
//! `CardSpec`s. Every object made from the same name points at the same
//! `Arc`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::CardSpec;

/// Registry of card specs keyed by card name.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use convergence::cards::{CardRegistry, CardSpec, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry.register("Scout", CardSpec::new("Scout", CardType::Creature).with_stats(1, 1));
///
/// let a = registry.get("Scout").unwrap();
/// let b = registry.get("Scout").unwrap();
/// assert!(Arc::ptr_eq(a, b));
/// assert_eq!(a.name, "Scout");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Arc<CardSpec>>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a loaded card table, stamping each spec with its name.
    #[must_use]
    pub fn from_table(table: &FxHashMap<String, CardSpec>) -> Self {
        let mut registry = Self::new();
        for (name, spec) in table {
            registry.register(name.clone(), spec.clone());
        }
        registry
    }

    /// Register a spec under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, mut spec: CardSpec) -> Arc<CardSpec> {
        let name = name.into();
        spec.name.clone_from(&name);
        let spec = Arc::new(spec);
        self.cards.insert(name, Arc::clone(&spec));
        spec
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<CardSpec>> {
        self.cards.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<CardSpec>)> {
        self.cards.iter().map(|(name, spec)| (name.as_str(), spec))
    }
}
