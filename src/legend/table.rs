//! Legend table mapping CSV symbols to placement templates

use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while building a legend
#[derive(Debug, Error)]
pub enum LegendError {
    /// Two entries claim the same key
    #[error("duplicate legend key: {key:?}")]
    DuplicateKey { key: String },
}

/// A named template that can be stamped into the scene.
///
/// The handle is whatever the host uses to identify the asset behind the
/// name. The library never inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct Template<T> {
    pub name: String,
    pub handle: T,
}

impl<T> Template<T> {
    pub fn new(name: impl Into<String>, handle: T) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }
}

/// One key-to-template pairing in the editable entry list.
///
/// `template` is `None` while the author has not assigned one yet. The
/// key may be any string, including the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry<T> {
    pub key: String,
    pub template: Option<Template<T>>,
}

impl<T> LegendEntry<T> {
    pub fn new(key: impl Into<String>, template: Template<T>) -> Self {
        Self {
            key: key.into(),
            template: Some(template),
        }
    }

    /// An entry whose template has not been assigned yet
    pub fn unassigned(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            template: None,
        }
    }

    /// A blank entry, as appended when the list grows
    pub fn empty() -> Self {
        Self {
            key: String::new(),
            template: None,
        }
    }
}

/// Resize an entry list to `desired` elements.
///
/// Keeps the first `desired` entries in order, dropping any beyond that
/// and appending blank entries to make up a shortfall. The input slice
/// is never mutated.
pub fn resize_entries<T: Clone>(entries: &[LegendEntry<T>], desired: usize) -> Vec<LegendEntry<T>> {
    let mut resized: Vec<LegendEntry<T>> = entries.iter().take(desired).cloned().collect();
    resized.resize_with(desired, LegendEntry::empty);
    resized
}

/// Declarative legend description: a target entry count plus the entries
/// themselves, before key uniqueness has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendConfig<T> {
    pub desired_count: usize,
    pub entries: Vec<LegendEntry<T>>,
}

impl<T: Clone> LegendConfig<T> {
    pub fn new(desired_count: usize, entries: Vec<LegendEntry<T>>) -> Self {
        Self {
            desired_count,
            entries,
        }
    }

    /// The entry list brought to the desired length
    pub fn resized_entries(&self) -> Vec<LegendEntry<T>> {
        resize_entries(&self.entries, self.desired_count)
    }

    /// Build a keyed legend from the resized entries.
    ///
    /// Fails if two entries share a key. Blank padding entries all carry
    /// the empty-string key, so a config that pads by more than one
    /// entry cannot build until the blanks are filled in.
    pub fn build_legend(&self) -> Result<Legend<T>, LegendError> {
        Legend::from_entries(self.resized_entries())
    }
}

/// Keyed lookup table from CSV symbol to template slot.
///
/// Each key maps to an optional template: a present key with no template
/// is an unassigned slot, which is distinct from an absent key. Keys
/// keep their insertion order for iteration.
#[derive(Debug)]
pub struct Legend<T> {
    slots: HashMap<String, Option<Template<T>>>,
    order: Vec<String>,
}

impl<T> Default for Legend<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Legend<T> {
    /// Create a new empty legend
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key with an optional template slot
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        template: Option<Template<T>>,
    ) -> Result<(), LegendError> {
        let key = key.into();
        if self.slots.contains_key(&key) {
            return Err(LegendError::DuplicateKey { key });
        }
        self.order.push(key.clone());
        self.slots.insert(key, template);
        Ok(())
    }

    /// Build a legend from an entry list, rejecting duplicate keys
    pub fn from_entries(
        entries: impl IntoIterator<Item = LegendEntry<T>>,
    ) -> Result<Self, LegendError> {
        let mut legend = Self::new();
        for entry in entries {
            legend.insert(entry.key, entry.template)?;
        }
        Ok(legend)
    }

    /// Look up a symbol.
    ///
    /// Returns `None` when the symbol has no entry at all, `Some(None)`
    /// when it has an entry whose template is unassigned, and
    /// `Some(Some(template))` when it is fully bound.
    pub fn binding(&self, symbol: &str) -> Option<Option<&Template<T>>> {
        self.slots.get(symbol).map(Option::as_ref)
    }

    /// Check if a key has an entry
    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// All keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the legend has no entries
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
