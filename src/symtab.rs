//! # symtab
//!
//! A minimal, flat symbol table built on [`indexmap::IndexMap`].
//!
//! The table records which variables have been assigned. It stores no
//! boolean values: an entry only means "defined", together with the span of
//! the first assignment that defined it. Names keep their definition order.
//!
//! ## Example
//! ```rust
//! # use boolang::{SymTab, Span};
//! let mut st = SymTab::new();
//! assert!(!st.is_defined("foo"));
//! assert!(st.define("foo", Span::default())); // newly defined
//! assert!(!st.define("foo", Span::default())); // already defined
//! assert!(st.is_defined("foo"));
//! assert_eq!(st.len(), 1);
//! ```

use crate::cursor::Span;
use indexmap::{IndexMap, map::Entry};
use smartstring::alias::String;

/// A flat table of defined variable names.
///
/// There is no removal: once defined, a name stays defined for the rest of
/// the analysis run. A fresh table is created for every program parse.
#[derive(Debug, Clone, Default)]
pub struct SymTab {
    tab: IndexMap<String, Span>,
}

impl SymTab {
    /// Creates a new, empty symbol table.
    pub fn new() -> Self {
        Self {
            tab: IndexMap::new(),
        }
    }

    /// Returns the number of defined names.
    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    /// Marks `name` as defined at `span`.
    ///
    /// Redefinition is allowed and keeps the first definition site. Returns
    /// `true` if the name was not defined before.
    pub fn define(&mut self, name: impl AsRef<str>, span: Span) -> bool {
        match self.tab.entry(String::from(name.as_ref())) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(span);
                true
            }
        }
    }

    /// Returns `true` if `name` has been defined.
    pub fn is_defined(&self, name: &str) -> bool {
        self.tab.contains_key(name)
    }

    /// Span of the assignment that first defined `name`.
    pub fn definition(&self, name: &str) -> Option<Span> {
        self.tab.get(name).copied()
    }

    /// Iterates over defined names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tab.keys().map(|k| k.as_str())
    }
}
