//! Interning of variable names.
//!
//! Every distinct name is stored exactly once and mapped to a dense
//! [`VarId`].

use hashbrown::HashMap;

use crate::handle::VarId;

/// Maps variable names to dense handles and back.
#[derive(Clone, Debug, Default)]
pub struct VariableTable {
    /// Maps names to their handles.
    ids: HashMap<String, VarId>,
    /// Stores names by handle index for reverse lookup.
    names: Vec<String>,
}

impl VariableTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Interns a name, returning its handle.
    ///
    /// If the name already exists, returns the existing handle.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` variables are interned.
    pub fn intern(&mut self, name: &str) -> VarId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let Some(id) = VarId::from_index(self.names.len()) else {
            panic!("variable table capacity exceeded");
        };

        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        id
    }

    /// Gets the handle of a name, if it has been interned.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<VarId> {
        self.ids.get(name).copied()
    }

    /// Gets the name behind a handle.
    #[must_use]
    pub fn name(&self, id: VarId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns an iterator over all handles and names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, &str)> {
        self.names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| Some((VarId::from_index(i)?, name.as_str())))
    }

    /// Returns every handle in declaration order.
    #[must_use]
    pub fn ids(&self) -> Vec<VarId> {
        self.iter().map(|(id, _)| id).collect()
    }
}
