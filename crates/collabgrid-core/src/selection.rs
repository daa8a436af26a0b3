//! Generic selection state utilities.
//!
//! Holds a weak, id-based reference to a single selected item. The item
//! itself is never cached: callers resolve the id against their current
//! collection each time they need it.

/// State for a single selected item, referenced by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<Id> {
    selected: Option<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: Copy + PartialEq> Selection<Id> {
    /// Create a new selection with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the selected id.
    pub fn get(&self) -> Option<Id> {
        self.selected
    }

    /// Select an id.
    pub fn set(&mut self, id: Id) {
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Check if a specific id is selected.
    pub fn is_selected(&self, id: Id) -> bool {
        self.selected == Some(id)
    }

    /// Check if anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Keep the selection only while `exists` still recognises the id.
    ///
    /// Returns true when the selection was cleared by this call.
    pub fn retain(&mut self, exists: impl FnOnce(Id) -> bool) -> bool {
        match self.selected {
            Some(id) if !exists(id) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
