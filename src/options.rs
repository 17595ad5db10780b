//! Rename command configuration

/// Options controlling how collisions are renamed and reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// First counter tried when suffixing a displaced name
    pub first_suffix: u32,
    /// Word used for the entity kind in user messages
    pub entity_label: String,
}

impl RenameOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        RenameOptions {
            first_suffix: 2,
            entity_label: "Structure".to_string(),
        }
    }

    /// Set the first suffix counter
    pub fn with_first_suffix(mut self, first_suffix: u32) -> Self {
        self.first_suffix = first_suffix;
        self
    }

    /// Set the entity label used in messages
    pub fn with_entity_label(mut self, label: impl Into<String>) -> Self {
        self.entity_label = label.into();
        self
    }
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self::new()
    }
}
