//! Named structure snapshot

use super::Handle;

/// A named structure as seen by the rename command
///
/// The host does not keep names unique, so two structures may share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Structure {
    /// Stable identifier
    pub handle: Handle,
    /// Current name
    pub name: String,
}

impl Structure {
    /// Create a structure snapshot
    pub fn new(handle: Handle, name: impl Into<String>) -> Self {
        Structure {
            handle,
            name: name.into(),
        }
    }
}

impl From<(u64, &str)> for Structure {
    fn from((handle, name): (u64, &str)) -> Self {
        Structure::new(Handle::new(handle), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        let s: Structure = (7, "MH-7").into();
        assert_eq!(s.handle, Handle::new(7));
        assert_eq!(s.name, "MH-7");
    }
}
