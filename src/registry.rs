//! Names of entry points that could not be attached.

/// Exported names whose native symbol was not found at load time.
///
/// Filled while attaching and read-only afterwards. Names keep the order
/// of the descriptor table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnattachedRegistry {
    names: Vec<&'static str>,
}

impl UnattachedRegistry {
    pub(crate) fn insert(&mut self, name: &'static str) {
        if !self.contains(name) {
            self.names.push(name);
        }
    }

    /// Whether `name` failed to attach.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    /// Number of unattached entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when every entry attached.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Unattached names in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}

impl<'a> IntoIterator for &'a UnattachedRegistry {
    type Item = &'static str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, &'static str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_ignores_repeats() {
        let mut registry = UnattachedRegistry::default();
        assert!(registry.is_empty());
        registry.insert("getch");
        registry.insert("getcurx");
        registry.insert("getch");
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("getcurx"));
        assert!(!registry.contains("wgetch"));
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["getch", "getcurx"]);
    }
}
