use super::{PresetError, PresetKind};
use crate::core::validation::is_blank;

/// An insertion-ordered set of distinct, non-blank names.
///
/// Duplicate detection is exact and case-sensitive. Visible (1-based) position `i`
/// corresponds to storage index `i - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueNameSet {
    kind: PresetKind,
    names: Vec<String>,
}

impl UniqueNameSet {
    pub fn new(kind: PresetKind) -> Self {
        Self {
            kind,
            names: Vec::new(),
        }
    }

    pub fn kind(&self) -> PresetKind {
        self.kind
    }

    pub fn add(&mut self, name: &str) -> Result<(), PresetError> {
        if is_blank(name) {
            return Err(PresetError::Blank { kind: self.kind });
        }
        if self.contains(name) {
            return Err(PresetError::Duplicate {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        self.names
            .try_reserve(1)
            .map_err(|source| PresetError::Allocation {
                kind: self.kind,
                source,
            })?;
        self.names.push(name.to_string());
        Ok(())
    }

    /// Removes every entry and returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.names.len();
        self.names.clear();
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    /// Looks up an entry by its 1-based display position.
    pub fn select(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.names.get(idx))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departments(names: &[&str]) -> UniqueNameSet {
        let mut set = UniqueNameSet::new(PresetKind::Department);
        for name in names {
            set.add(name).unwrap();
        }
        set
    }

    #[test]
    fn add_preserves_insertion_order() {
        let set = departments(&["CS", "EE", "Math"]);
        assert_eq!(set.list(), &["CS", "EE", "Math"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn add_rejects_exact_duplicate_and_keeps_single_entry() {
        let mut set = departments(&["CS"]);
        let err = set.add("CS").unwrap_err();
        assert_eq!(
            err,
            PresetError::Duplicate {
                kind: PresetKind::Department,
                name: "CS".to_string()
            }
        );
        assert_eq!(set.list(), &["CS"]);
    }

    #[test]
    fn duplicate_detection_is_case_sensitive() {
        let mut set = departments(&["CS"]);
        set.add("cs").unwrap();
        set.add("CS ").unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut set = UniqueNameSet::new(PresetKind::Major);
        assert_eq!(
            set.add(" \t"),
            Err(PresetError::Blank {
                kind: PresetKind::Major
            })
        );
        assert!(set.is_empty());
    }

    #[test]
    fn contains_on_empty_set_is_false() {
        let set = UniqueNameSet::new(PresetKind::ScoreName);
        assert!(!set.contains(""));
        assert!(!set.contains("Math"));
    }

    #[test]
    fn clear_all_empties_the_set_and_allows_re_adding() {
        let mut set = departments(&["CS", "EE"]);
        assert_eq!(set.clear_all(), 2);
        assert!(set.is_empty());
        assert!(!set.contains("CS"));
        set.add("CS").unwrap();
        assert_eq!(set.list(), &["CS"]);
    }

    #[test]
    fn select_uses_one_based_positions() {
        let set = departments(&["CS", "EE"]);
        assert_eq!(set.select(1), Some("CS"));
        assert_eq!(set.select(2), Some("EE"));
        assert_eq!(set.select(0), None);
        assert_eq!(set.select(3), None);
    }
}
