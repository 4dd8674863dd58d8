//! Identifier management using string interning.
//!
//! Every node and cluster in a diagram is addressed by an [`Id`]. Ids are
//! interned, so they are cheap to copy, hash, and compare, and the same
//! string always resolves to the same `Id` within a process.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner backing all [`Id`] values.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// An interned identifier for a diagram entity.
///
/// Ids form a hierarchy through [`Id::nested`], which joins a parent path and
/// a child name with `::`. A node declared inside nested clusters therefore
/// carries its full cluster path, e.g. `aws::eks::External API`.
///
/// # Examples
///
/// ```
/// use gantry_core::identifier::Id;
///
/// let cloud = Id::new("aws");
/// let api = cloud.nested("External API");
/// assert_eq!(api, "aws::External API");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("interner lock poisoned");
        Self(interner.get_or_intern(name))
    }

    /// Returns the identifier for `child` scoped under `self`.
    ///
    /// The combined form is `parent::child`.
    pub fn nested(&self, child: &str) -> Self {
        let combined = format!("{self}::{child}");
        Self::new(&combined)
    }

    /// Returns the interned string for this identifier.
    pub fn as_str(&self) -> String {
        let interner = interner().lock().expect("interner lock poisoned");
        interner
            .resolve(self.0)
            .expect("symbol missing from interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn same_name_same_id() {
        let a = Id::new("frontend");
        let b = Id::new("frontend");
        let c = Id::new("backend");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, "frontend");
    }

    #[test]
    fn nested_builds_path() {
        let aws = Id::new("aws");
        let eks = aws.nested("eks");
        let api = eks.nested("External API");

        assert_eq!(eks, "aws::eks");
        assert_eq!(api, "aws::eks::External API");
        assert_ne!(eks, aws.nested("lambda"));
    }

    #[test]
    fn display_round_trips() {
        let id = Id::new("Signaling Websocket");
        assert_eq!(format!("{id}"), "Signaling Websocket");
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Id::new("a"), 1);
        map.insert(Id::new("b"), 2);

        assert_eq!(map.get(&Id::new("a")), Some(&1));
        assert_eq!(map.len(), 2);
    }

    proptest! {
        #[test]
        fn interning_is_stable(name in ".*") {
            let first = Id::new(&name);
            let second = Id::new(&name);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.as_str(), name);
        }
    }
}
