//! Alternative feature groups.
//!
//! Some capabilities have an older syntax or implementation that works
//! just as well. Any member of a group satisfies the requirement of any
//! other member.

/// The built-in groups: the 2011 "tweener" flexbox syntax stands in for
/// the final one.
pub const BUILTIN_ALTERNATIVE_GROUPS: &[&[&str]] = &[&["flexbox", "flexboxtweener"]];

/// A table of alternative feature groups.
///
/// Groups are assumed not to overlap. If a feature appears in several
/// groups, only the first group in table order is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeGroups {
    groups: Vec<Vec<String>>,
}

impl Default for AlternativeGroups {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AlternativeGroups {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ALTERNATIVE_GROUPS.iter().map(|g| g.iter().copied()))
    }

    /// A table with no groups.
    pub fn none() -> Self {
        Self { groups: Vec::new() }
    }

    /// Build a table from arbitrary groups.
    pub fn new<G, I, S>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|g| g.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// All groups in table order.
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// The first group containing `feature`.
    pub fn group_for(&self, feature: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.iter().any(|f| f == feature))
            .map(Vec::as_slice)
    }

    /// The other members of `feature`'s group, in group order.
    pub fn alternatives_for<'a>(&'a self, feature: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.group_for(feature)
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .filter(move |alternative| *alternative != feature)
    }
}
