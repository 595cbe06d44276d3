//! Fixed-capacity rosters

/// Maximum creatures per roster
pub const ROSTER_CAPACITY: usize = 6;

/// Whether a roster slot holds no creature
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Ordered roster of creature names
///
/// Appending past [`ROSTER_CAPACITY`] drops the oldest names first. A blank
/// name is an unassigned slot and still occupies a position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    slots: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append names, keeping only the most recent six
    pub fn extend<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.slots.extend(names.into_iter().map(Into::into));

        let overflow = self.slots.len().saturating_sub(ROSTER_CAPACITY);
        if overflow > 0 {
            self.slots.drain(..overflow);
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Non-blank names with their slot index
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &str)> {
        self.iter().enumerate().filter(|(_, name)| !is_blank(name))
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut roster = Self::new();
        roster.extend(iter);
        roster
    }
}
