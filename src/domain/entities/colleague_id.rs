use std::fmt;
use uuid::Uuid;

/// Identity of a colleague, unique per instance.
///
/// The mediator checks membership against these ids, so two colleagues that
/// share a display name are still told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColleagueId(Uuid);

impl ColleagueId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ColleagueId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ColleagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registration position inside a two-party mediator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// The slot a message from this slot is delivered to
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ColleagueId::new(), ColleagueId::new());
    }

    #[test]
    fn test_other_slot() {
        assert_eq!(Slot::First.other(), Slot::Second);
        assert_eq!(Slot::Second.other(), Slot::First);
        assert_eq!(Slot::First.other().other(), Slot::First);
    }
}
