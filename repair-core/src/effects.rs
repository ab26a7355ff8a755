use serde::{Deserialize, Serialize};

/// Effect classification for dashboard actions.
/// Ordered by increasing severity of side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Touches only the modal's working copy.
    Draft,
    /// Rewrites a stored record in place.
    Mutate,
    /// Removes a record. Cannot be undone from this view.
    Irreversible,
}

impl Effect {
    /// Does the action change a stored collection?
    pub fn touches_store(&self) -> bool {
        !matches!(self, Effect::Draft)
    }

    pub fn reversible(&self) -> bool {
        !matches!(self, Effect::Irreversible)
    }
}

/// Anything with a classified effect.
pub trait Effectful {
    fn effect(&self) -> Effect;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_leaves_store_alone() {
        assert!(!Effect::Draft.touches_store());
        assert!(Effect::Draft.reversible());
    }

    #[test]
    fn irreversible_is_not_reversible() {
        assert!(Effect::Irreversible.touches_store());
        assert!(!Effect::Irreversible.reversible());
    }

    #[test]
    fn effect_ordering() {
        assert!(Effect::Draft < Effect::Mutate);
        assert!(Effect::Mutate < Effect::Irreversible);
    }
}
