//! Single-owner access control.

use crate::domain::ParticipantId;
use crate::traits::AccessControl;

/// Grants `initialize` to exactly one participant, the pool owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingleInitializer(ParticipantId);

impl SingleInitializer {
    /// Creates a policy owned by `owner`.
    #[must_use]
    pub const fn new(owner: ParticipantId) -> Self {
        Self(owner)
    }

    /// The owner.
    #[must_use]
    pub const fn owner(&self) -> ParticipantId {
        self.0
    }
}

impl AccessControl for SingleInitializer {
    fn is_initializer(&self, participant: &ParticipantId) -> bool {
        self.0 == *participant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_owner_may_initialize() {
        let owner = ParticipantId::from_address([1; 20]);
        let other = ParticipantId::from_address([2; 20]);
        let policy = SingleInitializer::new(owner);
        assert!(policy.is_initializer(&owner));
        assert!(!policy.is_initializer(&other));
        assert_eq!(policy.owner(), owner);
    }
}
