//! Authorization seam for the privileged `initialize` operation.

use crate::domain::ParticipantId;

/// Decides who may seed the pool.
///
/// Every other operation is open to any participant, so this is the only
/// question the engine ever asks.
pub trait AccessControl {
    /// Returns `true` if `participant` may call `initialize`.
    fn is_initializer(&self, participant: &ParticipantId) -> bool;
}
