//=========================================================================
// Game State
//=========================================================================

/// Top-level demo state.
///
/// Starts at [`GameState::Tutorial`] and moves to [`GameState::Play`] on
/// the first pointer-down. `Play` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Tutorial labels visible, hero frozen, waiting for first input.
    #[default]
    Tutorial,

    /// Hero simulated, thrust follows the pointer.
    Play,
}

impl GameState {
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Play)
    }
}
