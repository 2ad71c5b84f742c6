//! Common interface for anything that can take a turn.

use crate::game_state::chess_types::{Color, Outcome};
use crate::game_state::game_state::GameState;

pub trait Engine {
    fn name(&self) -> &str;

    /// Choose and commit one move for `side`, returning the committed
    /// outcome. `Stalemate` means no legal move was found.
    fn play(&mut self, state: &mut GameState, side: Color) -> Outcome;
}
