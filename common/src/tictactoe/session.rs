use super::bot_controller::ComparisonResult;
use super::game_state::TicTacToeGameState;
use super::types::{FirstPlayerMode, GameStatus, Mark};

/// Callbacks a front end implements to show a game.
pub trait GameView {
    fn render(&mut self, state: &TicTacToeGameState);

    fn announce_result(&mut self, status: GameStatus);

    fn report_comparison(&mut self, _turn: u32, _result: &ComparisonResult) {}
}

/// Drives a `TicTacToeGameState` on behalf of a front end and pushes every
/// change to its `GameView`.
pub struct GameSession<V: GameView> {
    state: TicTacToeGameState,
    view: V,
    human_mark: Mark,
    first_player_mode: FirstPlayerMode,
}

impl<V: GameView> GameSession<V> {
    pub fn new(
        view: V,
        human_mark: Mark,
        first_player_mode: FirstPlayerMode,
    ) -> Result<Self, String> {
        let state = TicTacToeGameState::new(human_mark, first_player_mode)?;
        let mut session = Self {
            state,
            view,
            human_mark,
            first_player_mode,
        };
        session.view.render(&session.state);
        Ok(session)
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_ai_turn(&self) -> bool {
        self.state.is_ai_turn()
    }

    pub fn is_over(&self) -> bool {
        self.state.status.is_over()
    }

    pub fn on_human_move(&mut self, position: usize) -> Result<(), String> {
        self.state.place_human_mark(position)?;
        self.view.render(&self.state);
        self.announce_if_over();
        Ok(())
    }

    pub fn on_ai_turn(&mut self) -> Result<(), String> {
        let result = self.state.play_ai_turn()?;
        self.view.report_comparison(self.state.turn_count, &result);
        self.view.render(&self.state);
        self.announce_if_over();
        Ok(())
    }

    pub fn new_game(&mut self) -> Result<(), String> {
        self.state = TicTacToeGameState::new(self.human_mark, self.first_player_mode)?;
        self.view.render(&self.state);
        Ok(())
    }

    fn announce_if_over(&mut self) {
        if self.state.status.is_over() {
            self.view.announce_result(self.state.status);
        }
    }
}
