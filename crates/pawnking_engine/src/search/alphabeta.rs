//! Recursive negamax
//!
//! `negamax` prunes with alpha-beta. `negamax_exhaustive` walks the full tree
//! with no cutoffs and exists so the pruned search can be checked against it.

use super::Searcher;
use crate::constants::{INF, NEG_INF};
use crate::evaluation::evaluate;
use crate::state::GameState;

impl Searcher<'_> {
    /// Alpha-beta negamax to a fixed `depth`
    ///
    /// Returns the static evaluation at depth 0, and also when the side to move
    /// has no moves at all. Otherwise each move is pushed, searched at
    /// `depth - 1` with the window `(-beta, -alpha)`, negated and popped. The
    /// loop stops as soon as `alpha >= beta`.
    ///
    /// # Arguments
    ///
    /// * `state` - Position to search, restored before returning
    /// * `depth` - Remaining plies
    /// * `alpha` - Lower bound the mover is already guaranteed
    /// * `beta` - Upper bound the opponent will allow
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pawnking_engine::constants::{INF, NEG_INF};
    /// use pawnking_engine::move_gen::GeneratorConfig;
    /// use pawnking_engine::{GameState, Searcher, Tables};
    ///
    /// let tables = Tables::new();
    /// let mut state = GameState::default();
    /// let mut searcher = Searcher::new(&tables, GeneratorConfig::default());
    /// let score = searcher.negamax(&mut state, 2, NEG_INF, INF);
    /// assert!(score > NEG_INF && score < INF);
    /// ```
    pub fn negamax(&mut self, state: &mut GameState, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return evaluate(state, &self.tables.eval);
        }

        let moves = state.generate_moves(&self.tables.attacks, self.generator);
        if moves.is_empty() {
            return evaluate(state, &self.tables.eval);
        }

        let mut best = NEG_INF;
        for mv in moves {
            state.push(mv);
            let score = -self.negamax(state, depth - 1, -beta, -alpha);
            state.pop();

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Plain negamax without pruning
    pub fn negamax_exhaustive(&mut self, state: &mut GameState, depth: u32) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return evaluate(state, &self.tables.eval);
        }

        let moves = state.generate_moves(&self.tables.attacks, self.generator);
        if moves.is_empty() {
            return evaluate(state, &self.tables.eval);
        }

        let mut best = NEG_INF;
        for mv in moves {
            state.push(mv);
            best = best.max(-self.negamax_exhaustive(state, depth - 1));
            state.pop();
        }

        best
    }

    /// Full-window alpha-beta value of `state`
    #[inline]
    pub fn search_value(&mut self, state: &mut GameState, depth: u32) -> i32 {
        self.negamax(state, depth, NEG_INF, INF)
    }
}
