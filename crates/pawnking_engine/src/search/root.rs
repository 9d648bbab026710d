//! Root move selection
//!
//! Every root move is searched once with the full window so each root score is
//! exact. The highest score wins and ties keep the earlier move.

use super::Searcher;
use crate::state::GameState;
use crate::types::Move;
use std::time::Instant;
use tracing::{debug, info};

impl Searcher<'_> {
    /// Find the best move for the side to move
    ///
    /// Each root move is pushed and the resulting position is searched
    /// `depth` plies deep, so the deepest line looks `depth + 1` plies ahead.
    /// Returns `None` when the side to move has no moves. `state` is left
    /// unchanged either way, and the statistics are reset at the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pawnking_engine::move_gen::GeneratorConfig;
    /// use pawnking_engine::{GameState, Searcher, Tables};
    ///
    /// let tables = Tables::new();
    /// let mut state = GameState::default();
    /// let (mv, _score) = Searcher::new(&tables, GeneratorConfig::default())
    ///     .best_move(&mut state, 1)
    ///     .unwrap();
    /// assert!(state.piece_at(mv.from).is_some());
    /// ```
    pub fn best_move(&mut self, state: &mut GameState, depth: u32) -> Option<(Move, i32)> {
        self.reset_stats();
        let start = Instant::now();

        let moves = state.generate_moves(&self.tables.attacks, self.generator);
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            state.push(mv);
            let score = -self.search_value(state, depth);
            state.pop();

            debug!("[SEARCH] root move {} scored {}", mv, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        self.stats.elapsed = start.elapsed();

        match best {
            Some((mv, score)) => info!(
                "[SEARCH] {} plays {} (score {}, depth {}, {} nodes, {} cutoffs, {:?})",
                state.side_to_move(),
                mv,
                score,
                depth,
                self.stats.nodes,
                self.stats.cutoffs,
                self.stats.elapsed
            ),
            None => info!("[SEARCH] {} has no moves", state.side_to_move()),
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_square;
    use crate::evaluation::evaluate;
    use crate::move_gen::GeneratorConfig;
    use crate::search::find_best_move;
    use crate::tables::Tables;
    use crate::types::{Color, PieceKind};

    fn state(ranks: [&str; 8], side: Color) -> GameState {
        GameState::snapshot_from(&ranks.concat(), side).unwrap()
    }

    #[test]
    fn test_takes_hanging_knight() {
        //! Knight on c3 can capture an undefended queen on d5
        let tables = Tables::new();
        let mut state = state(
            [
                "0000K000", "00000000", "00N00000", "00000000",
                "000q0000", "00000000", "00000000", "0000k000",
            ],
            Color::White,
        );
        let (mv, score) = Searcher::new(&tables, GeneratorConfig::default())
            .best_move(&mut state, 0)
            .unwrap();

        assert_eq!(mv.from, parse_square("c3").unwrap());
        assert_eq!(mv.to, parse_square("d5").unwrap());
        assert_eq!(mv.piece.kind, PieceKind::Knight);
        assert!(score > 0);
    }

    #[test]
    fn test_black_finds_capture_too() {
        let tables = Tables::new();
        let mut state = state(
            [
                "0000K000", "00000000", "00000000", "000R0000",
                "0000p000", "00000000", "00000000", "0000k000",
            ],
            Color::Black,
        );
        // Sliders never move, so the rook on d4 is a free capture for the e5 pawn
        let mv = find_best_move(&mut state, &tables, GeneratorConfig::default(), 1).unwrap();
        assert_eq!(mv.from, parse_square("e5").unwrap());
        assert_eq!(mv.to, parse_square("d4").unwrap());
    }

    #[test]
    fn test_ties_keep_first_generated_move() {
        //! Lone king on d4: c3, d3 and e3 share the top score, c3 comes first
        let tables = Tables::new();
        let mut state = state(
            [
                "00000000", "00000000", "00000000", "000K0000",
                "00000000", "00000000", "00000000", "00000000",
            ],
            Color::White,
        );
        let c3 = parse_square("c3").unwrap();
        let d3 = parse_square("d3").unwrap();
        let e3 = parse_square("e3").unwrap();

        let mut scores = Vec::new();
        for mv in state.generate_moves(&tables.attacks, GeneratorConfig::default()) {
            state.push(mv);
            scores.push((mv.to, -evaluate(&state, &tables.eval)));
            state.pop();
        }
        let top = scores.iter().map(|&(_, score)| score).max().unwrap();
        let tied: Vec<_> = scores.iter().filter(|&&(_, s)| s == top).map(|&(to, _)| to).collect();
        assert_eq!(tied, vec![c3, d3, e3]);

        let (mv, score) = Searcher::new(&tables, GeneratorConfig::default())
            .best_move(&mut state, 0)
            .unwrap();
        assert_eq!(mv.to, c3);
        assert_eq!(score, top);
    }

    #[test]
    fn test_no_root_moves_returns_none() {
        let tables = Tables::new();
        let mut state = state(
            [
                "00000000", "00000000", "00000000", "00000000",
                "00000000", "00000000", "00000000", "0000000b",
            ],
            Color::Black,
        );
        let before = state.clone();

        let mut searcher = Searcher::new(&tables, GeneratorConfig::default());
        assert_eq!(searcher.best_move(&mut state, 3), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_best_move_is_generated_and_state_restored() {
        let tables = Tables::new();
        let mut state = GameState::default();
        let before = state.clone();
        let candidates = state.generate_moves(&tables.attacks, GeneratorConfig::default());

        let mut searcher = Searcher::new(&tables, GeneratorConfig::default());
        let (mv, _) = searcher.best_move(&mut state, 2).unwrap();

        assert!(candidates.contains(&mv));
        assert_eq!(state, before);
        assert!(searcher.stats().nodes > candidates.len() as u64);
    }

    #[test]
    fn test_root_score_matches_child_search() {
        //! The reported score is the negated value of the chosen child
        let tables = Tables::new();
        let mut state = GameState::default();
        let mut searcher = Searcher::new(&tables, GeneratorConfig::default());
        let (mv, score) = searcher.best_move(&mut state, 1).unwrap();

        state.push(mv);
        let child = Searcher::new(&tables, GeneratorConfig::default()).negamax_exhaustive(&mut state, 1);
        assert_eq!(score, -child);
    }

    #[test]
    fn test_stats_reset_per_search() {
        let tables = Tables::new();
        let mut state = GameState::default();
        let mut searcher = Searcher::new(&tables, GeneratorConfig::default());

        searcher.best_move(&mut state, 1);
        let first = searcher.stats().nodes;
        searcher.best_move(&mut state, 1);
        assert_eq!(searcher.stats().nodes, first);
    }
}
