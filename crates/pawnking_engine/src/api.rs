//! Public API for the engine
//!
//! [`Game`] is what a board UI or CLI talks to. It owns one [`GameState`],
//! shares the precomputed [`Tables`] and exposes the three collaborator
//! operations: legal destinations from a square, a legality check for a
//! square pair, and "pick and play the best move" for computer turns.
//!
//! "Legal" here means pseudo-legal: the engine never checks whether a move
//! leaves its own king capturable.

use crate::bitset::BitBoard;
use crate::config::EngineConfig;
use crate::constants::MAX_SEARCH_DEPTH;
use crate::error::{EngineError, EngineResult};
use crate::search::{SearchStats, Searcher};
use crate::state::GameState;
use crate::tables::Tables;
use crate::types::{Color, Move, Square};
use std::sync::Arc;
use tracing::{debug, warn};

/// One game: a position, its configuration and the shared tables
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    tables: Arc<Tables>,
    config: EngineConfig,
    last_search: Option<SearchStats>,
}

impl Game {
    /// Start a game from the standard initial setup, White to move
    pub fn new(tables: Arc<Tables>, config: EngineConfig) -> Self {
        Game::with_state(GameState::default(), tables, config)
    }

    /// Start a game from a collaborator's 64-character snapshot
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSnapshotLength`] if the snapshot is not 64
    /// characters long.
    pub fn from_snapshot(
        snapshot: &str,
        side_to_move: Color,
        tables: Arc<Tables>,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        let state = GameState::snapshot_from(snapshot, side_to_move)?;
        Ok(Game::with_state(state, tables, config))
    }

    pub fn with_state(state: GameState, tables: Arc<Tables>, config: EngineConfig) -> Self {
        Game {
            state,
            tables,
            config,
            last_search: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    /// Current board as a snapshot string
    pub fn snapshot(&self) -> String {
        self.state.to_snapshot()
    }

    /// Statistics of the most recent [`Game::choose_and_apply_best_move`]
    pub fn last_search(&self) -> Option<SearchStats> {
        self.last_search
    }

    /// All moves for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        self.state
            .generate_moves(&self.tables.attacks, self.config.generator())
    }

    /// Destinations reachable from `origin` by the side to move
    ///
    /// Empty when `origin` is empty, holds an opponent piece, or is off the
    /// board.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pawnking_engine::{EngineConfig, Game, Tables};
    /// use std::sync::Arc;
    ///
    /// let game = Game::new(Arc::new(Tables::new()), EngineConfig::default());
    /// // e2 pawn: e3 and e4
    /// assert_eq!(game.legal_destinations_from(12).count(), 2);
    /// ```
    pub fn legal_destinations_from(&self, origin: Square) -> BitBoard {
        self.legal_moves()
            .iter()
            .filter(|mv| mv.from == origin)
            .map(|mv| mv.to)
            .collect()
    }

    /// Whether moving from `origin` to `destination` is allowed
    pub fn is_legal(&self, origin: Square, destination: Square) -> bool {
        self.find_move(origin, destination).is_some()
    }

    /// Play a move chosen by a human player
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSquare`] for a square outside 0-63 and
    /// [`EngineError::IllegalMove`] if the pair is not among the moves of the
    /// side to move.
    pub fn apply_move(&mut self, origin: Square, destination: Square) -> EngineResult<Move> {
        for square in [origin, destination] {
            if square >= 64 {
                return Err(EngineError::InvalidSquare { square });
            }
        }

        let mv = self
            .find_move(origin, destination)
            .ok_or(EngineError::IllegalMove {
                from: origin,
                to: destination,
            })?;

        debug!("[GAME] {} plays {}", self.state.side_to_move(), mv);
        self.state.push(mv);
        Ok(mv)
    }

    /// Search `depth` plies below each root move and play the best one
    ///
    /// Depths above [`MAX_SEARCH_DEPTH`] are clamped to it. Returns `None` and
    /// leaves the position alone when the side to move has no moves.
    pub fn choose_and_apply_best_move(&mut self, depth: u32) -> Option<Move> {
        let depth = if depth > MAX_SEARCH_DEPTH {
            warn!(
                "[GAME] Search depth {} clamped to {}",
                depth, MAX_SEARCH_DEPTH
            );
            MAX_SEARCH_DEPTH
        } else {
            depth
        };

        let tables = Arc::clone(&self.tables);
        let mut searcher = Searcher::new(&tables, self.config.generator());
        let best = searcher.best_move(&mut self.state, depth);
        self.last_search = Some(searcher.stats());

        let (mv, _) = best?;
        self.state.push(mv);
        Some(mv)
    }

    /// [`Game::choose_and_apply_best_move`] at the configured depth
    pub fn play_engine_move(&mut self) -> Option<Move> {
        self.choose_and_apply_best_move(self.config.depth)
    }

    /// Take back the most recent move, if any
    pub fn undo(&mut self) -> bool {
        if self.state.history_len() == 0 {
            return false;
        }
        self.state.pop();
        true
    }

    fn find_move(&self, origin: Square, destination: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == origin && mv.to == destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_square;
    use crate::constants::STARTING_SNAPSHOT;

    fn new_game() -> Game {
        Game::new(Arc::new(Tables::new()), EngineConfig::default())
    }

    fn sq(name: &str) -> Square {
        parse_square(name).unwrap()
    }

    #[test]
    fn test_legal_destinations_from_knight() {
        let game = new_game();
        let targets = game.legal_destinations_from(sq("g1"));
        assert_eq!(targets, BitBoard::from_iter([sq("f3"), sq("h3")]));
    }

    #[test]
    fn test_legal_destinations_from_empty_or_enemy_square() {
        let game = new_game();
        assert!(game.legal_destinations_from(sq("e4")).is_empty());
        assert!(game.legal_destinations_from(sq("e7")).is_empty());
        assert!(game.legal_destinations_from(200).is_empty());
    }

    #[test]
    fn test_sliders_have_no_destinations_by_default() {
        let game = new_game();
        assert!(game.legal_destinations_from(sq("d1")).is_empty());
        assert!(!game.is_legal(sq("f1"), sq("e2")));
    }

    #[test]
    fn test_is_legal() {
        let game = new_game();
        assert!(game.is_legal(sq("e2"), sq("e4")));
        assert!(game.is_legal(sq("b1"), sq("c3")));
        assert!(!game.is_legal(sq("e2"), sq("e5")));
        assert!(!game.is_legal(sq("e7"), sq("e5")), "not Black's turn");
    }

    #[test]
    fn test_apply_move_and_undo() {
        let mut game = new_game();
        let mv = game.apply_move(sq("e2"), sq("e4")).unwrap();
        assert_eq!(mv.to, sq("e4"));
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.is_legal(sq("e7"), sq("e5")));

        assert!(game.undo());
        assert_eq!(game.snapshot(), STARTING_SNAPSHOT);
        assert!(!game.undo());
    }

    #[test]
    fn test_apply_move_rejects_bad_input() {
        let mut game = new_game();
        assert_eq!(
            game.apply_move(sq("e2"), sq("e5")),
            Err(EngineError::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(
            game.apply_move(64, sq("e5")),
            Err(EngineError::InvalidSquare { square: 64 })
        );
        assert_eq!(game.snapshot(), STARTING_SNAPSHOT);
    }

    #[test]
    fn test_choose_and_apply_best_move() {
        let mut game = new_game();
        let mv = game.choose_and_apply_best_move(1).unwrap();
        assert_eq!(mv.piece.color, Color::White);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.state().history_len(), 1);
        assert!(game.last_search().unwrap().nodes > 0);
    }

    #[test]
    fn test_play_engine_move_uses_configured_depth() {
        let config = EngineConfig {
            depth: 0,
            ..EngineConfig::default()
        };
        let mut game = Game::new(Arc::new(Tables::new()), config);
        let mv = game.play_engine_move().unwrap();

        assert_eq!(mv.piece.color, Color::White);
        // Depth 0 visits exactly one node per root move
        assert_eq!(game.last_search().unwrap().nodes, 20);
    }

    #[test]
    fn test_excessive_depth_is_clamped() {
        //! Two lone pawns race for twelve plies, so the tree ends on its own
        //! but runs deeper than the maximum depth
        let mut snapshot = "0".repeat(64);
        snapshot.replace_range(8..9, "P");
        snapshot.replace_range(55..56, "p");
        let mut game = Game::from_snapshot(
            &snapshot,
            Color::White,
            Arc::new(Tables::new()),
            EngineConfig::default(),
        )
        .unwrap();

        let mut reference = game.clone();
        let clamped = game.choose_and_apply_best_move(u32::MAX).unwrap();
        let at_max = reference.choose_and_apply_best_move(MAX_SEARCH_DEPTH).unwrap();

        assert_eq!(clamped, at_max);
        assert_eq!(
            game.last_search().unwrap().nodes,
            reference.last_search().unwrap().nodes
        );
    }

    #[test]
    fn test_choose_with_no_moves_changes_nothing() {
        let snapshot = format!("{}{}", "R", "0".repeat(63));
        let mut game = Game::from_snapshot(
            &snapshot,
            Color::White,
            Arc::new(Tables::new()),
            EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(game.choose_and_apply_best_move(3), None);
        assert_eq!(game.snapshot(), snapshot);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_sliding_pieces_config_enables_rook() {
        let snapshot = format!("{}{}", "R", "0".repeat(63));
        let config = EngineConfig {
            sliding_pieces: true,
            ..EngineConfig::default()
        };
        let game =
            Game::from_snapshot(&snapshot, Color::White, Arc::new(Tables::new()), config).unwrap();
        assert_eq!(game.legal_destinations_from(sq("a1")).count(), 14);
    }
}
