//! Position state with reversible move application
//!
//! [`GameState`] is the authoritative board: one entry per square plus the side
//! to move. Search mutates it in place with [`GameState::push`] and restores it
//! with [`GameState::pop`], so no board is copied per ply.
//!
//! ## Snapshot format
//!
//! Collaborators exchange boards as 64-character strings, one character per
//! square starting at a1 and running along each rank (a1..h1, a2..h2, ...,
//! a8..h8). Uppercase `PNBRQK` are White pieces, lowercase `pnbrqk` are Black,
//! and `'0'` is an empty square.

mod undo;

use crate::constants::{EMPTY_SQUARE_CHAR, STARTING_SNAPSHOT};
use crate::error::{EngineError, EngineResult};
use crate::move_gen::{generate_pseudo_legal_moves, AttackTables, GeneratorConfig, Occupancy};
use crate::types::{Board, Color, Move, Piece, Square};
use tracing::warn;
use undo::UndoRecord;

/// Board contents, side to move and the undo history of pushed moves
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    history: Vec<UndoRecord>,
}

impl GameState {
    /// Parse a 64-character snapshot
    ///
    /// Characters that are neither a piece letter nor a digit leave their square
    /// empty and are reported once per parse with a warning.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSnapshotLength`] when the snapshot does not hold
    /// exactly 64 characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pawnking_engine::{Color, GameState};
    ///
    /// let snapshot = format!("{}{}", "0000K000", "0".repeat(56));
    /// let state = GameState::snapshot_from(&snapshot, Color::White).unwrap();
    /// assert!(state.piece_at(4).is_some());
    ///
    /// assert!(GameState::snapshot_from("KQ", Color::White).is_err());
    /// ```
    pub fn snapshot_from(snapshot: &str, side_to_move: Color) -> EngineResult<Self> {
        let len = snapshot.chars().count();
        if len != 64 {
            return Err(EngineError::InvalidSnapshotLength { len });
        }

        let mut board: Board = [None; 64];
        let mut unrecognized = 0usize;
        for (square, c) in snapshot.chars().enumerate() {
            match Piece::from_char(c) {
                Some(piece) => board[square] = Some(piece),
                None if c.is_ascii_digit() => {}
                None => unrecognized += 1,
            }
        }

        if unrecognized > 0 {
            warn!(
                "[STATE] {} unrecognized snapshot character(s) treated as empty squares",
                unrecognized
            );
        }

        Ok(GameState {
            board,
            side_to_move,
            history: Vec::new(),
        })
    }

    /// Serialize the board back into a snapshot string
    pub fn to_snapshot(&self) -> String {
        self.board
            .iter()
            .map(|square| square.map_or(EMPTY_SQUARE_CHAR, Piece::to_char))
            .collect()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// +1 with White to move, -1 with Black to move
    #[inline]
    pub fn side_sign(&self) -> i32 {
        self.side_to_move.sign()
    }

    /// Number of pushes not yet popped
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy::from_board(&self.board)
    }

    /// Pseudo-legal moves for the side to move
    pub fn generate_moves(&self, attacks: &AttackTables, config: GeneratorConfig) -> Vec<Move> {
        generate_pseudo_legal_moves(&self.occupancy(), self.side_to_move, attacks, config)
    }

    /// Apply `mv` in place and flip the side to move
    ///
    /// Whatever stood on the destination is removed. The move is not
    /// validated; pass moves produced by [`GameState::generate_moves`].
    pub fn push(&mut self, mv: Move) {
        let moved = self.board[mv.from as usize].take();
        let captured = self.board[mv.to as usize];
        self.board[mv.to as usize] = moved;

        self.history.push(UndoRecord {
            mv,
            moved,
            captured,
            side: self.side_to_move,
        });
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Undo the most recent [`GameState::push`]
    ///
    /// # Panics
    ///
    /// Panics if there is no push to undo. Every push must be paired with
    /// exactly one pop.
    pub fn pop(&mut self) {
        let undo = self
            .history
            .pop()
            .expect("GameState::pop called without a matching push");

        self.board[undo.mv.from as usize] = undo.moved;
        self.board[undo.mv.to as usize] = undo.captured;
        self.side_to_move = undo.side;
    }
}

impl Default for GameState {
    /// Standard initial setup with White to move
    fn default() -> Self {
        let mut board: Board = [None; 64];
        for (square, c) in STARTING_SNAPSHOT.chars().enumerate() {
            board[square] = Piece::from_char(c);
        }
        GameState {
            board,
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }
}
