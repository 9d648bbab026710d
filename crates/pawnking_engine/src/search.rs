//! Negamax search with alpha-beta pruning
//!
//! A plain recursive negamax over [`GameState`] push/pop. There is no move
//! ordering, no transposition table, no quiescence extension and no iterative
//! deepening: every line is searched to exactly the requested depth, and depth
//! is the only bound on the work done.
//!
//! ## Module Organization
//!
//! - `alphabeta` - The recursive negamax (pruned and exhaustive)
//! - `root` - Root driver picking the best move, with timing and logging
//!
//! ## Scores
//!
//! Every score is from the point of view of the side to move at the node it
//! was computed for. Bounds are the finite sentinels
//! [`NEG_INF`](crate::constants::NEG_INF) and [`INF`](crate::constants::INF).

mod alphabeta;
mod root;

use crate::move_gen::GeneratorConfig;
use crate::state::GameState;
use crate::tables::Tables;
use std::time::Duration;

/// Counters collected during one search
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the leaves
    pub nodes: u64,
    /// Nodes where `alpha >= beta` stopped the move loop early
    pub cutoffs: u64,
    pub elapsed: Duration,
}

/// Runs searches against one set of shared tables
///
/// The searcher borrows [`GameState`] mutably for each call and leaves it
/// exactly as it found it.
#[derive(Debug)]
pub struct Searcher<'a> {
    tables: &'a Tables,
    generator: GeneratorConfig,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(tables: &'a Tables, generator: GeneratorConfig) -> Self {
        Searcher {
            tables,
            generator,
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated since the last [`Searcher::reset_stats`]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }
}

/// Pick the best move for the side to move without applying it
///
/// Convenience wrapper around [`Searcher::best_move`].
pub fn find_best_move(
    state: &mut GameState,
    tables: &Tables,
    generator: GeneratorConfig,
    depth: u32,
) -> Option<crate::types::Move> {
    Searcher::new(tables, generator)
        .best_move(state, depth)
        .map(|(mv, _)| mv)
}
