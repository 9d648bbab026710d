//! Property tests for the engine core
//!
//! Random boards and random move sequences checked against the invariants the
//! search relies on: bitboard set/clear, push/pop reversibility, attack table
//! symmetry and alpha-beta agreeing with an unpruned search.

use pawnking_engine::board::mirror_board;
use pawnking_engine::constants::{INF, NEG_INF};
use pawnking_engine::evaluation::evaluate_white_relative;
use pawnking_engine::move_gen::{AttackTables, GeneratorConfig};
use pawnking_engine::{BitBoard, Color, GameState, Searcher, Tables};
use proptest::prelude::*;

const PIECE_CHARS: [char; 12] = ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];

/// Mostly empty boards with a sprinkling of every piece kind
fn snapshot_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            6 => Just('0'),
            1 => prop::sample::select(PIECE_CHARS.to_vec()),
        ],
        64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

proptest! {
    #[test]
    fn set_then_clear_leaves_empty_board(square in 0u8..64) {
        let mut bb = BitBoard::EMPTY;
        bb.set(square);
        prop_assert!(bb.test(square));
        prop_assert_eq!(bb.count(), 1);
        bb.clear(square);
        prop_assert_eq!(bb, BitBoard::EMPTY);
    }

    #[test]
    fn iteration_visits_each_set_bit_once(mask in any::<u64>()) {
        let bb = BitBoard::new(mask);
        let squares: Vec<u8> = bb.iter().collect();
        prop_assert_eq!(squares.len() as u32, mask.count_ones());
        prop_assert!(squares.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(squares.into_iter().collect::<BitBoard>(), bb);
    }

    #[test]
    fn attack_tables_symmetric_under_half_turn(square in 0u8..64) {
        let tables = AttackTables::new();
        prop_assert_eq!(tables.knight(63 - square), tables.knight(square).rotate_180());
        prop_assert_eq!(tables.king(63 - square), tables.king(square).rotate_180());
    }

    #[test]
    fn snapshot_round_trips(snapshot in snapshot_strategy(), side in color_strategy()) {
        let state = GameState::snapshot_from(&snapshot, side).unwrap();
        prop_assert_eq!(state.to_snapshot(), snapshot);
        prop_assert_eq!(state.side_to_move(), side);
    }

    #[test]
    fn push_pop_restores_any_generated_move(
        snapshot in snapshot_strategy(),
        side in color_strategy(),
        sliders in any::<bool>(),
    ) {
        let attacks = AttackTables::new();
        let config = GeneratorConfig { sliding_pieces: sliders };
        let mut state = GameState::snapshot_from(&snapshot, side).unwrap();
        let before = state.clone();

        for mv in state.generate_moves(&attacks, config) {
            prop_assert_eq!(mv.piece.color, side);
            prop_assert_eq!(state.piece_at(mv.from), Some(mv.piece));
            state.push(mv);
            prop_assert_eq!(state.side_to_move(), side.opponent());
            state.pop();
            prop_assert_eq!(&state, &before);
        }
    }

    #[test]
    fn random_game_unwinds_to_start(choices in prop::collection::vec(any::<prop::sample::Index>(), 0..24)) {
        let attacks = AttackTables::new();
        let mut state = GameState::default();
        let start = state.clone();
        let mut pushed = 0;

        for choice in &choices {
            let moves = state.generate_moves(&attacks, GeneratorConfig::default());
            if moves.is_empty() {
                break;
            }
            state.push(*choice.get(&moves));
            pushed += 1;
        }

        prop_assert_eq!(state.history_len(), pushed);
        for _ in 0..pushed {
            state.pop();
        }
        prop_assert_eq!(state, start);
    }

    #[test]
    fn evaluation_negates_under_mirror(snapshot in snapshot_strategy()) {
        let tables = Tables::new();
        let state = GameState::snapshot_from(&snapshot, Color::White).unwrap();
        let score = evaluate_white_relative(state.board(), &tables.eval);
        let mirrored = evaluate_white_relative(&mirror_board(state.board()), &tables.eval);
        prop_assert_eq!(mirrored, -score);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn alpha_beta_matches_exhaustive_search(
        snapshot in snapshot_strategy(),
        side in color_strategy(),
        depth in 0u32..=3,
    ) {
        let tables = Tables::new();
        let mut state = GameState::snapshot_from(&snapshot, side).unwrap();
        let before = state.clone();

        let mut pruned = Searcher::new(&tables, GeneratorConfig::default());
        let mut full = Searcher::new(&tables, GeneratorConfig::default());
        let pruned_score = pruned.negamax(&mut state, depth, NEG_INF, INF);
        let full_score = full.negamax_exhaustive(&mut state, depth);

        prop_assert_eq!(pruned_score, full_score);
        prop_assert!(pruned.stats().nodes <= full.stats().nodes);
        prop_assert_eq!(state, before);
    }
}
