//! Command-line interface
//!
//! Each subcommand builds a [`Game`] from a FEN or snapshot, runs one engine
//! operation and prints the result. Output goes to a caller-supplied writer and
//! `play` reads human moves from a caller-supplied reader.

use crate::error::AppError;
use crate::fen::{parse_fen, to_fen};
use crate::render::render_board;
use crate::settings::{save_settings_to, Settings};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pawnking_engine::board::{parse_square, square_name};
use pawnking_engine::constants::STARTING_SNAPSHOT;
use pawnking_engine::{BitBoard, Color, EngineConfig, Game, Square, Tables};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "pawnking", version, about = "Pawn, knight and king chess engine")]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the moves of the side to move, or the destinations from one square
    Moves {
        #[command(flatten)]
        position: PositionArgs,
        /// Only show moves starting on this square, e.g. e2
        #[arg(long)]
        from: Option<String>,
    },
    /// Check whether a move is legal
    Check {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Search for the best move and print it
    Best {
        #[command(flatten)]
        position: PositionArgs,
        /// Plies searched below each root move
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Play a game against the engine, or let it play itself
    Play {
        #[command(flatten)]
        position: PositionArgs,
        /// Stop after this many plies
        #[arg(long, default_value_t = 40)]
        plies: u32,
        #[arg(long)]
        depth: Option<u32>,
        /// Side the engine plays (defaults to the settings file)
        #[arg(long, value_enum, conflicts_with = "self_play")]
        ai: Option<Side>,
        /// Engine plays both sides
        #[arg(long)]
        self_play: bool,
    },
    /// Show the resolved settings, or write them to the settings file
    Config {
        #[arg(long)]
        write: bool,
    },
}

/// Where the position comes from
#[derive(Args, Debug, Clone, Default)]
pub struct PositionArgs {
    /// FEN placement, optionally followed by the side to move
    #[arg(long, conflicts_with = "snapshot")]
    pub fen: Option<String>,
    /// 64-character board snapshot starting at a1
    #[arg(long)]
    pub snapshot: Option<String>,
    /// Side to move (overrides the FEN side field)
    #[arg(long, value_enum)]
    pub side: Option<Side>,
    /// Let bishops, rooks and queens move
    #[arg(long)]
    pub sliding: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Settings and their file, as resolved at startup
#[derive(Clone, Debug)]
pub struct CliContext {
    pub settings: Settings,
    pub settings_path: PathBuf,
}

/// Run one subcommand
///
/// # Arguments
///
/// * `command` - Parsed subcommand
/// * `ctx` - Settings loaded at startup
/// * `input` - Source of human moves for `play`
/// * `out` - Destination for all normal output
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    ctx: &CliContext,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let tables = Arc::new(Tables::new());

    match command {
        Command::Moves { position, from } => {
            let game = build_game(&position, ctx.settings.engine, tables)?;
            match from {
                Some(name) => {
                    let origin = square(&name)?;
                    let targets = game.legal_destinations_from(origin);
                    write!(out, "{}", render_board(game.state(), targets))?;
                    let names: Vec<String> = targets.iter().map(square_name).collect();
                    writeln!(out, "{}: {}", name, names.join(" "))?;
                }
                None => {
                    let moves = game.legal_moves();
                    writeln!(out, "{} moves for {}", moves.len(), game.side_to_move())?;
                    for mv in moves {
                        writeln!(out, "{mv}")?;
                    }
                }
            }
        }
        Command::Check { position, from, to } => {
            let game = build_game(&position, ctx.settings.engine, tables)?;
            let verdict = if game.is_legal(square(&from)?, square(&to)?) {
                "legal"
            } else {
                "illegal"
            };
            writeln!(out, "{from}{to}: {verdict}")?;
        }
        Command::Best { position, depth } => {
            let engine = resolve_engine(depth, &ctx.settings)?;
            let mut game = build_game(&position, engine, tables)?;
            match game.play_engine_move() {
                Some(mv) => {
                    writeln!(out, "best move: {mv}")?;
                    if let Some(stats) = game.last_search() {
                        writeln!(
                            out,
                            "nodes: {} cutoffs: {} time: {:?}",
                            stats.nodes, stats.cutoffs, stats.elapsed
                        )?;
                    }
                    writeln!(out, "fen: {}", to_fen(game.state()))?;
                }
                None => writeln!(out, "no moves for {}", game.side_to_move())?,
            }
        }
        Command::Play {
            position,
            plies,
            depth,
            ai,
            self_play,
        } => {
            let engine = resolve_engine(depth, &ctx.settings)?;
            let engine_side = if self_play {
                None
            } else {
                ai.map(Color::from).or(ctx.settings.ai_color)
            };
            let mut game = build_game(&position, engine, tables)?;
            play(&mut game, plies, engine_side, ctx.settings.show_board, input, out)?;
        }
        Command::Config { write } => {
            if write {
                save_settings_to(&ctx.settings_path, &ctx.settings)?;
                writeln!(out, "wrote {}", ctx.settings_path.display())?;
            } else {
                writeln!(out, "# {}", ctx.settings_path.display())?;
                writeln!(out, "{}", serde_json::to_string_pretty(&ctx.settings)?)?;
            }
        }
    }

    Ok(())
}

/// Alternate engine and human moves until `plies` are played or a side is stuck
///
/// With `engine_side == None` the engine plays both colors.
fn play<R: BufRead, W: Write>(
    game: &mut Game,
    plies: u32,
    engine_side: Option<Color>,
    show_board: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if show_board {
        write!(out, "{}", render_board(game.state(), BitBoard::EMPTY))?;
    }

    let first = game.side_to_move();
    for ply in 0..plies {
        let side = game.side_to_move();
        let engine_turn = engine_side.map_or(true, |engine| engine == side);

        let played = if engine_turn {
            game.play_engine_move()
        } else {
            match read_human_move(game, input, out)? {
                HumanInput::Move(mv) => Some(mv),
                HumanInput::Quit => {
                    info!("[PLAY] Game abandoned after {} plies", ply);
                    return Ok(());
                }
            }
        };

        let Some(mv) = played else {
            writeln!(out, "{side} has no moves")?;
            return Ok(());
        };

        writeln!(out, "{}. {} {}", move_number(ply, first), side, mv)?;
        if show_board {
            write!(out, "{}", render_board(game.state(), BitBoard::EMPTY))?;
        }
    }

    writeln!(out, "fen: {}", to_fen(game.state()))?;
    Ok(())
}

/// Full-move number of the `ply`-th move of a game that `first` opened
///
/// White's move starts a new number, so a game opened by Black numbers its
/// first move 1 and White's reply 2.
fn move_number(ply: u32, first: Color) -> u32 {
    let offset = match first {
        Color::White => 0,
        Color::Black => 1,
    };
    (ply + offset) / 2 + 1
}

enum HumanInput {
    Move(pawnking_engine::Move),
    Quit,
}

/// Prompt until the human enters a legal move, `quit`, or input runs out
fn read_human_move<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
) -> Result<HumanInput> {
    loop {
        write!(out, "{} to move> ", game.side_to_move())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(HumanInput::Quit);
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") {
            return Ok(HumanInput::Quit);
        }

        let attempt = parse_move_text(text)
            .map_err(anyhow::Error::from)
            .and_then(|(from, to)| Ok(game.apply_move(from, to)?));
        match attempt {
            Ok(mv) => return Ok(HumanInput::Move(mv)),
            Err(e) => {
                debug!("[PLAY] Rejected input {:?}: {}", text, e);
                writeln!(out, "{e}")?;
            }
        }
    }
}

/// Parse `e2e4` (or `e2-e4`) into a square pair
pub fn parse_move_text(text: &str) -> Result<(Square, Square), AppError> {
    let cleaned: String = text.chars().filter(|c| *c != '-').collect();
    if cleaned.chars().count() != 4 || !cleaned.is_ascii() {
        return Err(AppError::InvalidMoveText {
            text: text.to_string(),
        });
    }
    let (from, to) = cleaned.split_at(2);
    match (parse_square(from), parse_square(to)) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(AppError::InvalidMoveText {
            text: text.to_string(),
        }),
    }
}

fn square(name: &str) -> Result<Square, AppError> {
    parse_square(name).ok_or_else(|| AppError::InvalidSquareName {
        name: name.to_string(),
    })
}

/// Engine settings with the `--depth` override applied and checked
fn resolve_engine(depth: Option<u32>, settings: &Settings) -> Result<EngineConfig> {
    let config = EngineConfig {
        depth: depth.unwrap_or(settings.engine.depth),
        ..settings.engine
    };
    config.validate()?;
    Ok(config)
}

/// Build a game from the position flags
///
/// Side to move: `--side`, then the FEN side field, then White.
pub fn build_game(
    position: &PositionArgs,
    engine: EngineConfig,
    tables: Arc<Tables>,
) -> Result<Game> {
    let (snapshot, fen_side) = match (&position.fen, &position.snapshot) {
        (Some(fen), _) => parse_fen(fen)?,
        (None, Some(snapshot)) => (snapshot.clone(), None),
        (None, None) => (STARTING_SNAPSHOT.to_string(), None),
    };
    let side = position
        .side
        .map(Color::from)
        .or(fen_side)
        .unwrap_or(Color::White);
    let config = EngineConfig {
        sliding_pieces: engine.sliding_pieces || position.sliding,
        ..engine
    };

    Game::from_snapshot(&snapshot, side, tables, config).context("could not load the position")
}
