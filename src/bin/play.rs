use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use square_chess::chess::moves::Move;
use square_chess::chess::piece::Color;
use square_chess::config::{GameConfig, PlayerKind};
use square_chess::engine::picker::Picker;
use square_chess::game::{Game, TurnOutcome};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerArg {
    Human,
    Computer,
}

impl From<PlayerArg> for PlayerKind {
    fn from(p: PlayerArg) -> Self {
        match p {
            PlayerArg::Human => PlayerKind::Human,
            PlayerArg::Computer => PlayerKind::Computer,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "play",
    about = "Play a game on the terminal against the material sampler"
)]
struct Args {
    /// JSON game config; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Candidate moves sampled per computer turn
    #[arg(long)]
    samples: Option<usize>,

    /// Max plies before stopping the game unfinished
    #[arg(long)]
    max_plies: Option<usize>,

    #[arg(long, value_enum)]
    white: Option<PlayerArg>,

    #[arg(long, value_enum)]
    black: Option<PlayerArg>,

    /// Do not print the board after each move
    #[arg(long)]
    quiet: bool,
}

enum Ending {
    KingCaptured(Option<Color>),
    NoMoves(Color),
    PlyLimit,
    InputClosed,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(samples) = args.samples {
        cfg.samples = samples;
    }
    if let Some(max_plies) = args.max_plies {
        cfg.max_plies = max_plies;
    }
    if let Some(w) = args.white {
        cfg.white = w.into();
    }
    if let Some(b) = args.black {
        cfg.black = b.into();
    }
    cfg.validate()?;

    // Black's seed is shifted by one so the two sides draw different streams.
    let mut pickers = [Color::White, Color::Black].map(|side| match cfg.seed {
        Some(seed) => Picker::seeded(side, cfg.samples, seed.wrapping_add(side.index() as u64)),
        None => Picker::new(side, cfg.samples),
    });

    let mut game = Game::from_board(cfg.initial_board(), cfg.to_move);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    if !args.quiet {
        println!("{}\n", game.board());
    }

    let ending = loop {
        if game.is_over() {
            break Ending::KingCaptured(game.winner());
        }
        if game.history().len() >= cfg.max_plies {
            break Ending::PlyLimit;
        }

        let side = game.to_move();
        let mv = match cfg.player(side) {
            PlayerKind::Computer => match pickers[side.index()].choose(game.board())? {
                Some(chosen) => {
                    println!("{side}: {} (score {})", chosen.mv, chosen.score);
                    chosen.mv
                }
                None => break Ending::NoMoves(side),
            },
            PlayerKind::Human => match read_move(side, &mut lines)? {
                Some(mv) => mv,
                None => break Ending::InputClosed,
            },
        };

        match game.play(mv)? {
            TurnOutcome::Moved { captured } => {
                if let Some(p) = captured {
                    println!("{side} captures {p} on {}", mv.to);
                }
                if !args.quiet {
                    println!("{}\n", game.board());
                }
            }
            TurnOutcome::Illegal => println!("{mv}: not a legal move"),
        }
    };

    match ending {
        Ending::KingCaptured(Some(winner)) => println!("King captured. {winner} wins."),
        Ending::KingCaptured(None) => println!("Both kings are gone."),
        Ending::NoMoves(side) => println!("{side} has no moves left."),
        Ending::PlyLimit => println!("Stopped after {} plies.", cfg.max_plies),
        Ending::InputClosed => println!("Input closed."),
    }

    let moves: Vec<String> = game.history().iter().map(Move::to_string).collect();
    println!("Moves: {}", moves.join(", "));
    for side in [Color::White, Color::Black] {
        println!(
            "{side} captured {} piece(s) worth {} point(s)",
            game.captured_by(side).len(),
            game.captured_points(side)
        );
    }
    Ok(())
}

/// Prompt until a well-formed move is entered. `None` once stdin is exhausted.
fn read_move(
    side: Color,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<Move>> {
    loop {
        print!("{side}, enter move separated by space (e.g. E2 E4) > ");
        io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Move>() {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => eprintln!("{e}"),
        }
    }
}
