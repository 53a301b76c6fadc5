use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use color_eyre::eyre::bail;
use cube_core::{
    config::SessionConfig,
    facelets::{decode, encode, Facelets},
    moves::MoveToken,
    state::CubeState,
    Face,
};
use itertools::Itertools;
use log::warn;
use owo_colors::OwoColorize;
use piece_scene::{build_pieces, SceneCube};
use solver_bridge::{apply_move, apply_sequence, scramble, solve, TwophaseSolver};

/// Inspect, scramble and solve 3x3 cube configurations.
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Print a configuration as a colored 2D net
    Show {
        #[command(flatten)]
        input: StateArgs,
    },
    /// Apply a move sequence and print the result
    Apply {
        /// Moves in standard notation, e.g. R U R' U'
        moves: Vec<String>,
        #[command(flatten)]
        input: StateArgs,
    },
    /// Print a random scramble and the state it produces
    Scramble {
        /// How many moves
        #[arg(long, default_value_t = 20)]
        moves: usize,
    },
    /// Validate a configuration and ask the solver for a solution
    Solve {
        #[command(flatten)]
        input: StateArgs,
    },
    /// Step a move sequence through the 3D piece model, printing each
    /// rotation plan the way a renderer would receive it
    Play {
        /// Moves in standard notation
        moves: Vec<String>,
        #[command(flatten)]
        input: StateArgs,
    },
}

#[derive(clap::Args)]
struct StateArgs {
    /// A 54-letter facelet string in URFDLB order; defaults to the
    /// configured default state
    #[arg(long)]
    state: Option<String>,
    /// Path to a session config; defaults to the per-user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

impl StateArgs {
    fn load(&self) -> color_eyre::Result<(SessionConfig, CubeState)> {
        let config = load_config(self.config.as_deref());
        let state = match &self.state {
            Some(text) => decode(&text.parse::<Facelets>()?),
            None => config.default_state.clone(),
        };

        Ok((config, state))
    }
}

fn load_config(path: Option<&Path>) -> SessionConfig {
    let path = match path {
        Some(path) => path.to_owned(),
        None => {
            let Some(mut dir) = dirs::config_dir() else {
                return SessionConfig::default();
            };
            dir.push("rubiks");
            dir.push("config.toml");
            dir
        }
    };

    let Ok(text) = fs::read_to_string(&path) else {
        return SessionConfig::default();
    };

    match SessionConfig::from_toml(&text) {
        Ok(config) => config,
        Err(error) => {
            warn!("ignoring unparsable config {}: {error}", path.display());
            SessionConfig::default()
        }
    }
}

fn parse_tokens(words: &[String]) -> color_eyre::Result<Vec<MoveToken>> {
    if words.is_empty() {
        bail!("no moves given");
    }

    let mut tokens = Vec::new();
    for word in words {
        for part in word.split_whitespace() {
            tokens.push(part.parse::<MoveToken>()?);
        }
    }

    Ok(tokens)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    match Commands::parse() {
        Commands::Show { input } => {
            let (config, state) = input.load()?;
            print_net(&state, &config);
        }
        Commands::Apply { moves, input } => {
            let (config, state) = input.load()?;
            let tokens = parse_tokens(&moves)?;

            let state = apply_sequence(&state, &tokens, &TwophaseSolver::new());
            print_net(&state, &config);
            println!("{}", encode(&state));
        }
        Commands::Scramble { moves } => {
            let sequence = scramble(moves);
            let state =
                apply_sequence(&CubeState::solved(), &sequence, &TwophaseSolver::new());

            println!("{}", sequence.iter().join(" "));
            println!("{}", encode(&state));
        }
        Commands::Solve { input } => {
            let (_, state) = input.load()?;

            let solution = solve(&state, &TwophaseSolver::new())?;
            if solution.is_empty() {
                println!("already solved");
            } else {
                println!("{}", solution.iter().join(" "));
            }
        }
        Commands::Play { moves, input } => {
            let (config, state) = input.load()?;
            let tokens = parse_tokens(&moves)?;
            let solver = TwophaseSolver::new();

            let mut scene = SceneCube::new(&state);
            let mut logical = state;
            println!(
                "26 pieces, spacing {:.2}, {}ms per turn",
                config.scene.cube_size + config.scene.gap,
                config.scene.animation_duration_ms
            );

            for token in tokens {
                let Some(plan) = scene.begin(token) else {
                    bail!("a rotation is already in flight");
                };
                println!(
                    "{token}: rotate {:?} by {:+.2} rad, {} pieces",
                    plan.axis,
                    plan.angle,
                    plan.selected.len()
                );

                // The renderer's completion callback stands here.
                scene.complete();
                logical = apply_move(&logical, token, &solver);

                if let Some(&index) = plan.selected.first() {
                    let [x, y, z] = scene.pieces()[index].world_position(&config.scene);
                    println!("  piece {index} now at ({x:+.2}, {y:+.2}, {z:+.2})");
                }
            }

            // The two engines must agree move for move.
            let mut rebuilt = build_pieces(&logical);
            let mut current = scene.pieces().to_vec();
            rebuilt.sort_by_key(|piece| piece.position());
            current.sort_by_key(|piece| piece.position());
            if rebuilt == current {
                println!("scene matches the sticker model");
            } else {
                bail!("scene diverged from the sticker model");
            }
        }
    }

    Ok(())
}

/// Print the classic unfolded cross: U on top, then L F R B, then D.
fn print_net(state: &CubeState, config: &SessionConfig) {
    for row in 0..3 {
        print!("      ");
        print_row(state, Face::U, row, config);
        println!();
    }
    for row in 0..3 {
        for face in [Face::L, Face::F, Face::R, Face::B] {
            print_row(state, face, row, config);
        }
        println!();
    }
    for row in 0..3 {
        print!("      ");
        print_row(state, Face::D, row, config);
        println!();
    }
}

fn print_row(state: &CubeState, face: Face, row: usize, config: &SessionConfig) {
    for col in 0..3 {
        let color = state[face][row * 3 + col];
        let (r, g, b) = rgb(config.cube_colors.hex(color));
        print!("{} ", color.face().letter().on_truecolor(r, g, b));
    }
}

fn rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
            .unwrap_or(0)
    };

    (channel(0..2), channel(2..4), channel(4..6))
}
