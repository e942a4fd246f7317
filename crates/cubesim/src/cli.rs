use std::path::PathBuf;

use cubesim_core::{Twist, format_twists};
use eyre::{Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::controller::AppController;
use crate::net::{NetView, render_net};

/// Terminal 3x3x3 cube simulator
///
/// Moves use the letters U (top), D (bottom), R (right), L (left), F (front),
/// and B (back), followed by `'` for counterclockwise.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Configuration file to use instead of the one in the user's
    /// configuration directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print color letters instead of colored blocks.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the solved cube.
    Show,
    /// Apply moves to a solved cube and print the result.
    Twist {
        /// Moves to apply, such as `R U R' U'`.
        #[arg(required = true)]
        moves: Vec<Twist>,
        /// Print the cube before the first move and after every move.
        #[arg(long)]
        steps: bool,
    },
    /// Scramble the cube and print the scramble and the result.
    Scramble {
        #[command(flatten)]
        scramble: ScrambleArgs,
    },
    /// Scramble the cube, then undo the scramble one move at a time.
    Solve {
        #[command(flatten)]
        scramble: ScrambleArgs,
    },
    /// Apply moves to a solved cube and print every cubie as JSON.
    State {
        /// Moves to apply.
        moves: Vec<Twist>,
    },
    /// Print the effective configuration as YAML.
    Config,
}

#[derive(clap::Args, Debug)]
pub(crate) struct ScrambleArgs {
    /// Number of random moves (default from configuration).
    #[arg(short = 'n', long)]
    pub moves: Option<usize>,
    /// Random seed (default from configuration, or random).
    #[arg(long)]
    pub seed: Option<u64>,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if args.no_color {
        config.color = false;
    }

    match args.subcommand {
        Subcommand::Show => {
            print!("{}", render_net(AppController::new().cube(), config.color));
            Ok(())
        }

        Subcommand::Twist { moves, steps } => {
            let mut controller = AppController::new();
            if steps {
                controller.add_view(Box::new(NetView::new(std::io::stdout(), config.color)));
                controller.reset();
            }
            for twist in moves {
                controller.twist(twist);
            }
            if !steps {
                print!("{}", render_net(controller.cube(), config.color));
            }
            println!("Solved: {}", controller.cube().is_solved());
            Ok(())
        }

        Subcommand::Scramble { scramble } => {
            let controller = scrambled(&config, &scramble);
            println!("Scramble: {}", format_twists(controller.cube().history()));
            print!("{}", render_net(controller.cube(), config.color));
            Ok(())
        }

        Subcommand::Solve { scramble } => {
            let mut controller = scrambled(&config, &scramble);
            println!("Scramble: {}", format_twists(controller.cube().history()));
            print!("{}", render_net(controller.cube(), config.color));
            println!();

            controller.add_view(Box::new(NetView::new(std::io::stdout(), config.color)));
            let solution = controller.solve();
            println!("Solution: {}", format_twists(&solution));
            println!("Solved: {}", controller.cube().is_solved());
            Ok(())
        }

        Subcommand::State { moves } => {
            let mut controller = AppController::new();
            for twist in moves {
                controller.twist(twist);
            }
            write_json_output(&controller.cube().snapshot())
        }

        Subcommand::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}

fn scrambled(config: &Config, args: &ScrambleArgs) -> AppController {
    let mut controller = AppController::new();
    let count = args.moves.unwrap_or(config.scramble_length);
    controller.randomize(count, args.seed.or(config.seed));
    controller
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
