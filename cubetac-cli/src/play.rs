//! Play command - interactive terminal match
//!
//! Renders the three layers side by side and reads moves from stdin as
//! either a raw cell index or `x y z` coordinates. Against the computer,
//! every human move is answered through the same engine call the human
//! used. Bad input and rejected moves are reported and ignored.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use cubetac_core::board::index_of;
use cubetac_core::{GameResult, GameState, HeuristicAi, Player, CELL_COUNT};

#[derive(Args)]
pub struct PlayArgs {
    /// Two players at one keyboard instead of playing the computer
    #[arg(long)]
    pub pvp: bool,

    /// Seed for the computer's tie-break randomness
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let mut ai = match args.seed {
        Some(seed) => HeuristicAi::with_seed(seed),
        None => HeuristicAi::new(),
    };
    let mut game = GameState::new();

    println!("CUBETAC - 3D tic-tac-toe");
    println!("Win two layers, or line up straight through the cube.");
    println!("Enter moves as `x y z` (each 0-2) or a cell index 0-26; q quits.");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n{}", render(&game));

        if game.is_terminal() {
            println!("{}", describe_result(&game, args.pvp));
            if !ask_again(&mut input)? {
                return Ok(());
            }
            game.reset();
            continue;
        }

        if (0..CELL_COUNT).all(|i| !game.is_eligible(i)) {
            println!("No playable cells remain; the match goes nowhere. Resetting.");
            if !ask_again(&mut input)? {
                return Ok(());
            }
            game.reset();
            continue;
        }

        print!("{:?} to move> ", game.current_player());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let Some(index) = parse_move(line) else {
            println!("Could not read that; try `1 0 2`, `11`, or q.");
            continue;
        };
        if let Err(e) = game.apply_move(index) {
            println!("Move rejected: {e}.");
            continue;
        }

        // In PvE the computer answers immediately
        if !args.pvp && !game.is_terminal() && game.current_player() == HeuristicAi::MARK {
            match ai.choose_move(game.board(), game.layer_outcomes()) {
                Some(reply) => {
                    game.apply_move(reply)
                        .expect("heuristic only proposes eligible cells");
                    println!("Computer plays {reply}.");
                }
                None => println!("The computer has no move to make."),
            }
        }
    }
}

fn ask_again<R: BufRead>(input: &mut R) -> Result<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

/// Accepts `x y z` coordinates or a single cell index
fn parse_move(line: &str) -> Option<usize> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [index] => index.parse().ok().filter(|&i| i < CELL_COUNT),
        [x, y, z] => {
            let (x, y, z): (usize, usize, usize) =
                (x.parse().ok()?, y.parse().ok()?, z.parse().ok()?);
            (x < 3 && y < 3 && z < 3).then(|| index_of(x, y, z))
        }
        _ => None,
    }
}

fn mark_char(cell: Option<Player>) -> char {
    match cell {
        Some(Player::X) => 'X',
        Some(Player::O) => 'O',
        None => '.',
    }
}

/// Three layers side by side, plus per-layer status and the score
fn render(game: &GameState) -> String {
    let mut out = String::new();
    out.push_str("       z=0      z=1      z=2\n");
    for y in 0..3 {
        out.push_str(&format!("  y={y}"));
        for z in 0..3 {
            out.push_str("   ");
            for x in 0..3 {
                out.push(' ');
                out.push(mark_char(game.cell(index_of(x, y, z))));
            }
        }
        out.push('\n');
    }

    let status: Vec<String> = (0..3)
        .map(|layer| match game.winner_at(layer) {
            Some(player) => format!("z={layer} {player:?}"),
            None => format!("z={layer} open"),
        })
        .collect();
    let (x_score, o_score) = game.score();
    out.push_str(&format!(
        "  layers: {}  |  score X {x_score} - O {o_score}",
        status.join(", ")
    ));
    out
}

fn describe_result(game: &GameState, pvp: bool) -> String {
    match game.result() {
        GameResult::Won(player) => {
            let who = match (pvp, player) {
                (false, Player::X) => "You win".to_string(),
                (false, Player::O) => "The computer wins".to_string(),
                (true, p) => format!("{p:?} wins"),
            };
            match game.winning_line() {
                Some(line) => format!("{who} with a line through the cube {line:?}!"),
                None => format!("{who} with two layers!"),
            }
        }
        GameResult::Draw => "A full cube and no winner; call it a draw.".to_string(),
        GameResult::Ongoing => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_index() {
        assert_eq!(parse_move("13"), Some(13));
        assert_eq!(parse_move(" 0 "), Some(0));
        assert_eq!(parse_move("26"), Some(26));
        assert_eq!(parse_move("27"), None);
        assert_eq!(parse_move("abc"), None);
        assert_eq!(parse_move(""), None);
    }

    #[test]
    fn test_parse_move_coords() {
        assert_eq!(parse_move("0 0 0"), Some(0));
        assert_eq!(parse_move("1 1 1"), Some(13));
        assert_eq!(parse_move("2 2 2"), Some(26));
        assert_eq!(parse_move("3 0 0"), None);
        assert_eq!(parse_move("1 1"), None);
    }

    #[test]
    fn test_render_shows_marks_and_score() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();
        game.apply_move(13).unwrap();

        let text = render(&game);
        assert!(text.contains('X'));
        assert!(text.contains('O'));
        assert!(text.contains("score X 0 - O 0"));
        assert!(text.contains("z=0 open"));
    }

    #[test]
    fn test_describe_results() {
        let mut game = GameState::new();
        for &index in &[0, 1, 9, 2, 18] {
            game.apply_move(index).unwrap();
        }
        assert_eq!(game.result(), GameResult::Won(Player::X));
        let text = describe_result(&game, false);
        assert!(text.contains("You win"));
        assert!(text.contains("through the cube"));

        let text = describe_result(&game, true);
        assert!(text.contains("X wins"));
    }
}
