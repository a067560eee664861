//! Simulate command - self-play batches
//!
//! X plays uniformly random eligible cells, O plays the heuristic, and the
//! batch is summarized per result. With a fixed seed the whole batch is
//! reproducible, including the heuristic's tie-breaks.

use anyhow::Result;
use clap::Args;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use cubetac_core::{GameResult, GameState, HeuristicAi, Player, CELL_COUNT};

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// RNG seed for a reproducible batch
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    result: GameResult,
    moves: u32,
    /// Match ended on a cross-layer line rather than on layers
    instant_win: bool,
}

/// Aggregated batch results
#[derive(Clone, Debug)]
struct SimResults {
    games: Vec<GameRecord>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    stalled: usize,
    instant_wins: usize,
    avg_moves: f32,
}

/// Run simulate command: play the batch, then report
pub fn run(args: SimulateArgs) -> Result<()> {
    let mut rng = create_rng(args.seed);

    tracing::info!("simulating {} self-play games", args.games);

    let results = play_batch(args.games, &mut rng);
    report_results(&results, args.json);

    Ok(())
}

/// Play all games in the batch
fn play_batch(games: usize, rng: &mut ChaCha8Rng) -> SimResults {
    let mut records = Vec::with_capacity(games);

    for game_number in 1..=games {
        let record = play_single_game(game_number, rng);
        tracing::debug!(
            "game {}: {:?} in {} moves",
            record.game_number,
            record.result,
            record.moves
        );
        records.push(record);
    }

    compute_statistics(records)
}

/// One game: random X against the heuristic O
fn play_single_game(game_number: usize, rng: &mut ChaCha8Rng) -> GameRecord {
    let mut game = GameState::new();
    let mut ai = HeuristicAi::with_seed(rng.gen());
    let mut moves = 0;

    while !game.is_terminal() {
        let index = if game.current_player() == Player::X {
            random_eligible(&game, rng)
        } else {
            ai.choose_move(game.board(), game.layer_outcomes())
        };

        // No eligible cell for either side: the game stalls
        let Some(index) = index else { break };

        game.apply_move(index)
            .expect("eligible moves are always accepted");
        moves += 1;
    }

    GameRecord {
        game_number,
        result: game.result(),
        moves,
        instant_win: game.winning_line().is_some(),
    }
}

/// Uniformly random eligible cell, if any
fn random_eligible(game: &GameState, rng: &mut ChaCha8Rng) -> Option<usize> {
    let open: Vec<usize> = (0..CELL_COUNT).filter(|&i| game.is_eligible(i)).collect();
    open.choose(rng).copied()
}

/// Aggregate statistics from game records
fn compute_statistics(games: Vec<GameRecord>) -> SimResults {
    let count = |result: GameResult| games.iter().filter(|g| g.result == result).count();

    let x_wins = count(GameResult::Won(Player::X));
    let o_wins = count(GameResult::Won(Player::O));
    let draws = count(GameResult::Draw);
    let stalled = count(GameResult::Ongoing);
    let instant_wins = games.iter().filter(|g| g.instant_win).count();

    let total_moves: u32 = games.iter().map(|g| g.moves).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    SimResults {
        games,
        x_wins,
        o_wins,
        draws,
        stalled,
        instant_wins,
        avg_moves,
    }
}

/// Report batch results
fn report_results(results: &SimResults, json: bool) {
    if json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

/// Print results as JSON
fn print_json_results(results: &SimResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        result: String,
        moves: u32,
        instant_win: bool,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        x_wins: usize,
        o_wins: usize,
        draws: usize,
        stalled: usize,
        instant_wins: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        x_wins: results.x_wins,
        o_wins: results.o_wins,
        draws: results.draws,
        stalled: results.stalled,
        instant_wins: results.instant_wins,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                result: format!("{:?}", g.result),
                moves: g.moves,
                instant_win: g.instant_win,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &SimResults) {
    let total = results.games.len();
    let pct = |n: usize| {
        if total > 0 {
            n as f32 / total as f32 * 100.0
        } else {
            0.0
        }
    };

    println!("\n=== Simulation Results ===");
    println!("Total games:        {}", total);
    println!("X (random) wins:    {} ({:.1}%)", results.x_wins, pct(results.x_wins));
    println!("O (heuristic) wins: {} ({:.1}%)", results.o_wins, pct(results.o_wins));
    println!("Draws:              {} ({:.1}%)", results.draws, pct(results.draws));
    println!("Stalled:            {} ({:.1}%)", results.stalled, pct(results.stalled));
    println!("Cross-layer wins:   {}", results.instant_wins);
    println!("Avg moves:          {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: {:?} in {} moves{}",
            game.game_number,
            game.result,
            game.moves,
            if game.instant_win { " (cross-layer)" } else { "" }
        );
    }
}

/// Create RNG from seed or entropy
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
