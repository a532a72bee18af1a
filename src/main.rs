use anyhow::{bail, Context};
use clap::Parser;
use poker_helper::utils::{logger, validation::Validate};
use poker_helper::{
    AnalysisSession, Card, ClientConfig, ConfigProvider, FileConfig, HandProbabilities,
    HttpAnalysisService,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "poker-helper")]
#[command(about = "Analyze a Texas Hold'em hand against the remote analysis service")]
struct Args {
    #[command(flatten)]
    config: ClientConfig,

    /// Optional TOML configuration file (overrides the service flags)
    #[arg(short, long)]
    config_file: Option<String>,

    /// Pocket cards, e.g. "Ah,Ks"
    #[arg(long, value_delimiter = ',', required = true)]
    hand: Vec<String>,

    /// Community cards, e.g. "7c,8d,9h"
    #[arg(long, value_delimiter = ',')]
    board: Vec<String>,
}

fn parse_cards(field: &str, notations: &[String], max: usize) -> anyhow::Result<Vec<Card>> {
    if notations.len() > max {
        bail!("{} accepts at most {} cards, got {}", field, max, notations.len());
    }
    notations
        .iter()
        .map(|n| {
            n.parse::<Card>()
                .with_context(|| format!("invalid {} card '{}'", field, n))
        })
        .collect()
}

fn print_probabilities(label: &str, probabilities: &HandProbabilities) {
    println!("{}:", label);
    println!("  pair:            {:6.2}%", probabilities.pair);
    println!("  three of a kind: {:6.2}%", probabilities.three_of_a_kind);
    println!("  straight:        {:6.2}%", probabilities.straight);
    println!("  flush:           {:6.2}%", probabilities.flush);
    println!("  full house:      {:6.2}%", probabilities.full_house);
    println!("  four of a kind:  {:6.2}%", probabilities.four_of_a_kind);
    println!("  straight flush:  {:6.2}%", probabilities.straight_flush);
    println!("  royal flush:     {:6.2}%", probabilities.royal_flush);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.config.verbose);

    let hand = parse_cards("hand", &args.hand, 2)?;
    if hand.len() != 2 {
        bail!("exactly 2 pocket cards are required, got {}", hand.len());
    }
    let board = parse_cards("board", &args.board, 5)?;

    // Flag-based config unless a TOML file was given.
    let (service, quiet_period, request_timeout, defaults) = match &args.config_file {
        Some(path) => {
            let config = FileConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            tracing::info!("loaded configuration from {}", path);
            (
                HttpAnalysisService::new(&config)?,
                config.quiet_period(),
                config.request_timeout(),
                config.analysis_defaults(),
            )
        }
        None => {
            args.config.validate()?;
            (
                HttpAnalysisService::new(&args.config)?,
                args.config.quiet_period(),
                args.config.request_timeout(),
                args.config.analysis_defaults(),
            )
        }
    };

    let mut session = AnalysisSession::new(Arc::new(service), quiet_period);
    session.update_options(defaults);
    for (index, card) in hand.iter().enumerate() {
        session.set_hand_card(index, Some(*card));
    }
    for (index, card) in board.iter().enumerate() {
        session.set_board_card(index, Some(*card));
    }

    let hand_display: Vec<String> = hand.iter().map(Card::to_string).collect();
    let board_display: Vec<String> = board.iter().map(Card::to_string).collect();
    println!(
        "Analyzing {} | board: {}",
        hand_display.join(" "),
        if board_display.is_empty() {
            "(preflop)".to_string()
        } else {
            board_display.join(" ")
        }
    );

    let started = Instant::now();
    let deadline = started + quiet_period + request_timeout + Duration::from_secs(1);
    let analysis = loop {
        let view = session.view();
        if let Some(analysis) = view.result {
            break analysis;
        }
        if let Some(error) = view.error {
            eprintln!("❌ {}", error);
            std::process::exit(1);
        }
        if Instant::now() > deadline {
            bail!("timed out waiting for the analysis service");
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    };

    println!("✅ Analysis complete in {} ms\n", started.elapsed().as_millis());
    print_probabilities("Player probabilities", &analysis.player_probabilities);
    print_probabilities("Opponent probabilities", &analysis.opponent_probabilities);
    println!(
        "\nDecision: {} (bet {}): {}",
        analysis.decision.action, analysis.decision.bet_amount, analysis.decision.description
    );

    Ok(())
}
