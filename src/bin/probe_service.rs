use anyhow::Context;
use clap::Parser;
use poker_helper::utils::{logger, validation::Validate};
use poker_helper::{
    AnalysisOptions, AnalysisService, CalculationRequest, Card, ClientConfig, HttpAnalysisService,
};

#[derive(Parser)]
#[command(name = "probe_service")]
#[command(about = "Check connectivity to the poker analysis service")]
struct Args {
    #[command(flatten)]
    config: ClientConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.config.verbose);
    args.config.validate()?;

    println!("🚀 Probing analysis service at {}", args.config.endpoint);

    let service = HttpAnalysisService::new(&args.config)?;

    let info = service
        .service_info()
        .await
        .context("GET /info failed; is the analysis service running?")?;
    println!("✅ {} {} - {}", info.name, info.version, info.description);
    for endpoint in &info.endpoints {
        println!("   endpoint: {}", endpoint);
    }

    // Sample hand, the same one the original client used for its smoke test.
    let hand: Vec<Card> = vec!["Ah".parse()?, "Ks".parse()?];
    let request = CalculationRequest::new(&hand, &[], &AnalysisOptions::default());

    let analysis = service
        .analyze(&request)
        .await
        .context("POST /calculate failed for the sample hand")?;
    println!(
        "✅ calculate: pair {:.2}%, recommended action '{}'",
        analysis.player_probabilities.pair, analysis.decision.action
    );

    let decision = service
        .decide(&request)
        .await
        .context("POST /decision failed for the sample hand")?;
    println!(
        "✅ decision: {} (bet {}): {}",
        decision.action, decision.bet_amount, decision.description
    );

    println!("All connection tests passed");
    Ok(())
}
