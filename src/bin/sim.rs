use clap::ValueEnum;
use duel::{run_seeded, GameConfig, Variant};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <classic|spaced> <parent-seed> <child-seed>", args[0]);
        std::process::exit(1);
    }
    let variant = Variant::from_str(&args[1], true).map_err(|e| anyhow::anyhow!(e))?;
    let parent_seed: u64 = args[2].parse()?;
    let child_seed: u64 = args[3].parse()?;

    let config = GameConfig::new(variant);
    let report = run_seeded(&config, Some(parent_seed), Some(child_seed)).await?;

    let result = json!({
        "variant": report.variant,
        "parent": report.parent,
        "child": report.child,
        "winner": report.winner(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
