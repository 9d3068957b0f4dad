mod cli;

use anyhow::{Context, Result};
use bronzecollapse_core::{GameBuilder, load_embedded_factions};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    let definitions = load_embedded_factions()?;
    let player = cli::choose_faction(&definitions)?;

    let rng = StdRng::from_entropy();
    let mut game = GameBuilder::new(definitions, &player)
        .with_rng(rng)
        .build()
        .with_context(|| format!("ゲームの初期化に失敗しました: {player}"))?;

    cli::run(&mut game)
}
