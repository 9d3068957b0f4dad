use std::collections::HashSet;

use anyhow::{Result, anyhow, ensure};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::faction::{FactionDefinition, FactionState};
use super::state::GameState;
use super::systems::diplomacy;

pub struct GameBuilder {
    definitions: Vec<FactionDefinition>,
    player: String,
    rng: StdRng,
}

impl GameBuilder {
    pub fn new(definitions: Vec<FactionDefinition>, player: impl Into<String>) -> Self {
        Self {
            definitions,
            player: player.into(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[cfg(test)]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn build(self) -> Result<GameState> {
        let GameBuilder {
            definitions,
            player,
            mut rng,
        } = self;
        ensure!(
            definitions.len() >= 2,
            "勢力が不足しています。最低2つの勢力を定義してください。"
        );

        let mut seen = HashSet::new();
        for definition in &definitions {
            ensure!(
                seen.insert(definition.name.to_ascii_lowercase()),
                "勢力名が重複しています: {}",
                definition.name
            );
        }

        let mut factions: Vec<FactionState> =
            definitions.into_iter().map(FactionState::new).collect();
        let player_idx = factions
            .iter()
            .position(|faction| faction.name.eq_ignore_ascii_case(&player))
            .ok_or_else(|| anyhow!("プレイヤー勢力が見つかりません: {}", player))?;
        factions[player_idx].is_player = true;

        diplomacy::initialise_relations(&mut factions, &mut rng);

        Ok(GameState::new(factions, player_idx, rng))
    }
}
