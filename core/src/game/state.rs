use rand::rngs::StdRng;

use super::error::ActionError;
use super::faction::{ConsumptionReport, FactionSnapshot, FactionState};
use super::military::UnitKind;
use super::relations::RelationStatus;
use super::systems::ai::{self, AiSummary};
use super::systems::diplomacy::{
    self, AidOutcome, AllianceOutcome, GiftOutcome, ThreatOutcome,
};
use super::systems::events::{self, EventReport};
use super::systems::internal::{self, InvestmentKind, InvestmentOutcome};
use super::systems::military::{self, RaidOutcome, RecruitOutcome};
use super::systems::trade::{self, ExchangeKind, ExchangeOutcome, TradeRouteOutcome};
use crate::game::{PRESTIGE_VICTORY_THRESHOLD, VICTORY_TURN};

pub struct GameState {
    turn: u32,
    rng: StdRng,
    factions: Vec<FactionState>,
    player_idx: usize,
    game_over: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ProductionReport {
    pub food: i32,
    pub gold: i32,
    pub tin: i32,
    pub copper: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Defeat,
    SoleSurvivor { score: i32 },
    PrestigeVictory { score: i32 },
}

#[derive(Debug, Clone)]
pub struct TurnReport {
    pub turn: u32,
    pub production: ProductionReport,
    pub bronze_forged: i32,
    pub consumption: ConsumptionReport,
    pub ai_reports: Vec<AiSummary>,
    pub collapsed: Vec<String>,
    pub event: Option<EventReport>,
    pub outcome: Option<GameOutcome>,
}

impl GameState {
    pub(crate) fn new(factions: Vec<FactionState>, player_idx: usize, rng: StdRng) -> Self {
        Self {
            turn: 1,
            rng,
            factions,
            player_idx,
            game_over: false,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn factions(&self) -> &[FactionState] {
        &self.factions
    }

    pub fn player(&self) -> &FactionState {
        &self.factions[self.player_idx]
    }

    pub fn player_index(&self) -> usize {
        self.player_idx
    }

    // 1始まりの番号か、大文字小文字を無視した名前で解決する。
    pub fn find_faction_index(&self, query: &str) -> Option<usize> {
        if let Ok(number) = query.parse::<usize>() {
            if number >= 1 && number <= self.factions.len() {
                return Some(number - 1);
            }
            return None;
        }
        self.factions
            .iter()
            .position(|faction| faction.name.eq_ignore_ascii_case(query))
    }

    pub fn alive_faction_names(&self) -> Vec<String> {
        self.factions
            .iter()
            .filter(|faction| faction.is_alive)
            .map(|faction| faction.name.clone())
            .collect()
    }

    pub fn relation_status_between(&self, from: usize, to: usize) -> Option<RelationStatus> {
        if from == to || from >= self.factions.len() || to >= self.factions.len() {
            return None;
        }
        Some(self.factions[from].relation_status_with(&self.factions[to].name))
    }

    pub fn snapshot_of(&self, idx: usize) -> Option<FactionSnapshot> {
        self.factions.get(idx).map(FactionState::snapshot)
    }

    pub fn snapshots(&self) -> Vec<FactionSnapshot> {
        self.factions.iter().map(FactionState::snapshot).collect()
    }

    #[cfg(test)]
    pub(crate) fn factions_mut(&mut self) -> &mut [FactionState] {
        &mut self.factions
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        if self.game_over {
            return Err(ActionError::GameFinished);
        }
        Ok(())
    }

    fn validate_target(&self, target: usize) -> Result<(), ActionError> {
        let Some(faction) = self.factions.get(target) else {
            return Err(ActionError::InvalidTarget(format!("番号 {target}")));
        };
        if target == self.player_idx {
            return Err(ActionError::InvalidTarget(faction.name.clone()));
        }
        if !faction.is_alive {
            return Err(ActionError::InvalidTarget(faction.name.clone()));
        }
        Ok(())
    }

    pub fn send_gift(&mut self, target: usize) -> Result<GiftOutcome, ActionError> {
        self.ensure_active()?;
        self.validate_target(target)?;
        diplomacy::send_gift(&mut self.factions, &mut self.rng, self.player_idx, target)
    }

    pub fn propose_alliance(&mut self, target: usize) -> Result<AllianceOutcome, ActionError> {
        self.ensure_active()?;
        self.validate_target(target)?;
        diplomacy::propose_alliance(&mut self.factions, &mut self.rng, self.player_idx, target)
    }

    pub fn threaten(&mut self, target: usize) -> Result<ThreatOutcome, ActionError> {
        self.ensure_active()?;
        self.validate_target(target)?;
        Ok(diplomacy::threaten(
            &mut self.factions,
            &mut self.rng,
            self.player_idx,
            target,
        ))
    }

    pub fn request_aid(&mut self, target: usize) -> Result<AidOutcome, ActionError> {
        self.ensure_active()?;
        self.validate_target(target)?;
        diplomacy::request_aid(&mut self.factions, &mut self.rng, self.player_idx, target)
    }

    pub fn declare_war(&mut self, target: usize) -> Result<(), ActionError> {
        self.ensure_active()?;
        self.validate_target(target)?;
        diplomacy::declare_war(&mut self.factions, self.player_idx, target);
        Ok(())
    }

    pub fn establish_trade_route(
        &mut self,
        target: usize,
    ) -> Result<TradeRouteOutcome, ActionError> {
        self.ensure_active()?;
        self.validate_target(target)?;
        trade::establish_trade_route(&mut self.factions, &mut self.rng, self.player_idx, target)
    }

    pub fn exchange(&mut self, kind: ExchangeKind) -> Result<ExchangeOutcome, ActionError> {
        self.ensure_active()?;
        trade::exchange(&mut self.factions[self.player_idx], kind)
    }

    pub fn forge_bronze(&mut self) -> Result<i32, ActionError> {
        self.ensure_active()?;
        Ok(self.factions[self.player_idx].produce_bronze())
    }

    pub fn recruit(
        &mut self,
        kind: UnitKind,
        quantity: i32,
    ) -> Result<RecruitOutcome, ActionError> {
        self.ensure_active()?;
        military::recruit(&mut self.factions[self.player_idx], kind, quantity)
    }

    pub fn raid(&mut self, target: usize) -> Result<RaidOutcome, ActionError> {
        self.ensure_active()?;
        self.validate_target(target)?;
        Ok(military::raid(
            &mut self.factions,
            &mut self.rng,
            self.player_idx,
            target,
        ))
    }

    pub fn invest(&mut self, kind: InvestmentKind) -> Result<InvestmentOutcome, ActionError> {
        self.ensure_active()?;
        internal::invest(&mut self.factions[self.player_idx], kind)
    }

    pub fn end_turn(&mut self) -> Result<TurnReport, ActionError> {
        self.ensure_active()?;

        let production = {
            let player = &mut self.factions[self.player_idx];
            // 負の威信・技術は床除算でそのまま収入を削る。
            let production = ProductionReport {
                food: 30 + player.technology_level.div_euclid(10),
                gold: 15 + player.prestige.div_euclid(10),
                tin: 10,
                copper: 10,
            };
            player.resources.food += production.food;
            player.resources.gold += production.gold;
            player.resources.tin += production.tin;
            player.resources.copper += production.copper;
            production
        };

        let bronze_forged = self.factions[self.player_idx].produce_bronze();
        let consumption = self.factions[self.player_idx].consume_resources();

        let mut ai_reports = Vec::new();
        for idx in 0..self.factions.len() {
            if idx == self.player_idx || !self.factions[idx].is_alive {
                continue;
            }
            ai_reports.push(ai::take_turn(&mut self.factions[idx], &mut self.rng));
        }

        let mut collapsed = Vec::new();
        for faction in &mut self.factions {
            if faction.is_alive && faction.resources.population <= 0 {
                faction.is_alive = false;
                collapsed.push(faction.name.clone());
            }
        }

        let event = if self.factions[self.player_idx].is_alive {
            events::trigger_random_event(&mut self.factions, &mut self.rng, self.player_idx)
        } else {
            None
        };

        let outcome = self.evaluate_outcome();
        if outcome.is_some() {
            self.game_over = true;
        }

        let report = TurnReport {
            turn: self.turn,
            production,
            bronze_forged,
            consumption,
            ai_reports,
            collapsed,
            event,
            outcome,
        };
        self.turn += 1;
        Ok(report)
    }

    fn evaluate_outcome(&self) -> Option<GameOutcome> {
        let player = &self.factions[self.player_idx];
        if !player.is_alive {
            return Some(GameOutcome::Defeat);
        }
        let score = player.prestige + player.resources.population / 10;
        if player.prestige >= PRESTIGE_VICTORY_THRESHOLD {
            return Some(GameOutcome::PrestigeVictory { score });
        }
        let alive = self.factions.iter().filter(|f| f.is_alive).count();
        if self.turn >= VICTORY_TURN && alive == 1 {
            return Some(GameOutcome::SoleSurvivor { score });
        }
        None
    }
}
