use serde::{Deserialize, Serialize};

use super::military::MilitaryForce;
use super::relations::{RelationStatus, RelationTable};
use super::resources::Resources;
use crate::game::{INITIAL_PRESTIGE, INITIAL_TECHNOLOGY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactionDefinition {
    pub name: String,
    pub description: String,
    pub resources: Resources,
    pub military: MilitaryForce,
}

#[derive(Debug, Clone)]
pub struct FactionState {
    pub name: String,
    pub description: String,
    pub resources: Resources,
    pub military: MilitaryForce,
    pub relations: RelationTable,
    pub prestige: i32,
    pub technology_level: i32,
    pub is_player: bool,
    pub is_alive: bool,
}

impl FactionState {
    pub(crate) fn new(definition: FactionDefinition) -> Self {
        Self {
            name: definition.name,
            description: definition.description,
            resources: definition.resources,
            military: definition.military,
            relations: RelationTable::default(),
            prestige: INITIAL_PRESTIGE,
            technology_level: INITIAL_TECHNOLOGY,
            is_player: false,
            is_alive: true,
        }
    }

    pub fn total_strength(&self) -> i32 {
        self.military.total_strength()
    }

    pub fn relation_status_with(&self, name: &str) -> RelationStatus {
        self.relations.status_of(name)
    }

    pub fn produce_bronze(&mut self) -> i32 {
        let amount = self.resources.tin.min(self.resources.copper);
        self.resources.tin -= amount;
        self.resources.copper -= amount;
        self.resources.bronze += amount;
        amount
    }

    pub fn consume_resources(&mut self) -> ConsumptionReport {
        let food_needed = self.resources.population / 20;
        let military_upkeep = (self.military.infantry
            + self.military.chariots * 2
            + self.military.archers
            + self.military.navy * 2)
            / 10;
        self.resources.food -= food_needed + military_upkeep;

        let starvation = if self.resources.food < 0 {
            let shortfall = -self.resources.food;
            // 1ターンの餓死者は人口の 25% まで。
            let population_loss = (shortfall * 10).min(self.resources.population / 4);
            self.resources.population -= population_loss;
            self.resources.food = 0;
            Some(StarvationReport {
                shortfall,
                population_loss,
            })
        } else {
            None
        };

        ConsumptionReport {
            food_needed,
            military_upkeep,
            starvation,
        }
    }

    pub fn snapshot(&self) -> FactionSnapshot {
        FactionSnapshot {
            name: self.name.clone(),
            resources: self.resources,
            military: self.military,
            total_strength: self.total_strength(),
            prestige: self.prestige,
            technology_level: self.technology_level,
            is_player: self.is_player,
            is_alive: self.is_alive,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StarvationReport {
    pub shortfall: i32,
    pub population_loss: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct ConsumptionReport {
    pub food_needed: i32,
    pub military_upkeep: i32,
    pub starvation: Option<StarvationReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactionSnapshot {
    pub name: String,
    pub resources: Resources,
    pub military: MilitaryForce,
    pub total_strength: i32,
    pub prestige: i32,
    pub technology_level: i32,
    pub is_player: bool,
    pub is_alive: bool,
}
