use rand::Rng;
use rand::rngs::StdRng;

use crate::game::EVENT_PROBABILITY;
use crate::game::faction::FactionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Drought,
    Earthquake,
    SeaPeoples,
    Plague,
    GoodHarvest,
    TradeOpportunity,
    DiplomaticIncident,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Drought => "干ばつ",
            EventKind::Earthquake => "大地震",
            EventKind::SeaPeoples => "海の民",
            EventKind::Plague => "疫病",
            EventKind::GoodHarvest => "豊作",
            EventKind::TradeOpportunity => "交易の好機",
            EventKind::DiplomaticIncident => "外交事件",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventReport {
    Drought { food_lost: i32 },
    Earthquake { gold_lost: i32, population_lost: i32 },
    SeaPeoples { repelled: bool, infantry_lost: i32, gold_lost: i32 },
    Plague { population_lost: i32 },
    GoodHarvest { food_gained: i32 },
    TradeOpportunity { gold_gained: i32 },
    DiplomaticIncident { target: String, change: i32 },
}

impl EventReport {
    pub fn kind(&self) -> EventKind {
        match self {
            EventReport::Drought { .. } => EventKind::Drought,
            EventReport::Earthquake { .. } => EventKind::Earthquake,
            EventReport::SeaPeoples { .. } => EventKind::SeaPeoples,
            EventReport::Plague { .. } => EventKind::Plague,
            EventReport::GoodHarvest { .. } => EventKind::GoodHarvest,
            EventReport::TradeOpportunity { .. } => EventKind::TradeOpportunity,
            EventReport::DiplomaticIncident { .. } => EventKind::DiplomaticIncident,
        }
    }
}

pub(crate) fn trigger_random_event(
    factions: &mut [FactionState],
    rng: &mut StdRng,
    player: usize,
) -> Option<EventReport> {
    if !rng.gen_bool(EVENT_PROBABILITY) {
        return None;
    }
    let kind = match rng.gen_range(0..7) {
        0 => EventKind::Drought,
        1 => EventKind::Earthquake,
        2 => EventKind::SeaPeoples,
        3 => EventKind::Plague,
        4 => EventKind::GoodHarvest,
        5 => EventKind::TradeOpportunity,
        _ => EventKind::DiplomaticIncident,
    };
    Some(apply_event(factions, rng, player, kind))
}

pub(crate) fn apply_event(
    factions: &mut [FactionState],
    rng: &mut StdRng,
    player: usize,
    kind: EventKind,
) -> EventReport {
    match kind {
        EventKind::Drought => {
            let food_lost = rng.gen_range(30..=60);
            let state = &mut factions[player];
            state.resources.food = (state.resources.food - food_lost).max(0);
            EventReport::Drought { food_lost }
        }
        EventKind::Earthquake => {
            let gold_lost = rng.gen_range(20..=40);
            let population_lost = rng.gen_range(50..=150);
            let state = &mut factions[player];
            state.resources.gold = (state.resources.gold - gold_lost).max(0);
            state.resources.population = (state.resources.population - population_lost).max(0);
            EventReport::Earthquake {
                gold_lost,
                population_lost,
            }
        }
        EventKind::SeaPeoples => {
            let state = &mut factions[player];
            if state.military.navy >= 10 {
                state.prestige += 10;
                EventReport::SeaPeoples {
                    repelled: true,
                    infantry_lost: 0,
                    gold_lost: 0,
                }
            } else {
                let infantry_lost = rng.gen_range(20..=40);
                let gold_lost = 30;
                state.military.infantry = (state.military.infantry - infantry_lost).max(0);
                state.resources.gold = (state.resources.gold - gold_lost).max(0);
                EventReport::SeaPeoples {
                    repelled: false,
                    infantry_lost,
                    gold_lost,
                }
            }
        }
        EventKind::Plague => {
            let population_lost = rng.gen_range(100..=300);
            let state = &mut factions[player];
            state.resources.population = (state.resources.population - population_lost).max(0);
            EventReport::Plague { population_lost }
        }
        EventKind::GoodHarvest => {
            let food_gained = rng.gen_range(40..=80);
            factions[player].resources.food += food_gained;
            EventReport::GoodHarvest { food_gained }
        }
        EventKind::TradeOpportunity => {
            let gold_gained = rng.gen_range(30..=60);
            factions[player].resources.gold += gold_gained;
            EventReport::TradeOpportunity { gold_gained }
        }
        EventKind::DiplomaticIncident => {
            // 対象は自分以外の全勢力から。滅亡済みの勢力も含む。
            let others: Vec<usize> = (0..factions.len()).filter(|&i| i != player).collect();
            let target_idx = others[rng.gen_range(0..others.len())];
            let target = factions[target_idx].name.clone();
            let change = rng.gen_range(-20..=20);
            // 片側のみの更新。相手側の見方は変わらない。
            factions[player].relations.modify(&target, change);
            EventReport::DiplomaticIncident { target, change }
        }
    }
}
