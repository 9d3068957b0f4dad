use rand::Rng;
use rand::rngs::StdRng;

use crate::game::error::ActionError;
use crate::game::faction::FactionState;
use crate::game::{
    ALLIANCE_ACCEPT_PROBABILITY, ALLIANCE_MIN_RELATION, ALLIANCE_RELATION_GAIN, AID_MIN_RELATION,
    GIFT_COST, INITIAL_RELATION_SPREAD, MIN_RELATION,
};

pub(crate) fn initialise_relations(factions: &mut [FactionState], rng: &mut StdRng) {
    for i in 0..factions.len() {
        for j in 0..factions.len() {
            if i == j {
                continue;
            }
            let name_j = factions[j].name.clone();
            let initial = rng.gen_range(-INITIAL_RELATION_SPREAD..=INITIAL_RELATION_SPREAD);
            factions[i].relations.set(&name_j, initial);
        }
    }
}

pub(crate) fn adjust_bilateral_relation(
    factions: &mut [FactionState],
    idx_a: usize,
    idx_b: usize,
    delta_a: i32,
    delta_b: i32,
) {
    if idx_a == idx_b {
        panic!("同じ勢力同士の相互関係は調整できません");
    }
    let name_a = factions[idx_a].name.clone();
    let name_b = factions[idx_b].name.clone();
    factions[idx_a].relations.modify(&name_b, delta_a);
    factions[idx_b].relations.modify(&name_a, delta_b);
}

#[derive(Debug, Clone, Copy)]
pub struct GiftOutcome {
    pub gold_spent: i32,
    pub improvement: i32,
}

pub(crate) fn send_gift(
    factions: &mut [FactionState],
    rng: &mut StdRng,
    player: usize,
    target: usize,
) -> Result<GiftOutcome, ActionError> {
    let available = factions[player].resources.gold;
    if available < GIFT_COST {
        return Err(ActionError::InsufficientResources {
            resource: "金",
            required: GIFT_COST,
            available,
        });
    }
    factions[player].resources.gold -= GIFT_COST;
    let improvement = rng.gen_range(10..=25);
    adjust_bilateral_relation(factions, player, target, improvement, improvement);
    Ok(GiftOutcome {
        gold_spent: GIFT_COST,
        improvement,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllianceOutcome {
    Accepted { improvement: i32 },
    Declined,
}

pub(crate) fn propose_alliance(
    factions: &mut [FactionState],
    rng: &mut StdRng,
    player: usize,
    target: usize,
) -> Result<AllianceOutcome, ActionError> {
    let current = factions[player].relations.get(&factions[target].name);
    if current < ALLIANCE_MIN_RELATION {
        return Err(ActionError::IneligibleAction(format!(
            "同盟の提案には関係値 {ALLIANCE_MIN_RELATION} 以上が必要です (現在 {current})"
        )));
    }
    if rng.gen_bool(ALLIANCE_ACCEPT_PROBABILITY) {
        adjust_bilateral_relation(
            factions,
            player,
            target,
            ALLIANCE_RELATION_GAIN,
            ALLIANCE_RELATION_GAIN,
        );
        Ok(AllianceOutcome::Accepted {
            improvement: ALLIANCE_RELATION_GAIN,
        })
    } else {
        // 運が悪かっただけであり、状態は一切変化しない。
        Ok(AllianceOutcome::Declined)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThreatOutcome {
    pub change: i32,
}

pub(crate) fn threaten(
    factions: &mut [FactionState],
    rng: &mut StdRng,
    player: usize,
    target: usize,
) -> ThreatOutcome {
    let change = rng.gen_range(-30..=-10);
    adjust_bilateral_relation(factions, player, target, change, change);
    ThreatOutcome { change }
}

#[derive(Debug, Clone, Copy)]
pub struct AidOutcome {
    pub food_granted: i32,
}

pub(crate) fn request_aid(
    factions: &mut [FactionState],
    rng: &mut StdRng,
    player: usize,
    target: usize,
) -> Result<AidOutcome, ActionError> {
    let current = factions[player].relations.get(&factions[target].name);
    if current < AID_MIN_RELATION {
        return Err(ActionError::IneligibleAction(format!(
            "援助の要請には関係値 {AID_MIN_RELATION} 以上が必要です (現在 {current})"
        )));
    }
    let food_granted = rng.gen_range(10..=30);
    factions[player].resources.food += food_granted;
    Ok(AidOutcome { food_granted })
}

pub(crate) fn declare_war(factions: &mut [FactionState], player: usize, target: usize) {
    let name_player = factions[player].name.clone();
    let name_target = factions[target].name.clone();
    // クランプを介さない直接設定。
    factions[player].relations.set(&name_target, MIN_RELATION);
    factions[target].relations.set(&name_player, MIN_RELATION);
}
