use rand::Rng;
use rand::rngs::StdRng;

use crate::game::AI_RECRUIT_PROBABILITY;
use crate::game::faction::{ConsumptionReport, FactionState};
use crate::game::military::UnitKind;
use crate::game::resources::Resources;

#[derive(Debug, Clone)]
pub struct AiSummary {
    pub name: String,
    pub bronze_forged: i32,
    pub produced: Resources,
    pub consumption: ConsumptionReport,
    pub recruited_infantry: bool,
}

// AI勢力の1ターン分。生産 → 消費 → 気まぐれな徴兵。
pub(crate) fn take_turn(faction: &mut FactionState, rng: &mut StdRng) -> AiSummary {
    let bronze_forged = faction.produce_bronze();

    let produced = Resources {
        food: rng.gen_range(20..=40),
        gold: rng.gen_range(10..=20),
        tin: rng.gen_range(5..=15),
        copper: rng.gen_range(5..=15),
        ..Resources::default()
    };
    faction.resources.add(&produced);

    let consumption = faction.consume_resources();

    // 徴兵の判定は先に引く。資金不足ならそのターンは見送り。
    let recruited_infantry = rng.gen_bool(AI_RECRUIT_PROBABILITY)
        && faction.resources.bronze >= 10
        && faction.resources.gold >= 5;
    if recruited_infantry {
        faction.resources.bronze -= 10;
        faction.resources.gold -= 5;
        faction.military.add_units(UnitKind::Infantry, 1);
    }

    AiSummary {
        name: faction.name.clone(),
        bronze_forged,
        produced,
        consumption,
        recruited_infantry,
    }
}
