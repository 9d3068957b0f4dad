use rand::Rng;
use rand::rngs::StdRng;

use super::diplomacy::adjust_bilateral_relation;
use crate::game::error::ActionError;
use crate::game::faction::FactionState;
use crate::game::military::UnitKind;
use crate::game::resources::Resources;

#[derive(Debug, Clone, Copy)]
pub struct RecruitOutcome {
    pub kind: UnitKind,
    pub quantity: i32,
    pub cost: Resources,
}

pub(crate) fn recruit(
    faction: &mut FactionState,
    kind: UnitKind,
    quantity: i32,
) -> Result<RecruitOutcome, ActionError> {
    if quantity <= 0 {
        return Err(ActionError::IneligibleAction(
            "募集数は1以上で指定してください".to_owned(),
        ));
    }
    let unit = kind.unit_cost();
    let cost = Resources {
        bronze: unit.bronze * quantity,
        gold: unit.gold * quantity,
        ..Resources::default()
    };
    if let Some((resource, required, available)) = faction.resources.shortage(&cost) {
        return Err(ActionError::InsufficientResources {
            resource,
            required,
            available,
        });
    }
    faction.resources.subtract(&cost);
    faction.military.add_units(kind, quantity);
    Ok(RecruitOutcome {
        kind,
        quantity,
        cost,
    })
}

#[derive(Debug, Clone, Copy)]
pub struct RaidOutcome {
    pub victory: bool,
    pub attacker_strength: i32,
    pub defender_strength: i32,
    pub loot_gold: i32,
    pub loot_food: i32,
    pub attacker_losses: i32,
    pub defender_losses: i32,
    pub prestige_change: i32,
}

pub(crate) fn raid(
    factions: &mut [FactionState],
    rng: &mut StdRng,
    attacker: usize,
    defender: usize,
) -> RaidOutcome {
    let attacker_strength = factions[attacker].military.total_strength();
    // 防衛側は地の利により半分の戦力で同等に戦う。
    let defender_strength = factions[defender].military.total_strength() / 2;

    if attacker_strength > defender_strength {
        let loot_gold = rng.gen_range(20..=50);
        let loot_food = rng.gen_range(10..=30);
        let attacker_losses = rng.gen_range(5..=15);
        let defender_losses = rng.gen_range(10..=25);
        factions[attacker].resources.gold += loot_gold;
        factions[attacker].resources.food += loot_food;
        apply_infantry_losses(&mut factions[attacker], attacker_losses);
        apply_infantry_losses(&mut factions[defender], defender_losses);
        adjust_bilateral_relation(factions, attacker, defender, -30, -30);
        factions[attacker].prestige += 5;
        RaidOutcome {
            victory: true,
            attacker_strength,
            defender_strength,
            loot_gold,
            loot_food,
            attacker_losses,
            defender_losses,
            prestige_change: 5,
        }
    } else {
        let attacker_losses = rng.gen_range(15..=30);
        let defender_losses = rng.gen_range(5..=10);
        apply_infantry_losses(&mut factions[attacker], attacker_losses);
        apply_infantry_losses(&mut factions[defender], defender_losses);
        adjust_bilateral_relation(factions, attacker, defender, -20, -10);
        factions[attacker].prestige -= 5;
        RaidOutcome {
            victory: false,
            attacker_strength,
            defender_strength,
            loot_gold: 0,
            loot_food: 0,
            attacker_losses,
            defender_losses,
            prestige_change: -5,
        }
    }
}

// 兵数は負にしない。損耗の報告値はロール結果のまま。
fn apply_infantry_losses(faction: &mut FactionState, losses: i32) {
    faction.military.infantry = (faction.military.infantry - losses).max(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::faction::FactionDefinition;
    use crate::game::military::MilitaryForce;
    use rand::SeedableRng;

    fn faction(name: &str, resources: Resources, military: MilitaryForce) -> FactionState {
        FactionState::new(FactionDefinition {
            name: name.to_owned(),
            description: String::new(),
            resources,
            military,
        })
    }

    #[test]
    fn recruiting_deducts_cost_and_adds_units() {
        let mut state = faction(
            "Alashiya",
            Resources {
                bronze: 100,
                gold: 100,
                ..Resources::default()
            },
            MilitaryForce::default(),
        );
        let outcome = recruit(&mut state, UnitKind::Chariots, 3).unwrap();
        assert_eq!(outcome.cost.bronze, 75);
        assert_eq!(outcome.cost.gold, 45);
        assert_eq!(state.military.chariots, 3);
        assert_eq!(state.resources.bronze, 25);
        assert_eq!(state.resources.gold, 55);
    }

    #[test]
    fn recruiting_rejects_unaffordable_orders_without_mutation() {
        let mut state = faction(
            "Alashiya",
            Resources {
                bronze: 19,
                gold: 100,
                ..Resources::default()
            },
            MilitaryForce::default(),
        );
        let error = recruit(&mut state, UnitKind::Navy, 1).unwrap_err();
        assert!(matches!(
            error,
            ActionError::InsufficientResources {
                resource: "青銅",
                ..
            }
        ));
        assert_eq!(state.resources.bronze, 19);
        assert_eq!(state.military.navy, 0);
    }

    #[test]
    fn recruiting_rejects_non_positive_quantities() {
        let mut state = faction(
            "Alashiya",
            Resources {
                bronze: 100,
                gold: 100,
                ..Resources::default()
            },
            MilitaryForce::default(),
        );
        assert!(matches!(
            recruit(&mut state, UnitKind::Infantry, 0),
            Err(ActionError::IneligibleAction(_))
        ));
    }

    #[test]
    fn raid_with_superior_strength_always_wins() {
        // 攻撃側 300 対 防衛側 400 → 半減評価 200 で攻撃側の勝利。
        let mut factions = vec![
            faction(
                "Alashiya",
                Resources::default(),
                MilitaryForce {
                    infantry: 300,
                    ..MilitaryForce::default()
                },
            ),
            faction(
                "Amurru",
                Resources::default(),
                MilitaryForce {
                    infantry: 400,
                    ..MilitaryForce::default()
                },
            ),
        ];
        let mut rng = StdRng::seed_from_u64(13);
        let outcome = raid(&mut factions, &mut rng, 0, 1);
        assert!(outcome.victory);
        assert_eq!(outcome.attacker_strength, 300);
        assert_eq!(outcome.defender_strength, 200);
        assert!((20..=50).contains(&outcome.loot_gold));
        assert!((10..=30).contains(&outcome.loot_food));
        assert!((5..=15).contains(&outcome.attacker_losses));
        assert!((10..=25).contains(&outcome.defender_losses));
        assert_eq!(factions[0].resources.gold, outcome.loot_gold);
        assert_eq!(factions[0].military.infantry, 300 - outcome.attacker_losses);
        assert_eq!(factions[1].military.infantry, 400 - outcome.defender_losses);
        assert_eq!(factions[0].relations.get("Amurru"), -30);
        assert_eq!(factions[1].relations.get("Alashiya"), -30);
        assert_eq!(factions[0].prestige, 55);
    }

    #[test]
    fn raid_at_equal_effective_strength_fails() {
        // 同値では防衛側が守り切る。
        let mut factions = vec![
            faction(
                "Alashiya",
                Resources::default(),
                MilitaryForce {
                    infantry: 200,
                    ..MilitaryForce::default()
                },
            ),
            faction(
                "Amurru",
                Resources::default(),
                MilitaryForce {
                    infantry: 400,
                    ..MilitaryForce::default()
                },
            ),
        ];
        let mut rng = StdRng::seed_from_u64(14);
        let outcome = raid(&mut factions, &mut rng, 0, 1);
        assert!(!outcome.victory);
        assert_eq!(outcome.loot_gold, 0);
        assert!((15..=30).contains(&outcome.attacker_losses));
        assert!((5..=10).contains(&outcome.defender_losses));
        assert_eq!(factions[0].relations.get("Amurru"), -20);
        assert_eq!(factions[1].relations.get("Alashiya"), -10);
        assert_eq!(factions[0].prestige, 45);
    }

    #[test]
    fn infantry_losses_clamp_at_zero_but_report_the_roll() {
        // 戦車の戦力で防衛側が勝つが、歩兵はわずかしかいない。
        let mut factions = vec![
            faction(
                "Alashiya",
                Resources::default(),
                MilitaryForce {
                    infantry: 100,
                    ..MilitaryForce::default()
                },
            ),
            faction(
                "Amurru",
                Resources::default(),
                MilitaryForce {
                    infantry: 3,
                    chariots: 100,
                    ..MilitaryForce::default()
                },
            ),
        ];
        let mut rng = StdRng::seed_from_u64(15);
        let outcome = raid(&mut factions, &mut rng, 0, 1);
        assert!(!outcome.victory);
        assert!((5..=10).contains(&outcome.defender_losses));
        assert_eq!(factions[1].military.infantry, 0);
    }
}
