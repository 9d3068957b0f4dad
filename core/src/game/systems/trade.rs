use rand::Rng;
use rand::rngs::StdRng;

use crate::game::error::ActionError;
use crate::game::faction::FactionState;
use crate::game::resources::Resources;
use crate::game::{TRADE_ROUTE_COST, TRADE_ROUTE_RELATION_GAIN};

#[derive(Debug, Clone, Copy)]
pub struct TradeRouteOutcome {
    pub gold_spent: i32,
    pub relation_gain: i32,
    pub gold_bonus: i32,
}

pub(crate) fn establish_trade_route(
    factions: &mut [FactionState],
    rng: &mut StdRng,
    player: usize,
    target: usize,
) -> Result<TradeRouteOutcome, ActionError> {
    let available = factions[player].resources.gold;
    if available < TRADE_ROUTE_COST {
        return Err(ActionError::InsufficientResources {
            resource: "金",
            required: TRADE_ROUTE_COST,
            available,
        });
    }
    let target_name = factions[target].name.clone();
    let player_state = &mut factions[player];
    player_state.resources.gold -= TRADE_ROUTE_COST;
    // 関係値の改善は自国側のみ。相手側は更新しない。
    player_state
        .relations
        .modify(&target_name, TRADE_ROUTE_RELATION_GAIN);
    let gold_bonus = rng.gen_range(15..=30);
    player_state.resources.gold += gold_bonus;
    Ok(TradeRouteOutcome {
        gold_spent: TRADE_ROUTE_COST,
        relation_gain: TRADE_ROUTE_RELATION_GAIN,
        gold_bonus,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeKind {
    FoodToGold,
    BronzeToGold,
    GoldToTin,
    GoldToCopper,
}

impl ExchangeKind {
    pub fn give(&self) -> Resources {
        match self {
            ExchangeKind::FoodToGold => Resources {
                food: 20,
                ..Resources::default()
            },
            ExchangeKind::BronzeToGold => Resources {
                bronze: 15,
                ..Resources::default()
            },
            ExchangeKind::GoldToTin | ExchangeKind::GoldToCopper => Resources {
                gold: 25,
                ..Resources::default()
            },
        }
    }

    pub fn receive(&self) -> Resources {
        match self {
            ExchangeKind::FoodToGold => Resources {
                gold: 10,
                ..Resources::default()
            },
            ExchangeKind::BronzeToGold => Resources {
                gold: 20,
                ..Resources::default()
            },
            ExchangeKind::GoldToTin => Resources {
                tin: 15,
                ..Resources::default()
            },
            ExchangeKind::GoldToCopper => Resources {
                copper: 15,
                ..Resources::default()
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExchangeKind::FoodToGold => "食料20 → 金10",
            ExchangeKind::BronzeToGold => "青銅15 → 金20",
            ExchangeKind::GoldToTin => "金25 → 錫15",
            ExchangeKind::GoldToCopper => "金25 → 銅15",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExchangeOutcome {
    pub gave: Resources,
    pub received: Resources,
}

pub(crate) fn exchange(
    faction: &mut FactionState,
    kind: ExchangeKind,
) -> Result<ExchangeOutcome, ActionError> {
    let cost = kind.give();
    if let Some((resource, required, available)) = faction.resources.shortage(&cost) {
        return Err(ActionError::InsufficientResources {
            resource,
            required,
            available,
        });
    }
    let gain = kind.receive();
    faction.resources.subtract(&cost);
    faction.resources.add(&gain);
    Ok(ExchangeOutcome {
        gave: cost,
        received: gain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::faction::FactionDefinition;
    use crate::game::military::MilitaryForce;
    use rand::SeedableRng;

    fn faction_with(resources: Resources) -> FactionState {
        FactionState::new(FactionDefinition {
            name: "Alashiya".to_owned(),
            description: String::new(),
            resources,
            military: MilitaryForce::default(),
        })
    }

    #[test]
    fn trade_route_improves_only_the_initiators_view() {
        let mut factions = vec![
            faction_with(Resources {
                gold: 50,
                ..Resources::default()
            }),
            faction_with(Resources::default()),
        ];
        factions[1].name = "Amurru".to_owned();
        let mut rng = StdRng::seed_from_u64(11);

        let outcome = establish_trade_route(&mut factions, &mut rng, 0, 1).unwrap();
        assert_eq!(outcome.gold_spent, 10);
        assert!((15..=30).contains(&outcome.gold_bonus));
        assert_eq!(factions[0].resources.gold, 50 - 10 + outcome.gold_bonus);
        assert_eq!(factions[0].relations.get("Amurru"), 10);
        assert_eq!(factions[1].relations.get("Alashiya"), 0);
    }

    #[test]
    fn trade_route_requires_gold() {
        let mut factions = vec![
            faction_with(Resources {
                gold: 9,
                ..Resources::default()
            }),
            faction_with(Resources::default()),
        ];
        factions[1].name = "Amurru".to_owned();
        let mut rng = StdRng::seed_from_u64(12);
        assert!(establish_trade_route(&mut factions, &mut rng, 0, 1).is_err());
        assert_eq!(factions[0].resources.gold, 9);
        assert_eq!(factions[0].relations.get("Amurru"), 0);
    }

    #[test]
    fn fixed_rate_exchanges_apply_their_rates() {
        let mut faction = faction_with(Resources {
            food: 20,
            bronze: 15,
            gold: 50,
            ..Resources::default()
        });

        exchange(&mut faction, ExchangeKind::FoodToGold).unwrap();
        assert_eq!(faction.resources.food, 0);
        assert_eq!(faction.resources.gold, 60);

        exchange(&mut faction, ExchangeKind::BronzeToGold).unwrap();
        assert_eq!(faction.resources.bronze, 0);
        assert_eq!(faction.resources.gold, 80);

        exchange(&mut faction, ExchangeKind::GoldToTin).unwrap();
        assert_eq!(faction.resources.tin, 15);
        assert_eq!(faction.resources.gold, 55);

        exchange(&mut faction, ExchangeKind::GoldToCopper).unwrap();
        assert_eq!(faction.resources.copper, 15);
        assert_eq!(faction.resources.gold, 30);
    }

    #[test]
    fn exchange_rejects_without_balance_and_mutates_nothing() {
        let mut faction = faction_with(Resources {
            food: 19,
            ..Resources::default()
        });
        let error = exchange(&mut faction, ExchangeKind::FoodToGold).unwrap_err();
        assert_eq!(
            error,
            ActionError::InsufficientResources {
                resource: "食料",
                required: 20,
                available: 19,
            }
        );
        assert_eq!(faction.resources.food, 19);
        assert_eq!(faction.resources.gold, 0);
    }
}
