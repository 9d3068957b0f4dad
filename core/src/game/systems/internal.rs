use crate::game::error::ActionError;
use crate::game::faction::FactionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentKind {
    Agriculture,
    Technology,
    Festival,
}

impl InvestmentKind {
    pub fn cost(&self) -> i32 {
        match self {
            InvestmentKind::Agriculture => 50,
            InvestmentKind::Technology => 60,
            InvestmentKind::Festival => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentKind::Agriculture => "農業投資",
            InvestmentKind::Technology => "技術投資",
            InvestmentKind::Festival => "祝祭",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InvestmentOutcome {
    pub kind: InvestmentKind,
    pub gold_spent: i32,
    pub food_gained: i32,
    pub technology_gained: i32,
    pub prestige_gained: i32,
}

pub(crate) fn invest(
    faction: &mut FactionState,
    kind: InvestmentKind,
) -> Result<InvestmentOutcome, ActionError> {
    let cost = kind.cost();
    let available = faction.resources.gold;
    if available < cost {
        return Err(ActionError::InsufficientResources {
            resource: "金",
            required: cost,
            available,
        });
    }
    faction.resources.gold -= cost;
    let mut outcome = InvestmentOutcome {
        kind,
        gold_spent: cost,
        food_gained: 0,
        technology_gained: 0,
        prestige_gained: 0,
    };
    match kind {
        InvestmentKind::Agriculture => {
            faction.resources.food += 40;
            outcome.food_gained = 40;
        }
        InvestmentKind::Technology => {
            faction.technology_level += 5;
            outcome.technology_gained = 5;
        }
        InvestmentKind::Festival => {
            faction.prestige += 10;
            outcome.prestige_gained = 10;
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::faction::FactionDefinition;
    use crate::game::military::MilitaryForce;
    use crate::game::resources::Resources;

    fn faction_with_gold(gold: i32) -> FactionState {
        FactionState::new(FactionDefinition {
            name: "Alashiya".to_owned(),
            description: String::new(),
            resources: Resources {
                gold,
                ..Resources::default()
            },
            military: MilitaryForce::default(),
        })
    }

    #[test]
    fn agriculture_converts_gold_into_food() {
        let mut faction = faction_with_gold(50);
        let outcome = invest(&mut faction, InvestmentKind::Agriculture).unwrap();
        assert_eq!(outcome.gold_spent, 50);
        assert_eq!(outcome.food_gained, 40);
        assert_eq!(faction.resources.gold, 0);
        assert_eq!(faction.resources.food, 40);
    }

    #[test]
    fn technology_raises_the_level() {
        let mut faction = faction_with_gold(60);
        let outcome = invest(&mut faction, InvestmentKind::Technology).unwrap();
        assert_eq!(outcome.technology_gained, 5);
        assert_eq!(faction.technology_level, 55);
        assert_eq!(faction.resources.gold, 0);
    }

    #[test]
    fn festival_raises_prestige() {
        let mut faction = faction_with_gold(30);
        let outcome = invest(&mut faction, InvestmentKind::Festival).unwrap();
        assert_eq!(outcome.prestige_gained, 10);
        assert_eq!(faction.prestige, 60);
        assert_eq!(faction.resources.gold, 0);
    }

    #[test]
    fn investment_rejects_without_gold() {
        let mut faction = faction_with_gold(29);
        let error = invest(&mut faction, InvestmentKind::Festival).unwrap_err();
        assert_eq!(
            error,
            ActionError::InsufficientResources {
                resource: "金",
                required: 30,
                available: 29,
            }
        );
        assert_eq!(faction.resources.gold, 29);
        assert_eq!(faction.prestige, 50);
    }
}
