use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub food: i32,
    #[serde(default)]
    pub bronze: i32,
    #[serde(default)]
    pub gold: i32,
    #[serde(default)]
    pub tin: i32,
    #[serde(default)]
    pub copper: i32,
    #[serde(default)]
    pub population: i32,
}

impl Resources {
    // 人口は支払い対象に含めない。
    pub fn can_afford(&self, cost: &Resources) -> bool {
        self.food >= cost.food
            && self.bronze >= cost.bronze
            && self.gold >= cost.gold
            && self.tin >= cost.tin
            && self.copper >= cost.copper
    }

    pub fn subtract(&mut self, cost: &Resources) {
        self.food -= cost.food;
        self.bronze -= cost.bronze;
        self.gold -= cost.gold;
        self.tin -= cost.tin;
        self.copper -= cost.copper;
    }

    pub fn add(&mut self, gain: &Resources) {
        self.food += gain.food;
        self.bronze += gain.bronze;
        self.gold += gain.gold;
        self.tin += gain.tin;
        self.copper += gain.copper;
    }

    pub(crate) fn shortage(&self, cost: &Resources) -> Option<(&'static str, i32, i32)> {
        [
            ("食料", cost.food, self.food),
            ("青銅", cost.bronze, self.bronze),
            ("金", cost.gold, self.gold),
            ("錫", cost.tin, self.tin),
            ("銅", cost.copper, self.copper),
        ]
        .into_iter()
        .find(|&(_, required, available)| available < required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affordability_checks_each_tradable() {
        let stock = Resources {
            food: 100,
            bronze: 50,
            gold: 30,
            ..Resources::default()
        };
        let cost = Resources {
            food: 20,
            bronze: 10,
            gold: 5,
            ..Resources::default()
        };
        assert!(stock.can_afford(&cost));

        let too_much = Resources {
            gold: 31,
            ..Resources::default()
        };
        assert!(!stock.can_afford(&too_much));
    }

    #[test]
    fn population_is_excluded_from_affordability() {
        let stock = Resources {
            gold: 10,
            population: 0,
            ..Resources::default()
        };
        let cost = Resources {
            gold: 10,
            population: 500,
            ..Resources::default()
        };
        assert!(stock.can_afford(&cost));
    }

    #[test]
    fn subtract_and_add_are_element_wise() {
        let mut stock = Resources {
            food: 100,
            bronze: 50,
            gold: 30,
            ..Resources::default()
        };
        stock.subtract(&Resources {
            food: 20,
            bronze: 10,
            gold: 5,
            ..Resources::default()
        });
        assert_eq!(stock.food, 80);
        assert_eq!(stock.bronze, 40);
        assert_eq!(stock.gold, 25);

        stock.add(&Resources {
            food: 20,
            gold: 10,
            ..Resources::default()
        });
        assert_eq!(stock.food, 100);
        assert_eq!(stock.gold, 35);
    }

    #[test]
    fn shortage_reports_first_missing_tradable() {
        let stock = Resources {
            food: 100,
            gold: 5,
            ..Resources::default()
        };
        let cost = Resources {
            food: 20,
            gold: 25,
            ..Resources::default()
        };
        let (resource, required, available) = stock.shortage(&cost).unwrap();
        assert_eq!(resource, "金");
        assert_eq!(required, 25);
        assert_eq!(available, 5);
        assert!(stock.shortage(&Resources::default()).is_none());
    }
}
