use serde::{Deserialize, Serialize};

use super::resources::Resources;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilitaryForce {
    #[serde(default)]
    pub infantry: i32,
    #[serde(default)]
    pub chariots: i32,
    #[serde(default)]
    pub archers: i32,
    #[serde(default)]
    pub navy: i32,
}

impl MilitaryForce {
    pub fn total_strength(&self) -> i32 {
        self.infantry + self.chariots * 5 + self.archers * 2 + self.navy * 3
    }

    pub fn add_units(&mut self, kind: UnitKind, quantity: i32) {
        match kind {
            UnitKind::Infantry => self.infantry += quantity,
            UnitKind::Chariots => self.chariots += quantity,
            UnitKind::Archers => self.archers += quantity,
            UnitKind::Navy => self.navy += quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Infantry,
    Chariots,
    Archers,
    Navy,
}

impl UnitKind {
    pub fn unit_cost(&self) -> Resources {
        match self {
            UnitKind::Infantry => Resources {
                bronze: 10,
                gold: 5,
                ..Resources::default()
            },
            UnitKind::Chariots => Resources {
                bronze: 25,
                gold: 15,
                ..Resources::default()
            },
            UnitKind::Archers => Resources {
                bronze: 8,
                gold: 8,
                ..Resources::default()
            },
            UnitKind::Navy => Resources {
                bronze: 20,
                gold: 20,
                ..Resources::default()
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitKind::Infantry => "歩兵",
            UnitKind::Chariots => "戦車",
            UnitKind::Archers => "弓兵",
            UnitKind::Navy => "海軍",
        }
    }
}
