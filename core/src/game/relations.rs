use std::collections::HashMap;

use crate::game::{MAX_RELATION, MIN_RELATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationStatus {
    Allied,
    Friendly,
    Neutral,
    Unfriendly,
    Hostile,
    War,
}

impl RelationStatus {
    pub fn from_value(value: i32) -> Self {
        if value >= 75 {
            RelationStatus::Allied
        } else if value >= 25 {
            RelationStatus::Friendly
        } else if value >= -25 {
            RelationStatus::Neutral
        } else if value >= -75 {
            RelationStatus::Unfriendly
        } else if value >= MIN_RELATION {
            RelationStatus::Hostile
        } else {
            RelationStatus::War
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RelationStatus::Allied => "同盟",
            RelationStatus::Friendly => "友好",
            RelationStatus::Neutral => "中立",
            RelationStatus::Unfriendly => "不和",
            RelationStatus::Hostile => "敵対",
            RelationStatus::War => "交戦",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RelationTable {
    values: HashMap<String, i32>,
}

impl RelationTable {
    // 未登録の相手は 0 (中立) とみなす。
    pub fn get(&self, name: &str) -> i32 {
        self.values.get(name).copied().unwrap_or(0)
    }

    pub fn modify(&mut self, name: &str, delta: i32) {
        let updated = (self.get(name) + delta).clamp(MIN_RELATION, MAX_RELATION);
        self.values.insert(name.to_owned(), updated);
    }

    // 宣戦布告などの直接設定用。クランプは行わない。
    pub fn set(&mut self, name: &str, value: i32) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn status_of(&self, name: &str) -> RelationStatus {
        RelationStatus::from_value(self.get(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &i32)> {
        self.values.iter()
    }
}
