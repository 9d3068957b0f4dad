use anyhow::{Context, Result};

use super::faction::FactionDefinition;

const EMBEDDED_FACTIONS: &str = include_str!("../../../config/factions.json");

// 勢力構成は固定のゲームデザインであり、実行時設定ではない。
pub fn load_embedded_factions() -> Result<Vec<FactionDefinition>> {
    serde_json::from_str(EMBEDDED_FACTIONS).context("組み込み勢力定義の解析に失敗しました")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_contains_the_six_factions() {
        let definitions = load_embedded_factions().unwrap();
        let names: Vec<&str> = definitions
            .iter()
            .map(|definition| definition.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Mycenaean Greece",
                "Hittite Empire",
                "New Kingdom Egypt",
                "Ugarit",
                "Cyprus",
                "Assyria",
            ]
        );
    }

    #[test]
    fn embedded_catalog_keeps_hand_tuned_stats() {
        let definitions = load_embedded_factions().unwrap();
        let mycenae = &definitions[0];
        assert_eq!(mycenae.resources.food, 120);
        assert_eq!(mycenae.resources.population, 1200);
        assert_eq!(mycenae.military.infantry, 150);
        assert_eq!(mycenae.military.navy, 10);

        let cyprus = &definitions[4];
        assert_eq!(cyprus.resources.copper, 80);
    }
}
