mod bootstrap;
mod catalog;
mod constants;
pub(crate) use constants::*;
mod error;
mod faction;
mod military;
mod relations;
mod resources;
mod state;
pub(crate) mod systems;

pub use bootstrap::GameBuilder;
pub use catalog::load_embedded_factions;
pub use error::ActionError;
pub use faction::{
    ConsumptionReport, FactionDefinition, FactionSnapshot, FactionState, StarvationReport,
};
pub use military::{MilitaryForce, UnitKind};
pub use relations::{RelationStatus, RelationTable};
pub use resources::Resources;
pub use state::{GameOutcome, GameState, ProductionReport, TurnReport};
pub use systems::ai::AiSummary;
pub use systems::diplomacy::{AidOutcome, AllianceOutcome, GiftOutcome, ThreatOutcome};
pub use systems::events::{EventKind, EventReport};
pub use systems::internal::{InvestmentKind, InvestmentOutcome};
pub use systems::military::{RaidOutcome, RecruitOutcome};
pub use systems::trade::{ExchangeKind, ExchangeOutcome, TradeRouteOutcome};
