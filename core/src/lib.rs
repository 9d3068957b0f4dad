mod game;

pub use game::{
    ActionError, AiSummary, AllianceOutcome, AidOutcome, ConsumptionReport, EventKind, EventReport,
    ExchangeKind, ExchangeOutcome, FactionDefinition, FactionSnapshot, FactionState, GameBuilder,
    GameOutcome, GameState, GiftOutcome, InvestmentKind, InvestmentOutcome, MilitaryForce,
    ProductionReport, RaidOutcome, RecruitOutcome, RelationStatus, RelationTable, Resources,
    StarvationReport, ThreatOutcome, TradeRouteOutcome, TurnReport, UnitKind,
    load_embedded_factions,
};
