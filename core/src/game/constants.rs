pub(crate) const MAX_RELATION: i32 = 100;
pub(crate) const MIN_RELATION: i32 = -100;
pub(crate) const INITIAL_RELATION_SPREAD: i32 = 20;
pub(crate) const INITIAL_PRESTIGE: i32 = 50;
pub(crate) const INITIAL_TECHNOLOGY: i32 = 50;
pub(crate) const GIFT_COST: i32 = 20;
pub(crate) const ALLIANCE_MIN_RELATION: i32 = 25;
pub(crate) const ALLIANCE_RELATION_GAIN: i32 = 25;
pub(crate) const ALLIANCE_ACCEPT_PROBABILITY: f64 = 0.7;
pub(crate) const AID_MIN_RELATION: i32 = 50;
pub(crate) const TRADE_ROUTE_COST: i32 = 10;
pub(crate) const TRADE_ROUTE_RELATION_GAIN: i32 = 10;
pub(crate) const EVENT_PROBABILITY: f64 = 0.3;
pub(crate) const AI_RECRUIT_PROBABILITY: f64 = 0.3;
pub(crate) const VICTORY_TURN: u32 = 50;
pub(crate) const PRESTIGE_VICTORY_THRESHOLD: i32 = 100;
