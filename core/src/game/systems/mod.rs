pub(crate) mod ai;
pub(crate) mod diplomacy;
pub(crate) mod events;
pub(crate) mod internal;
pub(crate) mod military;
pub(crate) mod trade;
