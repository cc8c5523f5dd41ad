//! Decision providers for simulated agents.
pub mod ai;
