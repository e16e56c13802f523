//! Reusable test harnesses for stage implementations.
pub mod stage_contract;
