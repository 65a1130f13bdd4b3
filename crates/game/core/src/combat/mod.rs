//! Damage and time-to-kill estimation.
//!
//! This module provides pure functions for estimating combat outcomes between
//! two entity snapshots. Nothing here mutates its inputs.
//!
//! # Core Functions
//!
//! - [`DamageModel::damage_range`]: expected `[min, max]` damage of one hit
//! - [`DamageModel::time_to_kill`]: seconds needed to kill a defender
//! - [`MitigationCurve::multiplier`]: damage multiplier for an effective defense

pub mod curve;
pub mod damage;

pub use curve::{CurveError, CurvePoint, MitigationCurve};
pub use damage::{DamageModel, DamageRange, DamageType};
