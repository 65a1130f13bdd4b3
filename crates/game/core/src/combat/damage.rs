//! Damage range and time-to-kill estimation.

use crate::env::ItemOracle;
use crate::state::{EntitySnapshot, StatusFlags};

use super::curve::MitigationCurve;

/// Damage type, deciding which defensive stat mitigates a hit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DamageType {
    /// Mitigated by armor; can be evaded.
    Physical,
    /// Mitigated by resistance; ignores evasion.
    Magical,
}

/// Expected damage of a single hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageRange {
    pub min: f64,
    pub max: f64,
}

impl DamageRange {
    /// Spread applied around the base damage.
    pub const SPREAD: f64 = 0.1;

    /// The range against defenders that take exactly one damage per hit.
    pub const ONE: DamageRange = DamageRange { min: 1.0, max: 1.0 };

    pub fn around(base: f64) -> Self {
        Self {
            min: base * (1.0 - Self::SPREAD),
            max: base * (1.0 + Self::SPREAD),
        }
    }

    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Pure damage estimator parameterized by the mitigation curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DamageModel {
    curve: MitigationCurve,
}

impl DamageModel {
    pub fn new(curve: MitigationCurve) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &MitigationCurve {
        &self.curve
    }

    /// Explicit damage type, falling back to the main-hand item's type.
    pub fn damage_type(
        attacker: &EntitySnapshot,
        items: &(impl ItemOracle + ?Sized),
    ) -> Option<DamageType> {
        attacker.damage_type.or_else(|| {
            attacker
                .equipment
                .main_hand()
                .and_then(|name| items.item(name))
                .and_then(|item| item.damage_type)
        })
    }

    /// Multiplier for the attacker's damage after the defender's armor or
    /// resistance, reduced by the matching piercing stat.
    pub fn mitigation(
        &self,
        damage_type: Option<DamageType>,
        attacker: &EntitySnapshot,
        defender: &EntitySnapshot,
    ) -> f64 {
        match damage_type {
            Some(DamageType::Physical) => self
                .curve
                .multiplier(defender.armor - attacker.armor_piercing),
            Some(DamageType::Magical) => self
                .curve
                .multiplier(defender.resistance - attacker.resistance_piercing),
            None => 1.0,
        }
    }

    /// `[min, max]` damage of one hit from `attacker` on `defender`.
    pub fn damage_range(
        &self,
        attacker: &EntitySnapshot,
        defender: &EntitySnapshot,
        items: &(impl ItemOracle + ?Sized),
    ) -> DamageRange {
        if defender.status.contains(StatusFlags::ONE_HP) {
            return DamageRange::ONE;
        }

        let damage_type = Self::damage_type(attacker, items);
        let base = attacker.attack.max(0.0) * self.mitigation(damage_type, attacker, defender);
        DamageRange::around(base)
    }

    /// Seconds for `attacker` to kill `defender` assuming every hit lands for
    /// minimum damage. Evasion only counts against physical damage.
    ///
    /// Returns `f64::INFINITY` when the attacker deals no damage or never attacks.
    pub fn time_to_kill(
        &self,
        attacker: &EntitySnapshot,
        defender: &EntitySnapshot,
        items: &(impl ItemOracle + ?Sized),
    ) -> f64 {
        let damage = self.damage_range(attacker, defender, items).min;
        if damage <= 0.0 || attacker.frequency <= 0.0 {
            return f64::INFINITY;
        }

        let evasion = match Self::damage_type(attacker, items) {
            Some(DamageType::Physical) => (1.0 - defender.evasion * 0.01).max(0.0),
            _ => 1.0,
        };
        let attacks = (defender.hp.max(0.0) * evasion / damage).ceil();

        attacks / attacker.frequency
    }
}
