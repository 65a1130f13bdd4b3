use crate::combat::DamageType;

pub trait ItemOracle: Send + Sync {
    fn item(&self, name: &str) -> Option<&ItemDescriptor>;
}

/// Static properties of an item, keyed by item name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ItemDescriptor {
    pub name: String,
    /// Damage type dealt when wielded in the main hand.
    pub damage_type: Option<DamageType>,
    /// Weapon family (e.g. `"mace"`, `"bow"`), matched against skill requirements.
    pub weapon_type: Option<String>,
}

impl ItemDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn weapon(
        name: impl Into<String>,
        weapon_type: impl Into<String>,
        damage_type: DamageType,
    ) -> Self {
        Self {
            name: name.into(),
            damage_type: Some(damage_type),
            weapon_type: Some(weapon_type.into()),
        }
    }
}
