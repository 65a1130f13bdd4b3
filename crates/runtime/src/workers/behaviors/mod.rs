//! Built-in decision loops and the role presets that bundle them.

mod attack;
mod party_heal;
mod presets;
mod support_buff;

pub use attack::AttackLoop;
pub use party_heal::PartyHealLoop;
pub use presets::RolePreset;
pub use support_buff::SupportBuffLoop;

pub(crate) use attack::{choose_heal, choose_target};
