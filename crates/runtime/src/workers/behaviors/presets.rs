//! Role presets: the set of loops a character class runs.

use std::fmt;
use std::sync::Arc;

use crate::workers::behavior::LoopBehavior;

use super::{AttackLoop, PartyHealLoop, SupportBuffLoop};

/// A named bundle of loop behaviors.
#[derive(Clone)]
pub struct RolePreset {
    name: String,
    behaviors: Vec<Arc<dyn LoopBehavior>>,
}

impl RolePreset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            behaviors: Vec::new(),
        }
    }

    pub fn with(mut self, behavior: impl LoopBehavior + 'static) -> Self {
        self.behaviors.push(Arc::new(behavior));
        self
    }

    /// Attack with healing, party heal and dark blessing.
    pub fn priest() -> Self {
        Self::new("priest")
            .with(AttackLoop::with_healing())
            .with(PartyHealLoop::new())
            .with(SupportBuffLoop::dark_blessing())
    }

    pub fn fighter() -> Self {
        Self::new("fighter").with(AttackLoop::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn behaviors(&self) -> &[Arc<dyn LoopBehavior>] {
        &self.behaviors
    }

    pub(crate) fn into_behaviors(self) -> Vec<Arc<dyn LoopBehavior>> {
        self.behaviors
    }
}

impl fmt::Debug for RolePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loops: Vec<_> = self.behaviors.iter().map(|b| b.name()).collect();
        f.debug_struct("RolePreset")
            .field("name", &self.name)
            .field("loops", &loops)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priest_runs_three_loops() {
        let preset = RolePreset::priest();
        let names: Vec<_> = preset.behaviors().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["attack", "partyheal", "darkblessing"]);
        assert_eq!(RolePreset::fighter().behaviors().len(), 1);
    }
}
