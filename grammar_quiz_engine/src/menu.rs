use crate::selection::Parity;

/// What the teacher tools panel can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    SwitchSet(u32),
    Filter(Parity),
    /// raw contents of the "how many" box
    Random(String),
}

/// The set picker of the tools panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMenu {
    active: u32,
    sets: Vec<u32>,
}

impl SetMenu {
    pub fn new(active: u32, mut sets: Vec<u32>) -> Self {
        // discovery hands them over in order, but don't rely on it
        sets.sort_unstable();
        sets.dedup();
        Self { active, sets }
    }

    pub fn active(&self) -> u32 {
        self.active
    }

    pub fn sets(&self) -> &[u32] {
        &self.sets
    }

    /// Each set id with whether it is the one on screen.
    pub fn buttons(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.sets.iter().map(|&set| (set, set == self.active))
    }

    pub fn available_label(&self) -> String {
        format!("{} Available", self.sets.len())
    }
}
