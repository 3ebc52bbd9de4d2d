#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DonorRemovalOutcome {
    Removed,
    NotFound,
}

impl DonorRemovalOutcome {
    pub fn from_removed(removed: bool) -> Self {
        if removed { Self::Removed } else { Self::NotFound }
    }

    pub fn was_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}
