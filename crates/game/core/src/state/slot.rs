use super::Participant;

/// A fighter position in the match that may not have been filled yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FighterSlot {
    #[default]
    Unset,
    Ready(Participant),
}

impl FighterSlot {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn get(&self) -> Option<&Participant> {
        match self {
            Self::Ready(participant) => Some(participant),
            Self::Unset => None,
        }
    }
}

impl From<Participant> for FighterSlot {
    fn from(participant: Participant) -> Self {
        Self::Ready(participant)
    }
}
