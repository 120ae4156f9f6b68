use crate::domain::estimate::{RiskEventInput, RiskItemInput};

/// One named risk with the opinions every expert gave for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Risk {
    pub name: String,
    pub inputs: RiskInputs,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RiskInputs {
    Items(Vec<RiskItemInput>),
    Events(Vec<RiskEventInput>),
}

impl RiskInputs {
    pub fn len(&self) -> usize {
        match self {
            RiskInputs::Items(items) => items.len(),
            RiskInputs::Events(events) => events.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
