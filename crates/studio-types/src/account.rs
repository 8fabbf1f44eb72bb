use serde::{Deserialize, Serialize};

/// Credit-bearing record for one identity.
///
/// The identity is the display name, matched case-sensitively and verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub credits: u32,
}

impl Account {
    pub fn new(name: impl Into<String>, credits: u32) -> Self {
        Self {
            name: name.into(),
            credits,
        }
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.credits >= amount
    }
}
