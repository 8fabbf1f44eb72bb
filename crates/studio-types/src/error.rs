use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Identity must be a non-empty name")]
    InvalidIdentity,

    #[error("Password must not be empty")]
    MissingPassword,

    #[error("Invalid credit amount: {0}")]
    InvalidAmount(u32),

    #[error("Insufficient credits: need {needed}, have {available}")]
    InsufficientCredits { needed: u32, available: u32 },

    #[error("No active session")]
    NoActiveSession,

    #[error("Invalid quantity {requested} (max {max})")]
    InvalidQuantity { requested: u32, max: u32 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        StudioError::Serialization(e.to_string())
    }
}

/// Why a debit was declined. Declines are expected outcomes, so the ledger
/// reports them as values rather than failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebitRefusal {
    NoActiveSession,
    InsufficientCredits { needed: u32, available: u32 },
    InvalidAmount(u32),
}

impl DebitRefusal {
    pub fn reason(&self) -> &'static str {
        match self {
            DebitRefusal::NoActiveSession => "no active session",
            DebitRefusal::InsufficientCredits { .. } => "insufficient credits",
            DebitRefusal::InvalidAmount(_) => "invalid amount",
        }
    }
}

impl From<DebitRefusal> for StudioError {
    fn from(r: DebitRefusal) -> Self {
        match r {
            DebitRefusal::NoActiveSession => StudioError::NoActiveSession,
            DebitRefusal::InsufficientCredits { needed, available } => {
                StudioError::InsufficientCredits { needed, available }
            }
            DebitRefusal::InvalidAmount(amount) => StudioError::InvalidAmount(amount),
        }
    }
}
