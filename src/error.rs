// File: src/error.rs
//! Error types for the EcoPal core.
//!
//! Loading persisted state never surfaces these; corrupt data falls back to
//! defaults. Errors here come from writes, configuration, and misuse of the
//! reply scheduler, quiz session, or simulations.

/// Top-level error type for the EcoPal core library.
#[derive(Debug, thiserror::Error)]
pub enum EcoPalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("A reply is still pending; wait for it before sending again")]
    ReplyPending,

    #[error("The quiz is already finished")]
    QuizFinished,

    #[error("Invalid answer option {index}: question has {available} options")]
    InvalidOption { index: usize, available: usize },

    #[error("No simulation item called '{0}'")]
    UnknownItem(String),

    #[error("{0} is already part of the village")]
    AlreadyBuilt(String),

    #[error("Costs {cost} but only {budget} is left in the budget")]
    OverBudget { cost: u32, budget: u32 },
}

pub type Result<T> = std::result::Result<T, EcoPalError>;
