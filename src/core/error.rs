use thiserror::Error;

use crate::pantogram::slots::Slot;

#[derive(Error, Debug)]
pub enum GearError {
    #[error("Invalid {slot} value: {value:?}")]
    InvalidSlotValue { slot: Slot, value: String },

    #[error("Selection is missing slots: {missing:?}")]
    IncompleteSelection { missing: Vec<Slot> },

    #[error("Unknown familiar tag: {0}")]
    UnknownTag(String),

    #[error("Unknown familiar: {0}")]
    UnknownFamiliar(String),

    #[error("Unknown distillate modifier: {0}")]
    UnknownModifier(String),

    #[error("Invalid table data: {0}")]
    InvalidTable(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Distillate parse error: {0}")]
    DistillateParse(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GearError>;
