//! Parsing raw input lines
//!
//! Timestamps are parsed with [`Timestamp`]'s own `FromStr`; this module only
//! adds the menu selection.

use std::str::FromStr;
use thiserror::Error;

/// Menu entries, numbered 1 to 6 on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Next,
    Search,
    List,
    Exit,
}

#[derive(Debug, Error, PartialEq)]
pub enum ChoiceError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("Option {0} is out of range")]
    OutOfRange(i64),
}

impl FromStr for MenuChoice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;

        match number {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::Delete),
            3 => Ok(MenuChoice::Next),
            4 => Ok(MenuChoice::Search),
            5 => Ok(MenuChoice::List),
            6 => Ok(MenuChoice::Exit),
            other => Err(ChoiceError::OutOfRange(other)),
        }
    }
}
