//! Menu choices and their parsing.

use crate::error::{MenuError, MenuResult};
use std::fmt;
use std::str::FromStr;

/// Title printed above the numbered menu.
pub const MENU_TITLE: &str = "Contact Management System";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Search,
    Display,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::Display,
        MenuChoice::Exit,
    ];

    /// The number the user types to select this entry.
    pub fn number(self) -> i64 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Delete => 2,
            MenuChoice::Search => 3,
            MenuChoice::Display => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Contact",
            MenuChoice::Delete => "Delete Contact",
            MenuChoice::Search => "Search Contact",
            MenuChoice::Display => "Display All Contacts",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = MenuError;

    fn try_from(value: i64) -> MenuResult<Self> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(MenuError::OutOfRange(value))
    }
}

/// Parses a line of user input; surrounding whitespace is ignored.
impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> MenuResult<Self> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;
        MenuChoice::try_from(value)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
