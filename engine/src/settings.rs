use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::game::Mark;

pub const DEFAULT_TITLE: &str = "Tic Tac Toe";

/// Presentation settings shared by every view of a game.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub title: String,
    pub human_symbol: String,
    pub computer_symbol: String,
}

impl GameSettings {
    pub fn symbol_for(&self, mark: Mark) -> Option<&str> {
        match mark {
            Mark::Human => Some(self.human_symbol.as_str()),
            Mark::Computer => Some(self.computer_symbol.as_str()),
            Mark::Empty => None,
        }
    }
}

fn validate_symbol(name: &str, symbol: &str) -> Result<(), String> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(()),
        _ => Err(format!(
            "{} must be exactly one visible character, got {:?}",
            name, symbol
        )),
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title must not be empty".to_string());
        }
        validate_symbol("human_symbol", &self.human_symbol)?;
        validate_symbol("computer_symbol", &self.computer_symbol)?;
        if self.human_symbol == self.computer_symbol {
            return Err(format!(
                "Human and computer symbols must differ, both are {:?}",
                self.human_symbol
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            human_symbol: "X".to_string(),
            computer_symbol: "O".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.symbol_for(Mark::Human), Some("X"));
        assert_eq!(settings.symbol_for(Mark::Computer), Some("O"));
        assert_eq!(settings.symbol_for(Mark::Empty), None);
    }

    #[test]
    fn test_empty_title_is_invalid() {
        let settings = GameSettings {
            title: "   ".to_string(),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_multi_char_symbol_is_invalid() {
        let settings = GameSettings {
            human_symbol: "XX".to_string(),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_blank_symbol_is_invalid() {
        let settings = GameSettings {
            computer_symbol: " ".to_string(),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_identical_symbols_are_invalid() {
        let settings = GameSettings {
            human_symbol: "O".to_string(),
            ..GameSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("must differ"));
    }

    #[test]
    fn test_unicode_symbols_are_valid() {
        let settings = GameSettings {
            human_symbol: "✕".to_string(),
            computer_symbol: "◯".to_string(),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_ok());
    }
}
