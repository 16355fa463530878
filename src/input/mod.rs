//! # Input Module
//!
//! Maps terminal input lines to player commands for the bundled binary.
//!
//! The core consumes discrete intents, one per input event; this module is
//! the thin translation layer in front of it.

use crate::{Direction, Intent};

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A game intent to dispatch through the coordinator.
    Intent(Intent),
    /// Send a chat line into the open dialogue.
    Say(String),
    /// Dismiss the current overlay or close the dialogue.
    Dismiss,
    /// Quit the program.
    Quit,
}

/// Parses one input line into a command.
///
/// Movement uses WASD, `e`/`space` interacts, `.` waits, `q` quits.
/// `say <text>` talks within an open dialogue; an empty line dismisses
/// whatever overlay is up.
///
/// # Examples
///
/// ```
/// use sprout::input::{parse_command, Command};
/// use sprout::{Direction, Intent};
///
/// assert_eq!(
///     parse_command("w"),
///     Some(Command::Intent(Intent::Move(Direction::North)))
/// );
/// assert_eq!(parse_command("q"), Some(Command::Quit));
/// assert_eq!(parse_command(""), Some(Command::Dismiss));
/// assert_eq!(parse_command("xyz"), None);
/// ```
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Some(Command::Dismiss);
    }
    if let Some(text) = trimmed.strip_prefix("say ") {
        return Some(Command::Say(text.to_string()));
    }

    match trimmed {
        "w" | "k" => Some(Command::Intent(Intent::Move(Direction::North))),
        "s" | "j" => Some(Command::Intent(Intent::Move(Direction::South))),
        "a" | "h" => Some(Command::Intent(Intent::Move(Direction::West))),
        "d" | "l" => Some(Command::Intent(Intent::Move(Direction::East))),
        "e" => Some(Command::Intent(Intent::Interact)),
        "." => Some(Command::Intent(Intent::Wait)),
        "q" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            parse_command("w"),
            Some(Command::Intent(Intent::Move(Direction::North)))
        );
        assert_eq!(
            parse_command("j"),
            Some(Command::Intent(Intent::Move(Direction::South)))
        );
        assert_eq!(
            parse_command(" a "),
            Some(Command::Intent(Intent::Move(Direction::West)))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(parse_command("e"), Some(Command::Intent(Intent::Interact)));
        assert_eq!(parse_command("."), Some(Command::Intent(Intent::Wait)));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn test_say_and_dismiss() {
        assert_eq!(
            parse_command("say where is the seed?"),
            Some(Command::Say("where is the seed?".to_string()))
        );
        assert_eq!(parse_command(""), Some(Command::Dismiss));
        assert_eq!(parse_command("   "), Some(Command::Dismiss));
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(parse_command("zz"), None);
    }
}
