/// Keyboard commands the demo understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nudge the cue and start the strike sequence.
    Strike,
    Reset,
    TopView,
    OriginalView,
}

impl Command {
    /// Map a `KeyboardEvent.code` to a command.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Command::Strike),
            "KeyR" => Some(Command::Reset),
            "KeyT" => Some(Command::TopView),
            "KeyA" => Some(Command::OriginalView),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_commands() {
        assert_eq!(Command::from_key_code("Space"), Some(Command::Strike));
        assert_eq!(Command::from_key_code("KeyR"), Some(Command::Reset));
        assert_eq!(Command::from_key_code("KeyT"), Some(Command::TopView));
        assert_eq!(Command::from_key_code("KeyA"), Some(Command::OriginalView));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(Command::from_key_code("KeyQ"), None);
        assert_eq!(Command::from_key_code("space"), None);
    }
}
