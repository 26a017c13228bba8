//! Keyboard input vocabulary

/// A key press, as far as the game cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM-style key name to a `Key`
    ///
    /// `"Enter"` and `"Backspace"` are recognized by name; any single
    /// character becomes `Char`. Everything else is `Other`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Key;
    ///
    /// assert_eq!(Key::from_name("Enter"), Key::Enter);
    /// assert_eq!(Key::from_name("q"), Key::Char('q'));
    /// assert_eq!(Key::from_name("Shift"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "Backspace" => Self::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }

    /// The uppercase letter this key types, if it types one
    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Self::Char(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_named_keys() {
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("Backspace"), Key::Backspace);
        assert_eq!(Key::from_name("enter"), Key::Other);
        assert_eq!(Key::from_name("ArrowLeft"), Key::Other);
        assert_eq!(Key::from_name(""), Key::Other);
    }

    #[test]
    fn from_name_single_characters() {
        assert_eq!(Key::from_name("a"), Key::Char('a'));
        assert_eq!(Key::from_name("Z"), Key::Char('Z'));
        assert_eq!(Key::from_name("1"), Key::Char('1'));
    }

    #[test]
    fn letter_uppercases_ascii_letters_only() {
        assert_eq!(Key::Char('a').letter(), Some('A'));
        assert_eq!(Key::Char('Q').letter(), Some('Q'));
        assert_eq!(Key::Char('7').letter(), None);
        assert_eq!(Key::Char('é').letter(), None);
        assert_eq!(Key::Enter.letter(), None);
    }
}
