//! Inbound text normalisation
//!
//! Contacts answer menus with a digit, often picked from the emoji keyboard,
//! so `3` and `3️⃣` must select the same option.

/// Keyword that re-sends the current menu from any automated state
pub const MENU_KEYWORD: &str = "menu";

const VARIATION_SELECTOR: char = '\u{FE0F}';
const COMBINING_KEYCAP: char = '\u{20E3}';

/// Classified inbound text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// The `menu` keyword
    MenuKeyword,
    /// A numbered option; 1-9 as digit or keycap emoji, 0 only as a plain digit
    Option(u8),
    /// Anything else, trimmed and lower-cased
    Text(String),
}

impl UserInput {
    /// Classify raw message text
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();

        if text == MENU_KEYWORD {
            return UserInput::MenuKeyword;
        }
        if text == "0" {
            return UserInput::Option(0);
        }

        let mut chars = text.chars();
        let digit = match chars.next().and_then(|c| c.to_digit(10)) {
            Some(d) if d >= 1 => d as u8,
            _ => return UserInput::Text(text),
        };

        let rest: Vec<char> = chars.collect();
        let is_keycap = matches!(
            rest.as_slice(),
            [] | [COMBINING_KEYCAP] | [VARIATION_SELECTOR, COMBINING_KEYCAP]
        );

        if is_keycap {
            UserInput::Option(digit)
        } else {
            UserInput::Text(text)
        }
    }

    /// The selected option number, if any
    pub fn option(&self) -> Option<u8> {
        match self {
            UserInput::Option(n) => Some(*n),
            _ => None,
        }
    }
}
