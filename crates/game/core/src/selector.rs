//! Character selector parsed from user input.

use std::fmt;
use std::str::FromStr;

use crate::state::AvatarId;

/// Which catalog entries a build request targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Every entry in the catalog (`all` or `a`).
    All,
    /// The entry with this avatar id (input made only of digits). `raw` keeps
    /// the digits as typed, leading zeros included.
    ById { id: AvatarId, raw: String },
    /// The entry with this avatar name, compared case-insensitively.
    ByName(String),
}

impl Selector {
    /// Parses raw input. Never fails; anything that is neither `all`/`a` nor
    /// a numeric id is treated as a name.
    pub fn parse(input: &str) -> Self {
        let lowered = input.trim().to_lowercase();
        if lowered == "all" || lowered == "a" {
            return Self::All;
        }
        // Digit strings too large for an id fall through to a name no entry can match.
        if !lowered.is_empty()
            && lowered.bytes().all(|b| b.is_ascii_digit())
            && let Ok(id) = lowered.parse::<u32>()
        {
            return Self::ById {
                id: AvatarId(id),
                raw: lowered,
            };
        }
        Self::ByName(lowered)
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::ById { raw, .. } | Self::ByName(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_aliases_case_insensitively() {
        assert_eq!(Selector::parse("all"), Selector::All);
        assert_eq!(Selector::parse("A"), Selector::All);
        assert_eq!(Selector::parse("ALL"), Selector::All);
    }

    fn by_id(id: u32, raw: &str) -> Selector {
        Selector::ById {
            id: AvatarId(id),
            raw: raw.into(),
        }
    }

    #[test]
    fn digits_become_ids() {
        assert_eq!(Selector::parse("1001"), by_id(1001, "1001"));
        assert_eq!(Selector::parse(" 1001 "), by_id(1001, "1001"));
        assert_eq!(Selector::parse("0042"), by_id(42, "0042"));
    }

    #[test]
    fn everything_else_is_a_lowercased_name() {
        assert_eq!(
            Selector::parse("March7th"),
            Selector::ByName("march7th".into())
        );
        assert_eq!(Selector::parse("-12"), Selector::ByName("-12".into()));
        assert_eq!(Selector::parse(""), Selector::ByName(String::new()));
    }

    #[test]
    fn overflowing_digits_do_not_panic() {
        assert!(matches!(
            Selector::parse("99999999999999999999"),
            Selector::ByName(_)
        ));
    }

    #[test]
    fn display_echoes_input_form() {
        assert_eq!(Selector::parse("Kafka").to_string(), "kafka");
        assert_eq!(Selector::parse("1005").to_string(), "1005");
        assert_eq!(Selector::parse("0042").to_string(), "0042");
    }
}
