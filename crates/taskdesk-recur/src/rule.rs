use crate::error::{RecurrenceError, Result};

/// A parsed repeat rule.
///
/// Rules arrive as short text expressions (`"d 3"`, `"w 1,5"`, `"m 31"`,
/// `"y"`) and are parsed once into this enum; the date arithmetic in
/// [`crate::schedule`] only ever sees typed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatRule {
    /// The task does not recur (empty rule string).
    None,
    /// Fires every `every_days` days.
    Daily { every_days: u32 },
    /// Fires on any listed weekday. 1=Sunday … 7=Saturday.
    Weekly { days: Vec<u8> },
    /// Fires on this day of the month, clamped when the month is shorter.
    Monthly { day: u8 },
    /// Fires on the same month/day every year.
    Yearly,
}

impl RepeatRule {
    /// Parse a raw rule expression.
    ///
    /// The empty string parses to [`RepeatRule::None`]; every other
    /// unrecognised or out-of-range form is an [`RecurrenceError::InvalidRule`].
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::None);
        }
        if raw == "y" {
            return Ok(Self::Yearly);
        }
        if let Some(rest) = raw.strip_prefix("d ") {
            let every_days: u32 = rest
                .trim()
                .parse()
                .map_err(|_| invalid(raw))?;
            if every_days == 0 {
                return Err(invalid(raw));
            }
            return Ok(Self::Daily { every_days });
        }
        if let Some(rest) = raw.strip_prefix("w ") {
            let mut days = Vec::new();
            for token in rest.split(',') {
                let day: u8 = token.trim().parse().map_err(|_| invalid(raw))?;
                if !(1..=7).contains(&day) {
                    return Err(invalid(raw));
                }
                days.push(day);
            }
            // split() never yields an empty iterator, so `days` is non-empty here
            return Ok(Self::Weekly { days });
        }
        if let Some(rest) = raw.strip_prefix("m ") {
            let day: u8 = rest.trim().parse().map_err(|_| invalid(raw))?;
            if !(1..=31).contains(&day) {
                return Err(invalid(raw));
            }
            return Ok(Self::Monthly { day });
        }
        Err(invalid(raw))
    }
}

impl std::str::FromStr for RepeatRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn invalid(raw: &str) -> RecurrenceError {
    RecurrenceError::InvalidRule(raw.to_string())
}
