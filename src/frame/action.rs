use std::fmt;

/// A button press on the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Show the latest finalized epoch id
    EpochId,
    /// Show the top 3 pairs by 24h volume
    TopPairs,
    /// Show aggregate 24h UniswapV2 stats
    AggregateStats,
    /// Reset button; back to the welcome view
    Reset,
    /// Initial view, or a selector we do not recognize
    Idle,
}

/// Buttons in the order they are declared on the frame (index 1-based)
pub const BUTTONS: [(Action, &str); 4] = [
    (Action::EpochId, "Get EpochID"),
    (Action::TopPairs, "Top 3"),
    (Action::AggregateStats, "UniswapV2 Total"),
    (Action::Reset, "Reset"),
];

impl Action {
    /// Parse a button value; anything unrecognized is `Idle`
    pub fn from_selector(value: Option<&str>) -> Self {
        match value {
            Some("epochid") => Action::EpochId,
            Some("threepairs") => Action::TopPairs,
            Some("uswpv2agg") => Action::AggregateStats,
            Some("reset") => Action::Reset,
            _ => Action::Idle,
        }
    }

    /// Map a 1-based frame button index onto its action
    pub fn from_button_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| BUTTONS.get(i))
            .map(|(action, _)| *action)
            .unwrap_or(Action::Idle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::EpochId => "epochid",
            Action::TopPairs => "threepairs",
            Action::AggregateStats => "uswpv2agg",
            Action::Reset => "reset",
            Action::Idle => "none",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
