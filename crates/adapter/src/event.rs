//! User-initiated events delivered to the controller.

/// The three inputs the presentation surface can originate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A cell was selected (flat index 0-8; out-of-range is tolerated and
    /// rejected downstream).
    CellSelected(usize),
    /// Start a game. Missing or blank names fall back to the defaults.
    Start {
        player_one: Option<String>,
        player_two: Option<String>,
    },
    /// Restart with the fixed default names.
    Restart,
}

impl UiEvent {
    /// Convenience constructor for `Start`
    pub fn start(player_one: Option<&str>, player_two: Option<&str>) -> Self {
        UiEvent::Start {
            player_one: player_one.map(str::to_string),
            player_two: player_two.map(str::to_string),
        }
    }
}
