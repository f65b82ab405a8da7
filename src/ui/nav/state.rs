use crate::ui::mvi::UiState;

/// Bottom-bar destinations, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabId {
    #[default]
    Home,
    About,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Home, TabId::About];

    pub fn title(self) -> &'static str {
        match self {
            TabId::Home => "Movies",
            TabId::About => "About",
        }
    }

    /// Parses the config spelling; unknown names map to `None`.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.trim().to_ascii_lowercase().as_str() {
            "home" | "movies" => Some(TabId::Home),
            "about" => Some(TabId::About),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub active: TabId,
}

impl UiState for NavState {}
