/// CSS class of the mobile menu button.
pub const TOGGLE_CLASS: &str = "mobile-menu-toggle";
/// CSS class of the navigation the button opens.
pub const NAV_CLASS: &str = "main-nav";

/// Open/closed state of the mobile navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Click on the menu button.
    ToggleClick,
    /// Click anywhere outside both the button and the nav.
    OutsideClick,
    Escape,
}

impl NavState {
    /// The single transition function all three triggers go through.
    pub fn transition(self, event: NavEvent) -> NavState {
        match event {
            NavEvent::ToggleClick => match self {
                NavState::Closed => NavState::Open,
                NavState::Open => NavState::Closed,
            },
            NavEvent::OutsideClick | NavEvent::Escape => NavState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == NavState::Open
    }

    /// Icon shown on the button: a burger when closed, a cross when open.
    pub fn icon_class(self) -> &'static str {
        match self {
            NavState::Closed => "fa-bars",
            NavState::Open => "fa-times",
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    pub fn nav_class(self) -> String {
        if self.is_open() {
            format!("{NAV_CLASS} is-open")
        } else {
            NAV_CLASS.to_string()
        }
    }

    pub fn toggle_class(self) -> String {
        if self.is_open() {
            format!("{TOGGLE_CLASS} is-active")
        } else {
            TOGGLE_CLASS.to_string()
        }
    }
}
