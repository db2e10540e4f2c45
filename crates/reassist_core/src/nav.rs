/// Landing page; hosts the call-to-action section.
pub const LANDING_PATH: &str = "/";
pub const PROFILE_PATH: &str = "/dashboard/profile";
/// Where the profile page's Back button leads.
pub const BACK_PATH: &str = "/dashboard/chats";

/// Top-level sidebar destinations, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Chats,
    Documents,
    Grants,
    Conferences,
    Help,
}

pub const NAV_TABS: [NavTab; 5] = [
    NavTab::Chats,
    NavTab::Documents,
    NavTab::Grants,
    NavTab::Conferences,
    NavTab::Help,
];

impl NavTab {
    pub fn name(self) -> &'static str {
        match self {
            NavTab::Chats => "Chats",
            NavTab::Documents => "Documents",
            NavTab::Grants => "Grants",
            NavTab::Conferences => "Conferences",
            NavTab::Help => "Help",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            NavTab::Chats => "/dashboard/chats",
            NavTab::Documents => "/dashboard/documents",
            NavTab::Grants => "/dashboard/grants",
            NavTab::Conferences => "/dashboard/conferences",
            NavTab::Help => "/dashboard/help",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NAV_TABS
            .into_iter()
            .find(|tab| tab.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Highlight rule: exact path match, with `/app` standing in for `/`.
    pub fn is_active(self, current_path: &str) -> bool {
        current_path == self.path() || (current_path == "/app" && self.path() == "/")
    }
}

/// Which page a location renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Landing,
    Profile,
    Unrouted(String),
}

impl Page {
    pub fn for_path(path: &str) -> Self {
        match path {
            LANDING_PATH => Page::Landing,
            PROFILE_PATH => Page::Profile,
            other => Page::Unrouted(other.to_string()),
        }
    }
}
