//! Re-Assist core: pure state machine, publication pipeline and view-model helpers.
mod cta;
mod effect;
mod msg;
mod nav;
mod pipeline;
mod profile;
mod selection;
mod star;
mod state;
mod update;
mod view_model;

pub use cta::{CtaButton, CTA_BLURB, CTA_HEADING};
pub use effect::Effect;
pub use msg::Msg;
pub use nav::{NavTab, Page, BACK_PATH, LANDING_PATH, NAV_TABS, PROFILE_PATH};
pub use pipeline::{compare_titles, display_list, filter_publications, sort_publications};
pub use profile::{
    CitationStats, Coauthor, Profile, ProfileSummary, PublicationRecord, YearCitations,
};
pub use selection::{ProfileTab, SortKey, ViewSelection, YearFilter};
pub use star::{StarError, StarNotice};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, ChartBarView, CtaView, NavItemView, ProfileView, CHART_SCALE,
};
