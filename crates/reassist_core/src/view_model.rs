use crate::{
    CitationStats, Coauthor, CtaButton, NavTab, Page, ProfileTab, PublicationRecord, SortKey,
    YearCitations, YearFilter,
};

/// Citation count that fills a chart bar to 100%.
pub const CHART_SCALE: u32 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub page: Page,
    pub current_path: String,
    pub nav: Vec<NavItemView>,
    /// Present on the profile page only.
    pub profile: Option<ProfileView>,
    /// Present on the landing page only.
    pub cta: Option<CtaView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub tab: NavTab,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub affiliation: String,
    pub initials: String,
    pub interests: Vec<String>,
    pub stats: CitationStats,
    pub chart: Vec<ChartBarView>,
    pub active_tab: ProfileTab,
    pub sort_key: SortKey,
    pub year_filter: YearFilter,
    /// Empty unless the Articles tab is active.
    pub display_list: Vec<PublicationRecord>,
    /// Empty unless the Co-authors tab is active.
    pub coauthors: Vec<Coauthor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBarView {
    pub year: i32,
    pub citations: u32,
    /// Bar height relative to [`CHART_SCALE`], capped at 100.
    pub height_percent: f64,
}

impl ChartBarView {
    pub(crate) fn from_year(entry: &YearCitations) -> Self {
        let percent = f64::from(entry.citations) / f64::from(CHART_SCALE) * 100.0;
        Self {
            year: entry.year,
            citations: entry.citations,
            height_percent: percent.min(100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaView {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub buttons: Vec<CtaButton>,
}
