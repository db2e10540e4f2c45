use crate::pipeline::display_list;
use crate::view_model::{AppViewModel, ChartBarView, CtaView, NavItemView, ProfileView};
use crate::{
    CtaButton, Page, Profile, ProfileTab, PublicationRecord, SortKey, StarError, StarNotice,
    ViewSelection, YearFilter, CTA_BLURB, CTA_HEADING, NAV_TABS, PROFILE_PATH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    profile: Profile,
    selection: ViewSelection,
    active_tab: ProfileTab,
    current_path: String,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_profile(Profile::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the state around an already loaded profile, starting on the
    /// profile page with default selections.
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            profile,
            selection: ViewSelection::default(),
            active_tab: ProfileTab::default(),
            current_path: PROFILE_PATH.to_string(),
            dirty: false,
        }
    }

    pub fn with_location(mut self, path: impl Into<String>) -> Self {
        self.current_path = path.into();
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    pub fn active_tab(&self) -> ProfileTab {
        self.active_tab
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn page(&self) -> Page {
        Page::for_path(&self.current_path)
    }

    /// Publications as currently shown: sorted, then filtered.
    pub fn display_list(&self) -> Vec<PublicationRecord> {
        display_list(&self.profile.publications, &self.selection)
    }

    /// Describes the star flip for record `index` of the profile's
    /// publications, in declared order.
    ///
    /// Star state is not stored anywhere, so the record keeps its flag.
    pub fn toggle_star(&self, index: usize) -> Result<StarNotice, StarError> {
        let records = &self.profile.publications;
        let record = records.get(index).ok_or(StarError::IndexOutOfRange {
            index,
            len: records.len(),
        })?;
        Ok(StarNotice {
            title: record.title.clone(),
            currently_starred: record.is_starred,
        })
    }

    pub fn view(&self) -> AppViewModel {
        let page = self.page();
        let nav = NAV_TABS
            .into_iter()
            .map(|tab| NavItemView {
                tab,
                label: tab.name(),
                path: tab.path(),
                active: tab.is_active(&self.current_path),
            })
            .collect();
        let profile = (page == Page::Profile).then(|| self.profile_view());
        let cta = (page == Page::Landing).then(|| CtaView {
            heading: CTA_HEADING,
            blurb: CTA_BLURB,
            buttons: CtaButton::ALL.to_vec(),
        });

        AppViewModel {
            page,
            current_path: self.current_path.clone(),
            nav,
            profile,
            cta,
            dirty: self.dirty,
        }
    }

    fn profile_view(&self) -> ProfileView {
        let summary = &self.profile.summary;
        let (display_list, coauthors) = match self.active_tab {
            ProfileTab::Articles => (self.display_list(), Vec::new()),
            ProfileTab::Coauthors => (Vec::new(), self.profile.coauthors.clone()),
        };
        ProfileView {
            name: summary.name.clone(),
            affiliation: summary.affiliation.clone(),
            initials: summary.initials(),
            interests: summary.interests.clone(),
            stats: summary.stats,
            chart: self
                .profile
                .citations_by_year
                .iter()
                .map(ChartBarView::from_year)
                .collect(),
            active_tab: self.active_tab,
            sort_key: self.selection.sort_key.clone(),
            year_filter: self.selection.year_filter.clone(),
            display_list,
            coauthors,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_sort_key(&mut self, key: SortKey) {
        if self.selection.sort_key != key {
            self.selection.sort_key = key;
            self.dirty = true;
        }
    }

    pub(crate) fn set_year_filter(&mut self, filter: YearFilter) {
        if self.selection.year_filter != filter {
            self.selection.year_filter = filter;
            self.dirty = true;
        }
    }

    pub(crate) fn set_tab(&mut self, tab: ProfileTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.dirty = true;
        }
    }

    pub(crate) fn set_location(&mut self, path: String) {
        if self.current_path != path {
            self.current_path = path;
            self.dirty = true;
        }
    }
}
