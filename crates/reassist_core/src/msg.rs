use crate::{CtaButton, NavTab, ProfileTab, SortKey, YearFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked an entry in the "Sort by" select.
    SortKeySelected(SortKey),
    /// User picked an entry in the "Year range" select.
    YearFilterSelected(YearFilter),
    /// User switched between the Articles and Co-authors tabs.
    TabSelected(ProfileTab),
    /// User clicked the star of the publication at `index` of the record set.
    StarToggled { index: usize },
    /// User clicked Back on the profile page.
    BackClicked,
    /// User clicked a sidebar tab.
    NavTabClicked(NavTab),
    /// The shell finished a navigation.
    LocationChanged(String),
    /// User clicked a button in the call-to-action section.
    CtaClicked(CtaButton),
    /// Input that carries no action, such as a blank line.
    NoOp,
}
