/// Ordering applied to the articles list.
///
/// Values arrive from the "Sort by" select as option values. Anything the
/// select does not offer is kept verbatim as `Unrecognized` and leaves the
/// list in its input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Citations,
    Year,
    Title,
    Unrecognized(String),
}

impl SortKey {
    pub fn known() -> [SortKey; 3] {
        [SortKey::Citations, SortKey::Year, SortKey::Title]
    }

    pub fn from_option_value(value: &str) -> Self {
        match value.trim() {
            "citations" => SortKey::Citations,
            "year" => SortKey::Year,
            "title" => SortKey::Title,
            other => SortKey::Unrecognized(other.to_string()),
        }
    }

    pub fn option_value(&self) -> &str {
        match self {
            SortKey::Citations => "citations",
            SortKey::Year => "year",
            SortKey::Title => "title",
            SortKey::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SortKey::Citations => "Citations",
            SortKey::Year => "Year (newest)",
            SortKey::Title => "Title",
            SortKey::Unrecognized(raw) => raw,
        }
    }
}

/// Year range applied after sorting. `Custom` has no bounds yet and keeps
/// every record, as does any unrecognized value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Since2020,
    Since2018,
    Custom,
    Unrecognized(String),
}

impl YearFilter {
    pub fn known() -> [YearFilter; 4] {
        [
            YearFilter::All,
            YearFilter::Since2020,
            YearFilter::Since2018,
            YearFilter::Custom,
        ]
    }

    pub fn from_option_value(value: &str) -> Self {
        match value.trim() {
            "all" => YearFilter::All,
            "since2020" => YearFilter::Since2020,
            "since2018" => YearFilter::Since2018,
            "custom" => YearFilter::Custom,
            other => YearFilter::Unrecognized(other.to_string()),
        }
    }

    pub fn option_value(&self) -> &str {
        match self {
            YearFilter::All => "all",
            YearFilter::Since2020 => "since2020",
            YearFilter::Since2018 => "since2018",
            YearFilter::Custom => "custom",
            YearFilter::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            YearFilter::All => "All",
            YearFilter::Since2020 => "Since 2020",
            YearFilter::Since2018 => "Since 2018",
            YearFilter::Custom => "Custom range",
            YearFilter::Unrecognized(raw) => raw,
        }
    }

    /// Earliest year kept, if the filter has a lower bound.
    pub fn min_year(&self) -> Option<i32> {
        match self {
            YearFilter::Since2020 => Some(2020),
            YearFilter::Since2018 => Some(2018),
            YearFilter::All | YearFilter::Custom | YearFilter::Unrecognized(_) => None,
        }
    }

    pub fn retains(&self, year: i32) -> bool {
        self.min_year().is_none_or(|min| year >= min)
    }
}

/// Transient sort/filter choice for the articles tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewSelection {
    pub sort_key: SortKey,
    pub year_filter: YearFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Articles,
    Coauthors,
}

impl ProfileTab {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "articles" => Some(ProfileTab::Articles),
            "coauthors" | "co-authors" => Some(ProfileTab::Coauthors),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Articles => "Articles",
            ProfileTab::Coauthors => "Co-authors",
        }
    }
}
