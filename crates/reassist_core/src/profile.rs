/// One scholarly article shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    pub title: String,
    /// Free-text author line, e.g. "Jane Smith, John Doe".
    pub authors: String,
    pub venue: String,
    pub year: i32,
    pub citation_count: u32,
    pub is_starred: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CitationStats {
    pub citations: u32,
    pub h_index: u32,
    pub i10_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coauthor {
    pub name: String,
    pub affiliation: String,
    /// Image reference used by the renderer; opaque to the core.
    pub avatar: String,
}

/// Citations received in one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCitations {
    pub year: i32,
    pub citations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileSummary {
    pub name: String,
    pub affiliation: String,
    pub interests: Vec<String>,
    pub stats: CitationStats,
}

impl ProfileSummary {
    /// Avatar initials: first letter of each capitalized word, honorifics skipped.
    ///
    /// "Dr. Jane Smith" yields "JS".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|word| !word.ends_with('.'))
            .filter_map(|word| word.chars().next())
            .filter(|first| first.is_uppercase())
            .collect()
    }
}

/// Everything the profile page displays. Loaded once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub summary: ProfileSummary,
    pub coauthors: Vec<Coauthor>,
    pub publications: Vec<PublicationRecord>,
    pub citations_by_year: Vec<YearCitations>,
}
