//! On-disk fixture shape and its mapping onto core types.

use std::path::Path;

use reassist_core::{
    CitationStats, Coauthor, Profile, ProfileSummary, PublicationRecord, YearCitations,
};
use serde::{Deserialize, Serialize};

use crate::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Ron,
    Json,
}

impl FixtureFormat {
    /// `.json` selects JSON; any other extension is read as RON.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FixtureFormat::Json,
            _ => FixtureFormat::Ron,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ProfileFixture {
    name: String,
    affiliation: String,
    #[serde(default)]
    interests: Vec<String>,
    #[serde(default)]
    stats: StatsFixture,
    #[serde(default)]
    coauthors: Vec<CoauthorFixture>,
    publications: Vec<PublicationFixture>,
    #[serde(default)]
    citations_by_year: Vec<YearFixture>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct StatsFixture {
    citations: u32,
    h_index: u32,
    i10_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CoauthorFixture {
    name: String,
    affiliation: String,
    #[serde(default)]
    avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PublicationFixture {
    title: String,
    authors: String,
    venue: String,
    year: i32,
    citations: u32,
    #[serde(default)]
    starred: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct YearFixture {
    year: i32,
    citations: u32,
}

impl From<ProfileFixture> for Profile {
    fn from(fixture: ProfileFixture) -> Self {
        Profile {
            summary: ProfileSummary {
                name: fixture.name,
                affiliation: fixture.affiliation,
                interests: fixture.interests,
                stats: CitationStats {
                    citations: fixture.stats.citations,
                    h_index: fixture.stats.h_index,
                    i10_index: fixture.stats.i10_index,
                },
            },
            coauthors: fixture
                .coauthors
                .into_iter()
                .map(|c| Coauthor {
                    name: c.name,
                    affiliation: c.affiliation,
                    avatar: c.avatar,
                })
                .collect(),
            publications: fixture
                .publications
                .into_iter()
                .map(|p| PublicationRecord {
                    title: p.title,
                    authors: p.authors,
                    venue: p.venue,
                    year: p.year,
                    citation_count: p.citations,
                    is_starred: p.starred,
                })
                .collect(),
            citations_by_year: fixture
                .citations_by_year
                .into_iter()
                .map(|y| YearCitations {
                    year: y.year,
                    citations: y.citations,
                })
                .collect(),
        }
    }
}

impl From<&Profile> for ProfileFixture {
    fn from(profile: &Profile) -> Self {
        let summary = &profile.summary;
        ProfileFixture {
            name: summary.name.clone(),
            affiliation: summary.affiliation.clone(),
            interests: summary.interests.clone(),
            stats: StatsFixture {
                citations: summary.stats.citations,
                h_index: summary.stats.h_index,
                i10_index: summary.stats.i10_index,
            },
            coauthors: profile
                .coauthors
                .iter()
                .map(|c| CoauthorFixture {
                    name: c.name.clone(),
                    affiliation: c.affiliation.clone(),
                    avatar: c.avatar.clone(),
                })
                .collect(),
            publications: profile
                .publications
                .iter()
                .map(|p| PublicationFixture {
                    title: p.title.clone(),
                    authors: p.authors.clone(),
                    venue: p.venue.clone(),
                    year: p.year,
                    citations: p.citation_count,
                    starred: p.is_starred,
                })
                .collect(),
            citations_by_year: profile
                .citations_by_year
                .iter()
                .map(|y| YearFixture {
                    year: y.year,
                    citations: y.citations,
                })
                .collect(),
        }
    }
}

pub(crate) fn to_string(profile: &Profile, format: FixtureFormat) -> Result<String, ExportError> {
    let fixture = ProfileFixture::from(profile);
    let text = match format {
        FixtureFormat::Ron => {
            ron::ser::to_string_pretty(&fixture, ron::ser::PrettyConfig::new())?
        }
        FixtureFormat::Json => serde_json::to_string_pretty(&fixture)?,
    };
    Ok(text)
}
