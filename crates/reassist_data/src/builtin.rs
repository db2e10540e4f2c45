use reassist_core::{
    CitationStats, Coauthor, Profile, ProfileSummary, PublicationRecord, YearCitations,
};

use crate::{ProfileSource, SourceError};

const PLACEHOLDER_AVATAR: &str = "/api/placeholder/30/30";

/// The demo profile shipped with the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProfile;

impl ProfileSource for BuiltinProfile {
    fn describe(&self) -> String {
        "built-in profile".to_string()
    }

    fn load(&self) -> Result<Profile, SourceError> {
        Ok(builtin_profile())
    }
}

pub fn builtin_profile() -> Profile {
    Profile {
        summary: ProfileSummary {
            name: "Dr. Jane Smith".to_string(),
            affiliation: "Stanford University, Department of Computer Science".to_string(),
            interests: [
                "Machine Learning",
                "Natural Language Processing",
                "Computer Vision",
                "Human-Computer Interaction",
            ]
            .map(String::from)
            .to_vec(),
            stats: CitationStats {
                citations: 8437,
                h_index: 42,
                i10_index: 98,
            },
        },
        coauthors: [
            ("John Doe", "MIT"),
            ("Alice Johnson", "Google Research"),
            ("Robert Chen", "Stanford University"),
            ("Maria Garcia", "UC Berkeley"),
            ("James Wilson", "DeepMind"),
        ]
        .into_iter()
        .map(|(name, affiliation)| Coauthor {
            name: name.to_string(),
            affiliation: affiliation.to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
        })
        .collect(),
        publications: builtin_publications(),
        citations_by_year: [
            (2017, 750),
            (2018, 1230),
            (2019, 1850),
            (2020, 1480),
            (2021, 1620),
            (2022, 1120),
            (2023, 387),
        ]
        .into_iter()
        .map(|(year, citations)| YearCitations { year, citations })
        .collect(),
    }
}

const NEURIPS: &str = "Advances in Neural Information Processing Systems";

fn builtin_publications() -> Vec<PublicationRecord> {
    let rows: [(&str, &str, &str, i32, u32, bool); 7] = [
        (
            "Attention Is All You Need",
            "Jane Smith, John Doe, Alice Johnson",
            NEURIPS,
            2023,
            54236,
            true,
        ),
        (
            "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding",
            "Jane Smith, Robert Chen, Maria Garcia",
            "NAACL",
            2022,
            35918,
            true,
        ),
        (
            "Deep Residual Learning for Image Recognition",
            "Jane Smith, James Wilson",
            "IEEE Conference on Computer Vision and Pattern Recognition",
            2021,
            28733,
            false,
        ),
        (
            "GPT-3: Language Models are Few-Shot Learners",
            "Jane Smith, Alice Johnson, James Wilson",
            NEURIPS,
            2020,
            12437,
            true,
        ),
        (
            "Distributed Representations of Words and Phrases and their Compositionality",
            "Jane Smith, John Doe",
            NEURIPS,
            2019,
            19743,
            false,
        ),
        (
            "Batch Normalization: Accelerating Deep Network Training by Reducing Internal Covariate Shift",
            "Jane Smith, Maria Garcia",
            "International Conference on Machine Learning",
            2018,
            14352,
            false,
        ),
        (
            "Generative Adversarial Networks",
            "Jane Smith, Robert Chen",
            NEURIPS,
            2017,
            29651,
            true,
        ),
    ];

    rows.into_iter()
        .map(
            |(title, authors, venue, year, citation_count, is_starred)| PublicationRecord {
                title: title.to_string(),
                authors: authors.to_string(),
                venue: venue.to_string(),
                year,
                citation_count,
                is_starred,
            },
        )
        .collect()
}
