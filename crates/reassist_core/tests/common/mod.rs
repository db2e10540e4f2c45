#![allow(dead_code)]

use reassist_core::{
    CitationStats, Coauthor, Profile, ProfileSummary, PublicationRecord, YearCitations,
};

pub fn init_logging() {
    reassist_logging::initialize_for_tests();
}

pub fn record(title: &str, year: i32, citation_count: u32, is_starred: bool) -> PublicationRecord {
    PublicationRecord {
        title: title.to_string(),
        authors: "Jane Smith".to_string(),
        venue: "Test Venue".to_string(),
        year,
        citation_count,
        is_starred,
    }
}

/// Seven records spanning 2017 to 2023, in the order the page declares them.
pub fn sample_publications() -> Vec<PublicationRecord> {
    vec![
        record("Attention Is All You Need", 2023, 54236, true),
        record(
            "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding",
            2022,
            35918,
            true,
        ),
        record("Deep Residual Learning for Image Recognition", 2021, 28733, false),
        record("GPT-3: Language Models are Few-Shot Learners", 2020, 12437, true),
        record(
            "Distributed Representations of Words and Phrases and their Compositionality",
            2019,
            19743,
            false,
        ),
        record(
            "Batch Normalization: Accelerating Deep Network Training by Reducing Internal Covariate Shift",
            2018,
            14352,
            false,
        ),
        record("Generative Adversarial Networks", 2017, 29651, true),
    ]
}

pub fn sample_profile() -> Profile {
    Profile {
        summary: ProfileSummary {
            name: "Dr. Jane Smith".to_string(),
            affiliation: "Stanford University".to_string(),
            interests: vec!["Machine Learning".to_string()],
            stats: CitationStats {
                citations: 8437,
                h_index: 42,
                i10_index: 98,
            },
        },
        coauthors: vec![Coauthor {
            name: "John Doe".to_string(),
            affiliation: "MIT".to_string(),
            avatar: "/api/placeholder/30/30".to_string(),
        }],
        publications: sample_publications(),
        citations_by_year: vec![
            YearCitations {
                year: 2017,
                citations: 750,
            },
            YearCitations {
                year: 2023,
                citations: 387,
            },
        ],
    }
}
