mod common;

use common::{record, sample_publications};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use reassist_core::{
    compare_titles, display_list, filter_publications, sort_publications, PublicationRecord,
    SortKey, ViewSelection, YearFilter,
};
use std::cmp::Ordering;

fn titles(records: &[PublicationRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn citations_order_puts_most_cited_first() {
    let sorted = sort_publications(&sample_publications(), &SortKey::Citations);

    assert_eq!(sorted.first().unwrap().citation_count, 54236);
    assert_eq!(sorted.last().unwrap().citation_count, 12437);
}

#[test]
fn since_2020_keeps_four_sample_records() {
    let selection = ViewSelection {
        sort_key: SortKey::Citations,
        year_filter: YearFilter::Since2020,
    };
    let shown = display_list(&sample_publications(), &selection);

    assert_eq!(shown.len(), 4);
    assert!(shown.iter().all(|r| r.year >= 2020));
    assert_eq!(
        shown.iter().map(|r| r.citation_count).collect::<Vec<_>>(),
        vec![54236, 35918, 28733, 12437]
    );
}

#[test]
fn since_2018_drops_only_2017() {
    let kept = filter_publications(&sample_publications(), &YearFilter::Since2018);
    assert_eq!(kept.len(), 6);
    assert!(kept.iter().all(|r| r.title != "Generative Adversarial Networks"));
}

#[test]
fn title_order_is_alphabetical() {
    let sorted = sort_publications(&sample_publications(), &SortKey::Title);
    assert_eq!(
        titles(&sorted),
        vec![
            "Attention Is All You Need",
            "Batch Normalization: Accelerating Deep Network Training by Reducing Internal Covariate Shift",
            "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding",
            "Deep Residual Learning for Image Recognition",
            "Distributed Representations of Words and Phrases and their Compositionality",
            "Generative Adversarial Networks",
            "GPT-3: Language Models are Few-Shot Learners",
        ]
    );
}

#[test]
fn unrecognized_selection_passes_input_through() {
    let input = sample_publications();
    let selection = ViewSelection {
        sort_key: SortKey::from_option_value("venue"),
        year_filter: YearFilter::from_option_value("last-decade"),
    };

    assert_eq!(display_list(&input, &selection), input);
}

#[test]
fn custom_range_keeps_everything() {
    let input = sample_publications();
    assert_eq!(filter_publications(&input, &YearFilter::Custom), input);
}

#[test]
fn equal_years_keep_input_order() {
    let input = vec![
        record("c", 2020, 1, false),
        record("a", 2021, 1, false),
        record("b", 2020, 1, false),
    ];
    let sorted = sort_publications(&input, &SortKey::Year);
    assert_eq!(titles(&sorted), vec!["a", "c", "b"]);
}

#[test]
fn sorting_leaves_input_untouched() {
    let input = sample_publications();
    let before = input.clone();
    let _ = sort_publications(&input, &SortKey::Title);
    assert_eq!(input, before);
}

fn arb_record() -> impl Strategy<Value = PublicationRecord> {
    ("[a-zA-Z ]{0,12}", 2010..2026i32, 0..60u32, any::<bool>()).prop_map(
        |(title, year, citations, starred)| record(&title, year, citations, starred),
    )
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Citations),
        Just(SortKey::Year),
        Just(SortKey::Title),
    ]
}

fn arb_year_filter() -> impl Strategy<Value = YearFilter> {
    prop_oneof![
        Just(YearFilter::All),
        Just(YearFilter::Since2020),
        Just(YearFilter::Since2018),
        Just(YearFilter::Custom),
    ]
}

/// Tags each record with its input position so stability can be checked.
fn tagged(records: Vec<PublicationRecord>) -> Vec<PublicationRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, mut r)| {
            r.authors = i.to_string();
            r
        })
        .collect()
}

fn position(record: &PublicationRecord) -> usize {
    record.authors.parse().unwrap()
}

proptest! {
    #[test]
    fn prop_citations_non_increasing(records in proptest::collection::vec(arb_record(), 0..20)) {
        let sorted = sort_publications(&records, &SortKey::Citations);
        prop_assert!(sorted.windows(2).all(|w| w[0].citation_count >= w[1].citation_count));
    }

    #[test]
    fn prop_years_non_increasing(records in proptest::collection::vec(arb_record(), 0..20)) {
        let sorted = sort_publications(&records, &SortKey::Year);
        prop_assert!(sorted.windows(2).all(|w| w[0].year >= w[1].year));
    }

    #[test]
    fn prop_titles_non_decreasing(records in proptest::collection::vec(arb_record(), 0..20)) {
        let sorted = sort_publications(&records, &SortKey::Title);
        prop_assert!(sorted
            .windows(2)
            .all(|w| compare_titles(&w[0].title, &w[1].title) != Ordering::Greater));
    }

    #[test]
    fn prop_sort_is_stable(
        records in proptest::collection::vec(arb_record(), 0..20),
        key in arb_sort_key(),
    ) {
        let sorted = sort_publications(&tagged(records), &key);
        for pair in sorted.windows(2) {
            let tie = match key {
                SortKey::Citations => pair[0].citation_count == pair[1].citation_count,
                SortKey::Year => pair[0].year == pair[1].year,
                _ => compare_titles(&pair[0].title, &pair[1].title) == Ordering::Equal,
            };
            if tie {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }

    #[test]
    fn prop_sort_is_a_permutation(
        records in proptest::collection::vec(arb_record(), 0..20),
        key in arb_sort_key(),
    ) {
        let mut sorted: Vec<usize> = sort_publications(&tagged(records.clone()), &key)
            .iter()
            .map(position)
            .collect();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..records.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_filter_preserves_sorted_order(
        records in proptest::collection::vec(arb_record(), 0..20),
        key in arb_sort_key(),
        filter in arb_year_filter(),
    ) {
        let sorted = sort_publications(&tagged(records), &key);
        let shown = filter_publications(&sorted, &filter);
        let order_in_sorted: Vec<usize> = shown
            .iter()
            .map(|r| sorted.iter().position(|s| s.authors == r.authors).unwrap())
            .collect();
        prop_assert!(order_in_sorted.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(shown.iter().all(|r| filter.retains(r.year)));
        prop_assert_eq!(
            shown.len(),
            sorted.iter().filter(|r| filter.retains(r.year)).count()
        );
    }

    #[test]
    fn prop_display_list_is_idempotent(
        records in proptest::collection::vec(arb_record(), 0..20),
        sort_key in arb_sort_key(),
        year_filter in arb_year_filter(),
    ) {
        let selection = ViewSelection { sort_key, year_filter };
        let first = display_list(&records, &selection);
        let second = display_list(&records, &selection);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(display_list(&first, &selection), first);
    }
}
