use std::fs;

use pretty_assertions::assert_eq;
use reassist_core::{display_list, SortKey, ViewSelection, YearFilter};
use reassist_data::{
    builtin_profile, export_fixture, BuiltinProfile, FileProfileSource, FixtureFormat,
    ProfileSource, SourceError,
};
use tempfile::TempDir;

fn init_logging() {
    reassist_logging::initialize_for_tests();
}

#[test]
fn builtin_profile_matches_demo_page() {
    init_logging();
    let profile = BuiltinProfile.load().unwrap();

    assert_eq!(profile.summary.name, "Dr. Jane Smith");
    assert_eq!(profile.summary.initials(), "JS");
    assert_eq!(profile.publications.len(), 7);
    assert_eq!(profile.coauthors.len(), 5);
    assert_eq!(profile.citations_by_year.len(), 7);

    let years: Vec<i32> = profile.publications.iter().map(|p| p.year).collect();
    assert_eq!(years.iter().min(), Some(&2017));
    assert_eq!(years.iter().max(), Some(&2023));
}

#[test]
fn builtin_sample_sorts_and_filters() {
    init_logging();
    let profile = builtin_profile();
    let selection = ViewSelection {
        sort_key: SortKey::Citations,
        year_filter: YearFilter::All,
    };
    let all = display_list(&profile.publications, &selection);
    assert_eq!(all[0].citation_count, 54236);
    assert_eq!(all[6].citation_count, 12437);

    let recent = display_list(
        &profile.publications,
        &ViewSelection {
            year_filter: YearFilter::Since2020,
            ..selection
        },
    );
    assert_eq!(recent.len(), 4);
}

#[test]
fn exported_fixture_loads_back_in_both_formats() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let profile = builtin_profile();

    for name in ["profile.ron", "profile.json"] {
        let path = export_fixture(&profile, &temp.path().join(name)).unwrap();
        let loaded = FileProfileSource::new(&path).load().unwrap();
        assert_eq!(loaded, profile);
    }
}

#[test]
fn hand_written_ron_fixture_is_accepted() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lab.ron");
    fs::write(
        &path,
        r#"(
    name: "Prof. Ada Lovelace",
    affiliation: "Analytical Engine Society",
    publications: [
        (title: "Notes", authors: "Ada Lovelace", venue: "Taylor's Memoirs", year: 1843, citations: 900, starred: true),
    ],
)"#,
    )
    .unwrap();

    let profile = FileProfileSource::new(&path).load().unwrap();
    assert_eq!(profile.summary.initials(), "AL");
    assert_eq!(profile.publications[0].year, 1843);
    assert!(profile.publications[0].is_starred);
}

#[test]
fn missing_file_reports_io_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let err = FileProfileSource::new(temp.path().join("absent.ron"))
        .load()
        .unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
}

#[test]
fn malformed_fixture_reports_parse_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.txt");
    fs::write(&path, "{ \"name\": 1 }").unwrap();

    let ron_err = FileProfileSource::new(&path).load().unwrap_err();
    assert!(matches!(ron_err, SourceError::Ron { .. }));

    let json_err = FileProfileSource::new(&path)
        .with_format(FixtureFormat::Json)
        .load()
        .unwrap_err();
    assert!(matches!(json_err, SourceError::Json { .. }));
    assert!(json_err.to_string().contains("broken.txt"));
}
