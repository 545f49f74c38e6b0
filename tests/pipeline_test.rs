//! Integration tests for the full identification and screening pipeline.

use litsieve::error::Result;
use litsieve::keyword::KeywordSet;
use litsieve::record::RawRecord;
use litsieve::screen::screen;
use litsieve::search::{JsonlProvider, QueryScope, SearchConfig, SearchRunner};
use litsieve::split::Splitter;

fn corpus() -> Vec<RawRecord> {
    let entries = [
        (
            "10.1000/ar-bci",
            "Augmented Reality headsets for BCI experiments",
            "Article",
        ),
        (
            "10.1000/vr-gaming",
            "Virtual Reality gaming with brain interfaces",
            "Article",
        ),
        (
            "10.1000/vr-gaming",
            "Virtual Reality gaming with brain interfaces",
            "Article",
        ),
        (
            "10.1000/review",
            "Augmented Reality and BCI conference overview",
            "Conference Review",
        ),
        ("", "Virtual Reality gaming survey without identifier", "Article"),
    ];
    entries
        .iter()
        .map(|(doi, title, subtype)| RawRecord {
            doi: if doi.is_empty() {
                None
            } else {
                Some(doi.to_string())
            },
            title: Some(title.to_string()),
            description: Some("BCI and gaming study.".to_string()),
            subtype_description: Some(subtype.to_string()),
            ..RawRecord::default()
        })
        .collect()
}

#[test]
fn test_split_search_screen_pipeline() -> Result<()> {
    let keywords = KeywordSet::parse([
        vec![
            "Augmented Reality",
            "Virtual Reality",
            "Extended Reality || Mixed Reality",
        ],
        vec!["BCI", "Gaming"],
        vec!["Digital Twin", ""],
    ]);
    let splits = Splitter::new(keywords).generate()?;
    assert_eq!(splits.len(), 3 * 2 * 2);

    let runner = SearchRunner::new(JsonlProvider::new(corpus()));
    let outcome = runner.run(&splits)?;

    // Every collected record is tagged with the split that found it.
    assert!(outcome.records.iter().all(|r| r.split.is_some()));
    // No "Digital Twin" split matches the corpus, so only skip-variant
    // splits contribute.
    assert!(
        outcome
            .matched
            .iter()
            .all(|entry| !entry.split.contains("Digital Twin"))
    );

    let (records, report) = screen(outcome.records);
    assert_eq!(report.surviving, records.len());
    assert!(records.iter().all(|r| r.has_doi()));
    assert!(
        records
            .iter()
            .all(|r| r.subtype_description.as_deref() != Some("Conference Review"))
    );

    Ok(())
}

#[test]
fn test_pipeline_is_deterministic() -> Result<()> {
    let keywords = KeywordSet::parse([
        vec!["Augmented Reality", "Virtual Reality"],
        vec!["BCI", "Gaming"],
    ]);

    let first = Splitter::new(keywords.clone()).generate()?;
    let second = Splitter::new(keywords).generate()?;
    assert_eq!(first, second);

    let runner = SearchRunner::new(JsonlProvider::new(corpus()));
    let outcome_a = runner.run(&first)?;
    let outcome_b = runner.run(&second)?;
    assert_eq!(outcome_a.matched, outcome_b.matched);

    Ok(())
}

#[test]
fn test_threshold_and_rejection_routing() -> Result<()> {
    let keywords = KeywordSet::parse([vec!["Virtual Reality", "Augmented Reality", "Gaming"]]);
    let splits = Splitter::new(keywords).generate()?;

    // "Gaming" matches 4 records (over threshold 3); the others stay under.
    let config = SearchConfig {
        threshold: 3,
        download: true,
        scope: QueryScope::TitleAbsKey,
    };
    let runner = SearchRunner::with_config(JsonlProvider::new(corpus()), config);
    let outcome = runner.run(&splits)?;

    assert_eq!(outcome.matched.len(), 2);
    assert_eq!(outcome.excluded.len(), 1);
    assert_eq!(outcome.excluded[0].split, "\"Gaming\"");

    // With a provider-side cap instead, the same split is rejected
    // rather than counted, and the run still completes.
    let capped = JsonlProvider::new(corpus()).with_max_results(3);
    let splits = Splitter::new(KeywordSet::parse([vec![
        "Virtual Reality",
        "Augmented Reality",
        "Gaming",
    ]]))
    .generate()?;
    let outcome = SearchRunner::new(capped).run(&splits)?;
    assert_eq!(outcome.excluded.len(), 1);
    assert_eq!(outcome.excluded[0].count_label(), ">3");

    Ok(())
}
