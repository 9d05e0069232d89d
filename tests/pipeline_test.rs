//! End-to-end test: CSV in, enriched rows and topics out.

use chrono::{TimeZone, Utc};
use news_topics::data::{load_news, DateNormalizer};
use news_topics::models::NmfConfig;
use news_topics::pipeline::TopicPipeline;
use news_topics::preprocessing::VectorizerConfig;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

fn write_sample_csv(path: &std::path::Path) {
    let mut file = File::create(path).unwrap();
    writeln!(file, "date,headline,publisher,stock").unwrap();

    let rows = [
        ("2020-06-05 10:30:54", "Apple earnings beat estimates as iphone sales surge", "AAPL"),
        ("2020-06-05T10:30:54-04:00", "Apple iphone sales climb on strong earnings", "AAPL"),
        ("2020-06-06 09:00:00", "Apple earnings report shows iphone growth", "AAPL"),
        ("not-a-date", "Oil prices fall as crude supply rises", "XOM"),
        ("2020-06-07 15:45:12", "Crude oil supply glut pushes prices lower", "XOM"),
        ("2020-06-08T08:00:00+02:00", "Oil prices slide on rising crude supply", "XOM"),
    ];
    for (date, headline, stock) in rows {
        writeln!(file, "{},{},Benzinga,{}", date, headline, stock).unwrap();
    }
}

#[test]
fn test_csv_to_topics() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("news.csv");
    write_sample_csv(&path);

    let records = load_news(&path).unwrap();
    assert_eq!(records.len(), 6);

    // Date normalization: aware offsets converted, naive treated as UTC,
    // garbage degrades to the missing marker without failing the batch
    let normalizer = DateNormalizer::new();
    let dates: Vec<String> = records.iter().map(|r| r.date.clone()).collect();
    let (timestamps, report) = normalizer.normalize_with_report(&dates);

    assert_eq!(timestamps.len(), 6);
    assert_eq!(report.missing, 1);
    assert_eq!(
        timestamps[0],
        Some(Utc.with_ymd_and_hms(2020, 6, 5, 10, 30, 54).unwrap())
    );
    assert_eq!(
        timestamps[1],
        Some(Utc.with_ymd_and_hms(2020, 6, 5, 14, 30, 54).unwrap())
    );
    assert_eq!(timestamps[3], None);
    assert_eq!(
        timestamps[5],
        Some(Utc.with_ymd_and_hms(2020, 6, 8, 6, 0, 0).unwrap())
    );

    // Topic modeling over the headline column
    let headlines: Vec<String> = records.iter().map(|r| r.headline.clone()).collect();
    let pipeline = TopicPipeline::new()
        .vectorizer(VectorizerConfig::new().min_df(2).max_df_ratio(1.0))
        .nmf(NmfConfig::new(2))
        .n_keywords(10);

    let assignment = pipeline.run(&headlines).unwrap();

    assert_eq!(assignment.dominant_topics.len(), 6);
    assert_eq!(assignment.model.w.nrows(), 6);
    assert_eq!(
        assignment.model.h.ncols(),
        assignment.term_matrix.n_terms()
    );

    // Apple rows and oil rows form distinct topics
    assert_eq!(assignment.dominant_topics[0], assignment.dominant_topics[1]);
    assert_eq!(assignment.dominant_topics[3], assignment.dominant_topics[4]);
    assert_ne!(assignment.dominant_topics[0], assignment.dominant_topics[3]);
}
