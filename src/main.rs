//! News Topics - Financial Headline Analysis
//!
//! Command-line entry point: load a headline CSV, normalize its mixed date
//! encodings, run NMF topic modeling and write the enriched rows back out.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use news_topics::data::{headline_features, load_news, save_enriched, DateNormalizer};
use news_topics::models::NmfConfig;
use news_topics::pipeline::TopicPipeline;
use news_topics::preprocessing::VectorizerConfig;
use news_topics::EnrichedRecord;
use std::fs::File;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "news-topics")]
#[command(about = "Date normalization and topic modeling for financial news headlines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis pipeline over a headline CSV
    Analyze {
        /// Path to the news CSV (headline, date, publisher[, stock])
        #[arg(short, long)]
        data: PathBuf,

        /// Number of latent topics
        #[arg(short, long, default_value = "10")]
        topics: usize,

        /// Factorization iteration bound
        #[arg(long, default_value = "200")]
        max_iter: usize,

        /// Random seed for reproducible factorization
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Maximum vocabulary size
        #[arg(long, default_value = "20000")]
        max_features: usize,

        /// Minimum document frequency for vocabulary terms
        #[arg(long, default_value = "5")]
        min_df: usize,

        /// Number of corpus keywords to report
        #[arg(short, long, default_value = "50")]
        keywords: usize,

        /// Where to write the enriched rows (CSV)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Where to write the topic summary (JSON)
        #[arg(long)]
        summary: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    FmtSubscriber::builder().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            data,
            topics,
            max_iter,
            seed,
            max_features,
            min_df,
            keywords,
            output,
            summary,
        } => {
            let records = load_news(&data).with_context(|| format!("loading {:?}", data))?;
            info!("loaded {} records", records.len());

            // Date normalization; per-row failures become missing markers
            let normalizer = DateNormalizer::new();
            let dates: Vec<String> = records.iter().map(|r| r.date.clone()).collect();
            let (timestamps, report) = normalizer.normalize_with_report(&dates);
            info!(
                total = report.total,
                parsed = report.parsed,
                missing = report.missing,
                "date normalization complete"
            );

            let features = headline_features(&records);

            // Topic modeling over the raw headline column
            let headlines: Vec<String> = records.iter().map(|r| r.headline.clone()).collect();
            let pipeline = TopicPipeline::new()
                .vectorizer(
                    VectorizerConfig::new()
                        .max_features(max_features)
                        .min_df(min_df),
                )
                .nmf(NmfConfig::new(topics).max_iter(max_iter).random_seed(seed))
                .n_keywords(keywords);

            let assignment = pipeline.run(&headlines).context("topic modeling failed")?;

            let topic_terms = assignment.topic_terms(10)?;
            println!("\nDiscovered Topics");
            println!("=================");
            for (idx, terms) in topic_terms.iter().enumerate() {
                let words: Vec<&str> = terms.iter().map(|(w, _)| w.as_str()).collect();
                println!("Topic {:>2}: {}", idx, words.join(", "));
            }

            println!("\nTop Keywords");
            println!("============");
            println!("{}", assignment.top_keywords.join(", "));

            if let Some(path) = output {
                let enriched: Vec<EnrichedRecord> = records
                    .iter()
                    .zip(&timestamps)
                    .zip(&features)
                    .zip(&assignment.dominant_topics)
                    .map(|(((record, &date), feature), &topic)| EnrichedRecord {
                        date,
                        headline: record.headline.clone(),
                        publisher: record.publisher.clone(),
                        stock: record.stock.clone(),
                        headline_len_chars: feature.len_chars,
                        headline_len_words: feature.len_words,
                        dominant_topic: topic,
                    })
                    .collect();

                save_enriched(&enriched, &path)
                    .with_context(|| format!("writing {:?}", path))?;
                info!("wrote enriched rows to {:?}", path);
            }

            if let Some(path) = summary {
                let summary_json = serde_json::json!({
                    "documents": headlines.len(),
                    "vocabulary_size": assignment.term_matrix.n_terms(),
                    "topics": topic_terms
                        .iter()
                        .enumerate()
                        .map(|(idx, terms)| {
                            serde_json::json!({
                                "index": idx,
                                "terms": terms.iter().map(|(w, _)| w).collect::<Vec<_>>(),
                            })
                        })
                        .collect::<Vec<_>>(),
                    "top_keywords": assignment.top_keywords,
                    "dates": {
                        "total": report.total,
                        "parsed": report.parsed,
                        "missing": report.missing,
                    },
                });

                let file =
                    File::create(&path).with_context(|| format!("creating {:?}", path))?;
                serde_json::to_writer_pretty(file, &summary_json)?;
                info!("wrote topic summary to {:?}", path);
            }
        }
    }

    Ok(())
}
