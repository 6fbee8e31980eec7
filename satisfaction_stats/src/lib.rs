mod config;
use log::{debug, info};

use std::collections::HashMap;

pub mod builder;
pub mod manual;

pub use crate::config::*;

/// Splits the content of a worksheet into the header row and the response rows.
///
/// An empty worksheet has an empty header and no responses.
pub fn split_header(data: &[Vec<String>]) -> (&[String], &[Vec<String>]) {
    match data.split_first() {
        Some((header, rows)) => (header.as_slice(), rows),
        None => (&[], &[]),
    }
}

/// Computes, for each question, how often each answer was given.
///
/// Arguments:
/// * `header` the question texts, one per column
/// * `rows` the responses, one cell per column
///
/// The answers of a question are listed in the order in which they first appear
/// in the responses. Returns `StatsErrors::EmptyDataset` if there are no responses.
pub fn summary_statistics(
    header: &[String],
    rows: &[Vec<String>],
) -> Result<SummaryReport, StatsErrors> {
    let num_responses = checks(header, rows)?;
    info!(
        "summary_statistics: processing {:?} responses over {:?} questions",
        num_responses,
        header.len()
    );

    let mut questions: Vec<QuestionSummary> = Vec::new();
    for (col, question) in header.iter().enumerate() {
        let tally = compute_tally(rows.iter().map(|row| row[col].as_str()));
        debug!("summary_statistics: {:?}: {:?}", question, tally);
        let answers = tally
            .into_iter()
            .map(|(answer, count)| AnswerFrequency {
                answer,
                count,
                percentage: percentage(count, num_responses),
            })
            .collect();
        questions.push(QuestionSummary {
            question: question.clone(),
            answers,
        });
    }

    Ok(SummaryReport {
        num_responses,
        questions,
    })
}

/// Ranks the questions by the total weight of their answers.
///
/// The score of a question is the sum of the weights of all its answers. Answers that
/// are not in the score table weigh 0. Questions with the same score keep their
/// column order. Returns `StatsErrors::EmptyDataset` if there are no responses.
pub fn weighted_ranking(
    header: &[String],
    rows: &[Vec<String>],
    scores: &ScoreTable,
) -> Result<RankingReport, StatsErrors> {
    let num_responses = checks(header, rows)?;
    info!(
        "weighted_ranking: processing {:?} responses over {:?} questions",
        num_responses,
        header.len()
    );
    let max_score = num_responses * MAX_WEIGHT as u64;

    let mut ranking: Vec<RankedQuestion> = header
        .iter()
        .enumerate()
        .map(|(col, question)| {
            let score: u64 = rows
                .iter()
                .map(|row| scores.weight(&row[col]) as u64)
                .sum();
            debug!(
                "weighted_ranking: {:?}: {:?} / {:?}",
                question, score, max_score
            );
            RankedQuestion {
                question: question.clone(),
                column: col,
                score,
                max_score,
                percentage: percentage(score, max_score),
            }
        })
        .collect();

    // sort_by is stable: equal scores stay in column order.
    ranking.sort_by(|a, b| b.score.cmp(&a.score));

    Ok(RankingReport {
        num_responses,
        ranking,
    })
}

/// Rounds to one decimal place, half away from zero.
pub fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn percentage(part: u64, total: u64) -> f64 {
    round_one_decimal(part as f64 * 100.0 / total as f64)
}

// Counts the occurrences of each value, in order of first appearance.
fn compute_tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut tally: Vec<(String, u64)> = Vec::new();
    for v in values {
        match positions.get(v) {
            Some(idx) => tally[*idx].1 += 1,
            None => {
                positions.insert(v, tally.len());
                tally.push((v.to_string(), 1));
            }
        }
    }
    tally
}

// Returns the number of responses once the dataset is known to be usable.
fn checks(header: &[String], rows: &[Vec<String>]) -> Result<u64, StatsErrors> {
    if rows.is_empty() {
        return Err(StatsErrors::EmptyDataset);
    }
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != header.len() {
            return Err(StatsErrors::RaggedRow {
                row: idx + 1,
                expected: header.len(),
                found: row.len(),
            });
        }
    }
    Ok(rows.len() as u64)
}
