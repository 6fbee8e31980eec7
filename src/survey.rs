use log::{debug, info, warn};

use satisfaction_stats::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::io::{BufRead, IsTerminal, Write};

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::survey::config_reader::*;
use crate::survey::input::{LinePrompter, Prompter, TermPrompter};
use crate::survey::io_common::*;

pub mod collector;
pub mod config_reader;
pub mod input;
mod io_common;
mod io_csv;
mod io_excel;
#[cfg(test)]
mod io_memory;
pub mod menu;
pub mod navigation;
pub mod report;

#[derive(Debug, Snafu)]
pub enum SurveyError {
    #[snafu(display("Error opening worksheet {path}"))]
    OpeningCsv { source: csv::Error, path: String },
    #[snafu(display("Error reading worksheet {path}"))]
    ReadingCsv { source: csv::Error, path: String },
    #[snafu(display("Error writing to worksheet {path}"))]
    WritingCsv { source: csv::Error, path: String },
    #[snafu(display("Error accessing worksheet {path}"))]
    WorksheetIo {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Worksheet {path} has {expected} columns, cannot append a row of {found} cells"))]
    RowArity {
        path: String,
        expected: usize,
        found: usize,
    },
    #[snafu(display("Worksheet {path} is read-only, responses cannot be added to it"))]
    ReadOnlyWorksheet { path: String },
    #[snafu(display("Unknown worksheet type {provider:?} (expected csv or xlsx)"))]
    UnknownProvider { provider: String },

    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Cannot find worksheet {name:?} in {path}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display("{path} contains {count} worksheets, the worksheet name must be provided"))]
    AmbiguousWorksheet { path: String, count: usize },
    #[snafu(display("Cannot read the cell content in line {lineno}: {content}"))]
    ExcelWrongCellType { lineno: u64, content: String },

    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing the report to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Error with the terminal"))]
    Terminal { source: std::io::Error },
    #[snafu(display("Error with the terminal prompt"))]
    Prompt { source: dialoguer::Error },
    #[snafu(display("The input was closed before a selection was made"))]
    InputClosed {},
    #[snafu(display("No options to choose from"))]
    EmptyMenu {},

    #[snafu(display("{source}"))]
    Stats { source: StatsErrors },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SurveyResult<T> = Result<T, SurveyError>;

/// The reports that can be computed in batch mode.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ReportKind {
    Summary,
    Ranking,
}

impl ReportKind {
    pub fn parse(s: &str) -> SurveyResult<ReportKind> {
        match s {
            "summary" => Ok(ReportKind::Summary),
            "ranking" => Ok(ReportKind::Ranking),
            x => whatever!("Unknown report {:?} (expected summary or ranking)", x),
        }
    }
}

fn summary_to_json(report: &SummaryReport) -> Vec<JSValue> {
    let mut l: Vec<JSValue> = Vec::new();
    for qs in report.questions.iter() {
        let answers: Vec<JSValue> = qs
            .answers
            .iter()
            .map(|af| {
                json!({
                    "answer": af.answer,
                    "count": af.count,
                    "percentage": af.percentage
                })
            })
            .collect();
        l.push(json!({"question": qs.question, "answers": answers}));
    }
    l
}

fn scores_to_json(scores: &ScoreTable) -> Vec<JSValue> {
    scores
        .entries()
        .iter()
        .map(|(label, weight)| json!({"label": label, "weight": weight}))
        .collect()
}

fn ranking_to_json(report: &RankingReport) -> Vec<JSValue> {
    report
        .ranking
        .iter()
        .map(|rq| {
            json!({
                "question": rq.question,
                "score": rq.score,
                "maxScore": rq.max_score,
                "percentage": rq.percentage
            })
        })
        .collect()
}

/// Builds the JSON document of a report over the content of a worksheet.
///
/// A worksheet without responses gives an empty report rather than an error.
pub fn build_report_js(
    settings: &Settings,
    kind: ReportKind,
    data: &[Vec<String>],
) -> SurveyResult<JSValue> {
    let (header, rows) = split_header(data);
    let (num_responses, results) = match kind {
        ReportKind::Summary => match summary_statistics(header, rows) {
            Ok(r) => (r.num_responses, summary_to_json(&r)),
            Err(StatsErrors::EmptyDataset) => (0, vec![]),
            Err(source) => return Err(SurveyError::Stats { source }),
        },
        ReportKind::Ranking => match weighted_ranking(header, rows, &settings.scores) {
            Ok(r) => (r.num_responses, ranking_to_json(&r)),
            Err(StatsErrors::EmptyDataset) => (0, vec![]),
            Err(source) => return Err(SurveyError::Stats { source }),
        },
    };
    let key = match kind {
        ReportKind::Summary => "results",
        ReportKind::Ranking => "ranking",
    };
    let mut js = json!({
        "survey": settings.survey_name,
        "responses": num_responses,
    });
    js[key] = JSValue::Array(results);
    if kind == ReportKind::Ranking {
        js["answerScores"] = JSValue::Array(scores_to_json(&settings.scores));
    }
    Ok(js)
}

/// Computes a report without user interaction and writes it as JSON.
///
/// If a reference report is provided, the computed report must match it.
pub fn run_report(
    settings: &Settings,
    kind: ReportKind,
    out: Option<String>,
    reference: Option<String>,
) -> SurveyResult<()> {
    let mut worksheet = open_worksheet(&settings.source, &settings.catalog)?;
    let data = worksheet.read_all_rows()?;
    info!("run_report: {:?} rows read (including header)", data.len());

    let result_js = build_report_js(settings, kind, &data)?;
    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(ParsingJsonSnafu {})?;

    match out.as_deref() {
        None | Some("stdout") | Some("") => {
            println!("{}", pretty_js_stats);
        }
        Some(path) => {
            fs::write(path, &pretty_js_stats).context(WritingOutputSnafu { path })?;
            info!("run_report: report written to {:?}", path);
        }
    }

    // The reference report, if provided for comparison
    if let Some(ref_path) = reference {
        let ref_js = read_summary(&ref_path)?;
        debug!("run_report: reference: {:?}", ref_js);
        let pretty_js_ref = serde_json::to_string_pretty(&ref_js).context(ParsingJsonSnafu {})?;
        if pretty_js_ref != pretty_js_stats {
            warn!("Found differences with the reference report");
            print_diff(pretty_js_ref.as_str(), pretty_js_stats.as_ref(), "\n");
            whatever!("Difference detected between calculated report and reference report")
        }
    }

    Ok(())
}

/// Runs the interactive menus until the user exits.
pub fn run_interactive<P: Prompter, W: Write>(
    settings: &Settings,
    prompter: P,
    output: W,
) -> SurveyResult<()> {
    let mut worksheet = open_worksheet(&settings.source, &settings.catalog)?;
    let menus = menu::Menus::standard();
    let mut session =
        navigation::Session::new(settings, &menus, worksheet.as_mut(), prompter, output);
    navigation::run(&mut session)
}

pub fn run(args: &Args) -> SurveyResult<()> {
    let settings = load_settings(args)?;
    info!(
        "survey {:?}: {} questions, worksheet {:?}",
        settings.survey_name,
        settings.catalog.len(),
        settings.source
    );

    if let Some(report) = args.report.as_deref() {
        let kind = ReportKind::parse(report)?;
        return run_report(&settings, kind, args.out.clone(), args.reference.clone());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if stdin.is_terminal() {
        run_interactive(&settings, TermPrompter, stdout.lock())
    } else {
        info!("run: reading the selections from a non-interactive input");
        run_interactive(&settings, LinePrompter::new(stdin.lock()), stdout.lock())
    }
}
