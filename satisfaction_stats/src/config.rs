// ********* Input data structures ***********

use std::collections::HashSet;
use std::error::Error;
use std::fmt::Display;

/// The highest weight an answer can carry. The maximum score of a question
/// is this value multiplied by the number of responses.
pub const MAX_WEIGHT: u32 = 5;

/// A question of the survey, with the answers it accepts, in display order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Question {
    pub text: String,
    pub answers: Vec<String>,
}

impl Question {
    pub fn new(text: &str, answers: &[&str]) -> Question {
        Question {
            text: text.to_string(),
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn accepts(&self, answer: &str) -> bool {
        self.answers.iter().any(|a| a == answer)
    }
}

/// The ordered list of questions asked during a survey session.
///
/// The order of the questions is also the order of the columns in the worksheet.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Result<Catalog, StatsErrors> {
        if questions.is_empty() {
            return Err(StatsErrors::EmptyCatalog);
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for q in questions.iter() {
            if q.answers.is_empty() {
                return Err(StatsErrors::EmptyAnswers {
                    question: q.text.clone(),
                });
            }
            if !seen.insert(q.text.as_str()) {
                return Err(StatsErrors::DuplicateQuestion {
                    question: q.text.clone(),
                });
            }
        }
        Ok(Catalog { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// The header row of the worksheet.
    pub fn header(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.text.clone()).collect()
    }
}

/// Maps an answer label to its satisfaction weight.
///
/// Labels are unique. Labels that are not in the table weigh 0.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ScoreTable {
    weights: Vec<(String, u32)>,
}

impl ScoreTable {
    pub fn new(weights: &[(String, u32)]) -> Result<ScoreTable, StatsErrors> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (label, weight) in weights.iter() {
            if !seen.insert(label.as_str()) {
                return Err(StatsErrors::DuplicateLabel {
                    label: label.clone(),
                });
            }
            if *weight == 0 || *weight > MAX_WEIGHT {
                return Err(StatsErrors::WeightOutOfRange {
                    label: label.clone(),
                    weight: *weight,
                });
            }
        }
        Ok(ScoreTable {
            weights: weights.to_vec(),
        })
    }

    pub fn weight(&self, label: &str) -> u32 {
        self.weights
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, w)| *w)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.weights
    }
}

/// The answers of one respondent, keyed by question text, in catalog order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResponseRecord {
    pub answers: Vec<(String, String)>,
}

impl ResponseRecord {
    /// The worksheet row for this record: one cell per question, in catalog order.
    pub fn to_row(&self) -> Vec<String> {
        self.answers.iter().map(|(_, a)| a.clone()).collect()
    }
}

// ******** Output data structures *********

#[derive(PartialEq, Debug, Clone)]
pub struct AnswerFrequency {
    pub answer: String,
    pub count: u64,
    /// Share of all the responses, in percent, with one decimal.
    pub percentage: f64,
}

/// The distribution of the answers for one question.
#[derive(PartialEq, Debug, Clone)]
pub struct QuestionSummary {
    pub question: String,
    /// In the order in which the answers were first seen in the dataset.
    pub answers: Vec<AnswerFrequency>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct SummaryReport {
    pub num_responses: u64,
    pub questions: Vec<QuestionSummary>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct RankedQuestion {
    pub question: String,
    /// Position of the question in the header.
    pub column: usize,
    pub score: u64,
    pub max_score: u64,
    pub percentage: f64,
}

#[derive(PartialEq, Debug, Clone)]
pub struct RankingReport {
    pub num_responses: u64,
    /// Sorted by decreasing score.
    pub ranking: Vec<RankedQuestion>,
}

impl RankingReport {
    /// The question with the highest satisfaction.
    pub fn top_satisfaction(&self) -> Option<&RankedQuestion> {
        self.ranking.first()
    }

    /// The question with the lowest satisfaction.
    pub fn top_concern(&self) -> Option<&RankedQuestion> {
        self.ranking.last()
    }
}

/// Errors that prevent a catalog from being built or a report from being computed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum StatsErrors {
    EmptyCatalog,
    EmptyAnswers { question: String },
    DuplicateQuestion { question: String },
    DuplicateLabel { label: String },
    WeightOutOfRange { label: String, weight: u32 },
    /// The dataset has no response rows.
    EmptyDataset,
    /// A row does not have one cell per header column. `row` starts at 1 for the first response.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownQuestion { question: String },
    UnknownAnswer { question: String, answer: String },
    IncompleteRecord { missing: String },
    /// Every question of the catalog already has an answer.
    NoMoreQuestions,
}

impl Error for StatsErrors {}

impl Display for StatsErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsErrors::EmptyCatalog => write!(f, "the survey has no questions"),
            StatsErrors::EmptyAnswers { question } => {
                write!(f, "question {:?} has no answers", question)
            }
            StatsErrors::DuplicateQuestion { question } => {
                write!(f, "question {:?} appears more than once", question)
            }
            StatsErrors::DuplicateLabel { label } => {
                write!(f, "answer label {:?} has more than one weight", label)
            }
            StatsErrors::WeightOutOfRange { label, weight } => write!(
                f,
                "answer label {:?} has weight {} (expected 1 to {})",
                label, weight, MAX_WEIGHT
            ),
            StatsErrors::EmptyDataset => write!(f, "no responses"),
            StatsErrors::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "response {} has {} cells, expected {}",
                row, found, expected
            ),
            StatsErrors::UnknownQuestion { question } => {
                write!(f, "unexpected question {:?}", question)
            }
            StatsErrors::UnknownAnswer { question, answer } => {
                write!(f, "{:?} is not an answer of {:?}", answer, question)
            }
            StatsErrors::IncompleteRecord { missing } => {
                write!(f, "no answer for question {:?}", missing)
            }
            StatsErrors::NoMoreQuestions => write!(f, "all the questions are already answered"),
        }
    }
}
