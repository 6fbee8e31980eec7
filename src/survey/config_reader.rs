use crate::survey::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SURVEY_NAME: &str = "satisfaction-survey";
pub const DEFAULT_TITLE: &str = "WELCOME TO MOODTRACKER";
pub const DEFAULT_WORKSHEET: &str = "survey_result.csv";
pub const DEFAULT_EXCEL_WORKSHEET_NAME: &str = "survey_result";

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "surveyName")]
    pub survey_name: Option<String>,
    #[serde(rename = "title")]
    pub title: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetSource {
    pub provider: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct QuestionConfig {
    pub text: String,
    pub answers: Vec<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AnswerScore {
    pub label: String,
    pub weight: u32,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: Option<OutputSettings>,
    #[serde(rename = "worksheetSource")]
    pub worksheet_source: Option<WorksheetSource>,
    pub questions: Option<Vec<QuestionConfig>>,
    #[serde(rename = "answerScores")]
    pub answer_scores: Option<Vec<AnswerScore>>,
}

/// Everything the program needs to run, once the configuration file and the
/// command line have been reconciled.
#[derive(Debug, Clone)]
pub struct Settings {
    pub survey_name: String,
    pub title: String,
    pub catalog: Catalog,
    pub scores: ScoreTable,
    pub source: ResolvedSource,
}

/// The location of the worksheet, with a known provider.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResolvedSource {
    pub provider: Provider,
    pub path: String,
    pub excel_worksheet_name: Option<String>,
}

impl Settings {
    /// The employee satisfaction survey, stored in `survey_result.csv`.
    pub fn builtin() -> SurveyResult<Settings> {
        Ok(Settings {
            survey_name: DEFAULT_SURVEY_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            catalog: default_catalog()?,
            scores: default_scores()?,
            source: ResolvedSource {
                provider: Provider::infer(DEFAULT_WORKSHEET),
                path: DEFAULT_WORKSHEET.to_string(),
                excel_worksheet_name: None,
            },
        })
    }
}

pub fn default_catalog() -> SurveyResult<Catalog> {
    let satisfaction = [
        "Very Satisfied",
        "Satisfied",
        "Neutral",
        "Dissatisfied",
        "Very Dissatisfied",
    ];
    let rating = ["Excellent", "Good", "Average", "Poor", "Very Poor"];
    let agreement = [
        "Strongly Agree",
        "Agree",
        "Neutral",
        "Disagree",
        "Strongly Disagree",
    ];
    let effectiveness = [
        "Very Effective",
        "Effective",
        "Neutral",
        "Ineffective",
        "Very Ineffective",
    ];
    Catalog::new(vec![
        Question::new(
            "How satisfied are you with your current job role?",
            &satisfaction,
        ),
        Question::new(
            "How would you rate the work environment at our company?",
            &rating,
        ),
        Question::new(
            "Do you feel you have opportunities for professional growth and development?",
            &agreement,
        ),
        Question::new("How would you rate your work-life balance?", &rating),
        Question::new(
            "How effective is communication within the company?",
            &effectiveness,
        ),
        Question::new(
            "Overall, how satisfied are you with working at our company?",
            &satisfaction,
        ),
    ])
    .context(StatsSnafu {})
}

/// One weight per label. "Neutral" is shared by several questions and weighs 3 for all of them.
pub fn default_scores() -> SurveyResult<ScoreTable> {
    let entries: Vec<(String, u32)> = [
        ("Very Satisfied", 5),
        ("Excellent", 5),
        ("Strongly Agree", 5),
        ("Very Effective", 5),
        ("Satisfied", 4),
        ("Good", 4),
        ("Agree", 4),
        ("Effective", 4),
        ("Neutral", 3),
        ("Average", 3),
        ("Dissatisfied", 2),
        ("Poor", 2),
        ("Disagree", 2),
        ("Ineffective", 2),
        ("Very Dissatisfied", 1),
        ("Very Poor", 1),
        ("Strongly Disagree", 1),
        ("Very Ineffective", 1),
    ]
    .iter()
    .map(|(label, weight)| (label.to_string(), *weight))
    .collect();
    ScoreTable::new(&entries).context(StatsSnafu {})
}

pub fn read_config(path: &str) -> SurveyResult<SurveyConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: SurveyConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_config: {:?}", config);
    Ok(config)
}

/// Reads a JSON report, for comparison with a computed one.
pub fn read_summary(path: &str) -> SurveyResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

/// Combines the configuration file (if any) and the command line.
/// The command line takes precedence.
pub fn load_settings(args: &Args) -> SurveyResult<Settings> {
    let builtin = Settings::builtin()?;
    let (config, root_dir): (Option<SurveyConfig>, Option<PathBuf>) = match &args.config {
        Some(p) => {
            let config = read_config(p)?;
            let root = Path::new(p).parent().map(|d| d.to_path_buf());
            (Some(config), root)
        }
        None => (None, None),
    };
    settings_from_config(builtin, config, root_dir.as_deref(), args)
}

fn settings_from_config(
    builtin: Settings,
    config: Option<SurveyConfig>,
    root_dir: Option<&Path>,
    args: &Args,
) -> SurveyResult<Settings> {
    let config = config.unwrap_or(SurveyConfig {
        output_settings: None,
        worksheet_source: None,
        questions: None,
        answer_scores: None,
    });

    let output_settings = config.output_settings.unwrap_or(OutputSettings {
        survey_name: None,
        title: None,
    });

    let catalog = match config.questions {
        Some(questions) => Catalog::new(
            questions
                .into_iter()
                .map(|q| Question {
                    text: q.text,
                    answers: q.answers,
                })
                .collect(),
        )
        .context(StatsSnafu {})?,
        None => builtin.catalog,
    };

    let scores = match config.answer_scores {
        Some(scores) => {
            let entries: Vec<(String, u32)> =
                scores.into_iter().map(|s| (s.label, s.weight)).collect();
            ScoreTable::new(&entries).context(StatsSnafu {})?
        }
        None => builtin.scores,
    };

    let source = resolve_source(config.worksheet_source, root_dir, args)?;

    Ok(Settings {
        survey_name: output_settings.survey_name.unwrap_or(builtin.survey_name),
        title: output_settings.title.unwrap_or(builtin.title),
        catalog,
        scores,
        source,
    })
}

fn resolve_source(
    ws: Option<WorksheetSource>,
    root_dir: Option<&Path>,
    args: &Args,
) -> SurveyResult<ResolvedSource> {
    let path: String = match (&args.worksheet, &ws) {
        (Some(p), _) => p.clone(),
        // Paths in the configuration are relative to the configuration file.
        (None, Some(cfs)) => match root_dir {
            Some(root) if Path::new(&cfs.file_path).is_relative() => {
                let p: PathBuf = [root, Path::new(&cfs.file_path)].iter().collect();
                p.as_path().display().to_string()
            }
            _ => cfs.file_path.clone(),
        },
        (None, None) => DEFAULT_WORKSHEET.to_string(),
    };

    let provider_name: Option<String> = args
        .worksheet_type
        .clone()
        .or_else(|| ws.as_ref().and_then(|cfs| cfs.provider.clone()));
    let provider = match provider_name {
        Some(name) => Provider::parse(&name)?,
        None => Provider::infer(&path),
    };

    let excel_worksheet_name = args
        .excel_worksheet_name
        .clone()
        .or_else(|| ws.and_then(|cfs| cfs.excel_worksheet_name));

    Ok(ResolvedSource {
        provider,
        path,
        excel_worksheet_name,
    })
}
