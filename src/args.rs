use clap::Parser;

/// MoodTracker: an employee satisfaction survey in the terminal.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the survey: questions, answer weights and worksheet.
    /// Without it, the built-in employee satisfaction survey is used.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) The worksheet that stores the responses. Setting this option overrides the path
    /// that may be specified with the --config option. Defaults to survey_result.csv.
    #[clap(short, long, value_parser)]
    pub worksheet: Option<String>,

    /// (csv or xlsx) The type of the worksheet. Inferred from the file extension if not specified.
    /// Excel worksheets can only be analysed.
    #[clap(long, value_parser)]
    pub worksheet_type: Option<String>,

    /// (default survey_result) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (summary or ranking) If specified, computes the report over the worksheet and writes it in JSON
    /// format instead of starting the interactive menus.
    #[clap(long, value_parser)]
    pub report: Option<String>,

    /// (file path, 'stdout' or empty) Where the report of the --report option is written.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing a report in JSON format. If provided, moodtracker will
    /// check that the computed report matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
