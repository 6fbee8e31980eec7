use std::fmt::Display;

use crate::survey::*;

/// Why a line typed by the user is not a valid selection.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum InvalidChoice {
    NotANumber(String),
    OutOfRange(i64),
}

impl Display for InvalidChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidChoice::NotANumber(s) => write!(f, "{:?} is not a number", s),
            InvalidChoice::OutOfRange(_) => write!(f, "Invalid selection"),
        }
    }
}

/// Parses a selection between 1 and `num_options` (inclusive).
pub fn parse_choice(line: &str, num_options: usize) -> Result<usize, InvalidChoice> {
    let trimmed = line.trim();
    let choice: i64 = trimmed
        .parse()
        .map_err(|_| InvalidChoice::NotANumber(trimmed.to_string()))?;
    if choice >= 1 && (choice as u64) <= num_options as u64 {
        Ok(choice as usize)
    } else {
        Err(InvalidChoice::OutOfRange(choice))
    }
}

/// Asks for a selection between 1 and `num_options` until a valid one is typed.
///
/// There is no limit on the number of attempts. Fails only if the input is closed
/// or the terminal cannot be used.
pub fn get_user_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    num_options: usize,
) -> SurveyResult<usize> {
    ensure!(num_options > 0, EmptyMenuSnafu {});
    loop {
        write!(
            output,
            "\nPlease enter your selection (1-{}): ",
            num_options
        )
        .context(TerminalSnafu {})?;
        output.flush().context(TerminalSnafu {})?;

        let mut line = String::new();
        let num_read = input.read_line(&mut line).context(TerminalSnafu {})?;
        if num_read == 0 {
            return InputClosedSnafu {}.fail();
        }

        match parse_choice(&line, num_options) {
            Ok(choice) => return Ok(choice),
            Err(e) => {
                debug!("get_user_choice: rejected {:?}: {:?}", line, e);
                writeln!(output, "{}, please try again: ", e).context(TerminalSnafu {})?;
            }
        }
    }
}

/// Asks the user for a selection between 1 and `num_options`.
pub trait Prompter {
    fn choose<W: Write>(&mut self, output: &mut W, num_options: usize) -> SurveyResult<usize>;
}

/// Reads the selections line by line, as typed or piped.
pub struct LinePrompter<R> {
    input: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> LinePrompter<R> {
        LinePrompter { input }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn choose<W: Write>(&mut self, output: &mut W, num_options: usize) -> SurveyResult<usize> {
        get_user_choice(&mut self.input, output, num_options)
    }
}

/// Prompts on an interactive terminal.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn choose<W: Write>(&mut self, output: &mut W, num_options: usize) -> SurveyResult<usize> {
        ensure!(num_options > 0, EmptyMenuSnafu {});
        // The menu goes to the output, the prompt to the terminal.
        output.flush().context(TerminalSnafu {})?;
        let line = dialoguer::Input::<String>::new()
            .with_prompt(format!("Please enter your selection (1-{})", num_options))
            .validate_with(move |value: &String| -> Result<(), String> {
                parse_choice(value, num_options)
                    .map(|_| ())
                    .map_err(|e| format!("{}, please try again", e))
            })
            .interact_text()
            .context(PromptSnafu {})?;
        match parse_choice(&line, num_options) {
            Ok(choice) => Ok(choice),
            Err(e) => whatever!("{}", e),
        }
    }
}
