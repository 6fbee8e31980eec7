use satisfaction_stats::builder::Builder;

use crate::survey::{input::Prompter, *};

/// Asks every question of the catalog, in order, and returns the answers.
pub fn collect_responses<P: Prompter, W: Write>(
    catalog: &Catalog,
    prompter: &mut P,
    output: &mut W,
) -> SurveyResult<ResponseRecord> {
    let mut builder = Builder::new(catalog);
    while let Some(question) = builder.next_question() {
        writeln!(output, "\n {}", question.text).context(TerminalSnafu {})?;
        for (idx, answer) in question.answers.iter().enumerate() {
            writeln!(output, "{} - {}", idx + 1, answer).context(TerminalSnafu {})?;
        }
        let choice = prompter.choose(output, question.answers.len())?;
        builder.add_choice(choice).context(StatsSnafu {})?;
    }
    let record = builder.build().context(StatsSnafu {})?;
    debug!("collect_responses: {:?}", record);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::input::LinePrompter;
    use std::io::Cursor;

    #[test]
    fn one_answer_per_question_in_order() {
        let catalog = default_catalog().unwrap();
        let mut input = LinePrompter::new(Cursor::new("1\n2\nx\n3\n4\n9\n5\n1\n"));
        let mut output: Vec<u8> = Vec::new();
        let record = collect_responses(&catalog, &mut input, &mut output).unwrap();

        assert_eq!(record.answers.len(), catalog.len());
        for ((q, a), question) in record.answers.iter().zip(catalog.questions()) {
            assert_eq!(q, &question.text);
            assert!(question.accepts(a));
        }
        assert_eq!(
            record.to_row(),
            vec![
                "Very Satisfied",
                "Good",
                "Neutral",
                "Poor",
                "Very Ineffective",
                "Very Satisfied"
            ]
        );
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\n How would you rate your work-life balance?\n1 - Excellent\n"));
    }

    #[test]
    fn input_closed_mid_survey() {
        let catalog = default_catalog().unwrap();
        let mut input = LinePrompter::new(Cursor::new("1\n2\n"));
        let mut output: Vec<u8> = Vec::new();
        let res = collect_responses(&catalog, &mut input, &mut output);
        assert!(matches!(res, Err(SurveyError::InputClosed {})));
    }
}
