// Terminal rendering of the reports.

use crate::survey::*;

pub const NO_RESPONSES: &str = "No responses recorded yet.";

pub fn write_summary<W: Write>(output: &mut W, report: &SummaryReport) -> SurveyResult<()> {
    writeln!(output, "Summary Statistic ({} responses):", report.num_responses)
        .context(TerminalSnafu {})?;
    for qs in report.questions.iter() {
        writeln!(output, "\n{}:", qs.question).context(TerminalSnafu {})?;
        for af in qs.answers.iter() {
            let response_label = if af.count == 1 { "answer" } else { "answers" };
            writeln!(
                output,
                "   ---> {}: {} {} ({:.1}%)",
                af.answer, af.count, response_label, af.percentage
            )
            .context(TerminalSnafu {})?;
        }
    }
    Ok(())
}

pub fn write_ranking<W: Write>(output: &mut W, report: &RankingReport) -> SurveyResult<()> {
    writeln!(
        output,
        "Top Satisfaction & Top Concerns ({} responses):\n",
        report.num_responses
    )
    .context(TerminalSnafu {})?;
    for (pos, rq) in report.ranking.iter().enumerate() {
        writeln!(
            output,
            "{}. {}\n   ---> {} / {} ({:.1}%)",
            pos + 1,
            rq.question,
            rq.score,
            rq.max_score,
            rq.percentage
        )
        .context(TerminalSnafu {})?;
    }
    if let (Some(top), Some(concern)) = (report.top_satisfaction(), report.top_concern()) {
        writeln!(
            output,
            "\nTop satisfaction: {} ({:.1}%)",
            top.question, top.percentage
        )
        .context(TerminalSnafu {})?;
        writeln!(
            output,
            "Top concern: {} ({:.1}%)",
            concern.question, concern.percentage
        )
        .context(TerminalSnafu {})?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn summary_text() {
        let header = strings(&["Q1"]);
        let rows = vec![strings(&["Good"]), strings(&["Poor"]), strings(&["Good"])];
        let report = summary_statistics(&header, &rows).unwrap();
        let mut output: Vec<u8> = Vec::new();
        write_summary(&mut output, &report).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\nQ1:\n"));
        assert!(text.contains("   ---> Good: 2 answers (66.7%)\n"));
        assert!(text.contains("   ---> Poor: 1 answer (33.3%)\n"));
    }

    #[test]
    fn ranking_text() {
        let header = strings(&["Q1", "Q2"]);
        let rows = vec![strings(&["Very Satisfied", "Poor"]), strings(&["Poor", "Poor"])];
        let scores = default_scores().unwrap();
        let report = weighted_ranking(&header, &rows, &scores).unwrap();
        let mut output: Vec<u8> = Vec::new();
        write_ranking(&mut output, &report).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1. Q1\n   ---> 7 / 10 (70.0%)\n"));
        assert!(text.contains("2. Q2\n   ---> 4 / 10 (40.0%)\n"));
        assert!(text.contains("Top satisfaction: Q1 (70.0%)\n"));
        assert!(text.contains("Top concern: Q2 (40.0%)\n"));
    }
}
