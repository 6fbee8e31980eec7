use crate::survey::{
    collector::collect_responses,
    input::Prompter,
    menu::{Menu, Menus, Screen},
    report::{write_ranking, write_summary, NO_RESPONSES},
    *,
};

/// Everything the screens work with during a run of the program.
pub struct Session<'a, P, W> {
    pub settings: &'a Settings,
    pub menus: &'a Menus,
    pub worksheet: &'a mut dyn Worksheet,
    pub prompter: P,
    pub output: W,
}

impl<'a, P: Prompter, W: Write> Session<'a, P, W> {
    pub fn new(
        settings: &'a Settings,
        menus: &'a Menus,
        worksheet: &'a mut dyn Worksheet,
        prompter: P,
        output: W,
    ) -> Session<'a, P, W> {
        Session {
            settings,
            menus,
            worksheet,
            prompter,
            output,
        }
    }

    fn banner(&mut self, top: char, bottom: char, title: &str) -> SurveyResult<()> {
        let top_line: String = std::iter::repeat(top).take(50).collect();
        let bottom_line: String = std::iter::repeat(bottom).take(50).collect();
        writeln!(self.output, "{}\n{:^50}\n{}\n", top_line, title, bottom_line)
            .context(TerminalSnafu {})
    }

    fn choose(&mut self, menu: &Menu) -> SurveyResult<Screen> {
        menu.display(&mut self.output)?;
        let option = menu.select(&mut self.prompter, &mut self.output)?;
        Ok(option.screen)
    }
}

type Handler<P, W> = for<'s, 'a> fn(&'s mut Session<'a, P, W>) -> SurveyResult<Screen>;

/// The handler of each screen. Exit has none: it ends the run.
fn handler<P: Prompter, W: Write>(screen: Screen) -> Option<Handler<P, W>> {
    let h: Handler<P, W> = match screen {
        Screen::Main => main_menu,
        Screen::Survey => access_survey,
        Screen::AnalysisMenu => analysis_program,
        Screen::Summary => summary_statistic,
        Screen::Ranking => top_analysis,
        Screen::NextAction => next_action,
        Screen::Exit => return None,
    };
    Some(h)
}

/// Moves from screen to screen, starting with the main menu, until the user exits.
pub fn run<P: Prompter, W: Write>(session: &mut Session<P, W>) -> SurveyResult<()> {
    let mut screen = Screen::Main;
    while let Some(h) = handler::<P, W>(screen) {
        let next = h(session)?;
        debug!("run: {:?} -> {:?}", screen, next);
        screen = next;
    }
    info!("run: exiting");
    Ok(())
}

fn main_menu<R: Prompter, W: Write>(session: &mut Session<R, W>) -> SurveyResult<Screen> {
    let title = session.settings.title.clone();
    session.banner('=', '=', &title)?;
    let menus = session.menus;
    session.choose(&menus.main)
}

fn access_survey<R: Prompter, W: Write>(session: &mut Session<R, W>) -> SurveyResult<Screen> {
    session.banner('.', '.', "Welcome to Employees Satisfaction Survey")?;
    // Nothing could be recorded: do not ask the questions.
    if session.worksheet.is_read_only() {
        warn!("access_survey: read-only worksheet {:?}", session.settings.source.path);
        writeln!(
            session.output,
            "The worksheet {} is read-only, responses cannot be recorded.\n",
            session.settings.source.path
        )
        .context(TerminalSnafu {})?;
        return Ok(Screen::NextAction);
    }
    let catalog = &session.settings.catalog;
    let record = collect_responses(catalog, &mut session.prompter, &mut session.output)?;

    let out = &mut session.output;
    writeln!(out, "\nThank you for your time!\nHere your answers: \n").context(TerminalSnafu {})?;
    for (question, answer) in record.answers.iter() {
        writeln!(out, "- {}: {}", question, answer).context(TerminalSnafu {})?;
    }

    writeln!(out, "\nUpdating worksheet...").context(TerminalSnafu {})?;
    session.worksheet.append_row(&record.to_row())?;
    writeln!(session.output, "Worksheet updated successfully.\n").context(TerminalSnafu {})?;
    Ok(Screen::NextAction)
}

fn analysis_program<R: Prompter, W: Write>(session: &mut Session<R, W>) -> SurveyResult<Screen> {
    session.banner('>', '<', "Welcome to Analysis Program.")?;
    let menus = session.menus;
    session.choose(&menus.analysis)
}

fn summary_statistic<R: Prompter, W: Write>(session: &mut Session<R, W>) -> SurveyResult<Screen> {
    let data = session.worksheet.read_all_rows()?;
    let (header, rows) = split_header(&data);
    match summary_statistics(header, rows) {
        Ok(report) => write_summary(&mut session.output, &report)?,
        Err(StatsErrors::EmptyDataset) => {
            writeln!(session.output, "{}", NO_RESPONSES).context(TerminalSnafu {})?
        }
        Err(source) => return Err(SurveyError::Stats { source }),
    }
    Ok(Screen::NextAction)
}

fn top_analysis<R: Prompter, W: Write>(session: &mut Session<R, W>) -> SurveyResult<Screen> {
    let data = session.worksheet.read_all_rows()?;
    let (header, rows) = split_header(&data);
    match weighted_ranking(header, rows, &session.settings.scores) {
        Ok(report) => write_ranking(&mut session.output, &report)?,
        Err(StatsErrors::EmptyDataset) => {
            writeln!(session.output, "{}", NO_RESPONSES).context(TerminalSnafu {})?
        }
        Err(source) => return Err(SurveyError::Stats { source }),
    }
    Ok(Screen::NextAction)
}

fn next_action<R: Prompter, W: Write>(session: &mut Session<R, W>) -> SurveyResult<Screen> {
    writeln!(session.output, "\nWhat would you like to do next?").context(TerminalSnafu {})?;
    let menus = session.menus;
    session.choose(&menus.next_action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::input::LinePrompter;
    use crate::survey::io_memory::MemoryWorksheet;
    use std::io::Cursor;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn run_script(
        settings: &Settings,
        ws: &mut MemoryWorksheet,
        script: &str,
    ) -> (SurveyResult<()>, String) {
        let menus = Menus::standard();
        let prompter = LinePrompter::new(Cursor::new(script.to_string()));
        let mut session = Session::new(settings, &menus, ws, prompter, Vec::new());
        let res = run(&mut session);
        let text = String::from_utf8(session.output).unwrap();
        (res, text)
    }

    #[test]
    fn every_screen_but_exit_has_a_handler() {
        type H = Option<Handler<LinePrompter<Cursor<String>>, Vec<u8>>>;
        for screen in [
            Screen::Main,
            Screen::Survey,
            Screen::AnalysisMenu,
            Screen::Summary,
            Screen::Ranking,
            Screen::NextAction,
        ] {
            let h: H = handler(screen);
            assert!(h.is_some(), "{:?}", screen);
        }
        let h: H = handler(Screen::Exit);
        assert!(h.is_none());
    }

    #[test]
    fn exit_from_main_menu() {
        let settings = Settings::builtin().unwrap();
        let mut ws = MemoryWorksheet::new(&settings.catalog);
        let (res, text) = run_script(&settings, &mut ws, "3\n");
        assert!(res.is_ok());
        assert!(text.contains("WELCOME TO MOODTRACKER"));
        assert!(text.contains(
            "1 - Access to Survey\n2 - Access to Analysis Program\n3 - Exit Program\n"
        ));
        assert!(text.ends_with("Exiting Program...\n"));
    }

    #[test]
    fn survey_appends_one_row() {
        let settings = Settings::builtin().unwrap();
        let mut ws = MemoryWorksheet::new(&settings.catalog);
        // Survey, six answers (one rejected), then exit from the next action menu.
        let (res, text) = run_script(&settings, &mut ws, "1\n1\n2\n3\n8\n4\n5\n2\n3\n");
        assert!(res.is_ok());
        assert_eq!(ws.rows.len(), 2);
        assert_eq!(
            ws.rows[1],
            strings(&[
                "Very Satisfied",
                "Good",
                "Neutral",
                "Poor",
                "Very Ineffective",
                "Satisfied"
            ])
        );
        assert!(text.contains("- How would you rate your work-life balance?: Poor\n"));
        assert!(text.contains("Worksheet updated successfully."));
        assert!(text.contains("What would you like to do next?"));
    }

    #[test]
    fn survey_skipped_on_read_only_worksheet() {
        let settings = Settings::builtin().unwrap();
        let mut ws = MemoryWorksheet::new(&settings.catalog);
        ws.read_only = true;
        // Survey, then exit right away: no question is asked.
        let (res, text) = run_script(&settings, &mut ws, "1\n3\n");
        assert!(res.is_ok());
        assert_eq!(ws.rows.len(), 1);
        assert!(text.contains("is read-only, responses cannot be recorded."));
        assert!(!text.contains("How satisfied are you with your current job role?"));
        assert!(text.ends_with("Exiting Program...\n"));
    }

    #[test]
    fn summary_then_ranking() {
        let settings = Settings::builtin().unwrap();
        let mut ws = MemoryWorksheet::new(&settings.catalog);
        ws.rows.push(strings(&[
            "Very Satisfied",
            "Good",
            "Agree",
            "Poor",
            "Effective",
            "Satisfied",
        ]));
        ws.rows.push(strings(&[
            "Satisfied",
            "Good",
            "Disagree",
            "Very Poor",
            "Neutral",
            "Satisfied",
        ]));
        // Analysis -> summary -> next: analysis -> ranking -> next: main -> exit.
        let (res, text) = run_script(&settings, &mut ws, "2\n1\n2\n2\n1\n3\n");
        assert!(res.is_ok());
        assert!(text.contains("Welcome to Analysis Program."));
        assert!(text.contains("   ---> Very Satisfied: 1 answer (50.0%)\n"));
        assert!(text.contains("   ---> Good: 2 answers (100.0%)\n"));
        assert!(text.contains(
            "Top satisfaction: How satisfied are you with your current job role? (90.0%)"
        ));
        assert!(text.contains("Top concern: How would you rate your work-life balance? (30.0%)"));
        assert_eq!(ws.rows.len(), 3);
    }

    #[test]
    fn analysis_without_responses() {
        let settings = Settings::builtin().unwrap();
        let mut ws = MemoryWorksheet::new(&settings.catalog);
        let (res, text) = run_script(&settings, &mut ws, "2\n1\n2\n2\n3\n");
        assert!(res.is_ok());
        assert_eq!(text.matches(NO_RESPONSES).count(), 2);
    }

    #[test]
    fn back_to_main_and_exit_from_analysis() {
        let settings = Settings::builtin().unwrap();
        let mut ws = MemoryWorksheet::new(&settings.catalog);
        let (res, text) = run_script(&settings, &mut ws, "2\n3\n2\n4\n");
        assert!(res.is_ok());
        assert_eq!(text.matches("WELCOME TO MOODTRACKER").count(), 2);
        assert!(text.contains("Back to Main Menu..."));
        assert!(text.ends_with("Exiting Program...\n"));
    }

    #[test]
    fn input_closed() {
        let settings = Settings::builtin().unwrap();
        let mut ws = MemoryWorksheet::new(&settings.catalog);
        let (res, _) = run_script(&settings, &mut ws, "2\n");
        assert!(matches!(res, Err(SurveyError::InputClosed {})));
    }
}
