use crate::survey::{input::Prompter, *};

/// The screens of the program. Every menu option leads to one of them.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Screen {
    Main,
    Survey,
    AnalysisMenu,
    Summary,
    Ranking,
    NextAction,
    Exit,
}

/// One selectable line of a menu.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MenuOption {
    pub index: usize,
    pub label: String,
    /// Printed once the option is selected.
    pub message: Option<String>,
    pub screen: Screen,
}

impl MenuOption {
    pub fn new(index: usize, label: &str, message: Option<&str>, screen: Screen) -> MenuOption {
        MenuOption {
            index,
            label: label.to_string(),
            message: message.map(|s| s.to_string()),
            screen,
        }
    }

    pub fn display_menu(&self) -> String {
        format!("{} - {}", self.index, self.label)
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Menu {
    pub options: Vec<MenuOption>,
}

impl Menu {
    pub fn display<W: Write>(&self, output: &mut W) -> SurveyResult<()> {
        for option in self.options.iter() {
            writeln!(output, "{}", option.display_menu()).context(TerminalSnafu {})?;
        }
        Ok(())
    }

    /// Asks the user for one of the options and prints its message.
    pub fn select<P: Prompter, W: Write>(
        &self,
        prompter: &mut P,
        output: &mut W,
    ) -> SurveyResult<&MenuOption> {
        let choice = prompter.choose(output, self.options.len())?;
        // The indexes displayed are the positions, starting at 1.
        let option = &self.options[choice - 1];
        debug!("select: {:?}", option);
        if let Some(msg) = &option.message {
            writeln!(output, "{}", msg).context(TerminalSnafu {})?;
        }
        Ok(option)
    }
}

/// All the menus of the program.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Menus {
    pub main: Menu,
    pub analysis: Menu,
    pub next_action: Menu,
}

impl Menus {
    pub fn standard() -> Menus {
        Menus {
            main: Menu {
                options: vec![
                    MenuOption::new(
                        1,
                        "Access to Survey",
                        Some("Accessing Moodtracker Survey...\n"),
                        Screen::Survey,
                    ),
                    MenuOption::new(
                        2,
                        "Access to Analysis Program",
                        Some("Accessing Analysis Program...\n"),
                        Screen::AnalysisMenu,
                    ),
                    MenuOption::new(3, "Exit Program", Some("Exiting Program..."), Screen::Exit),
                ],
            },
            analysis: Menu {
                options: vec![
                    MenuOption::new(
                        1,
                        "Summary Statistic",
                        Some("Accessing Summary Statistic...\n"),
                        Screen::Summary,
                    ),
                    MenuOption::new(
                        2,
                        "Top Satisfaction & Top Concerns",
                        Some("Accessing Top Satisfaction & Top Concerns...\n"),
                        Screen::Ranking,
                    ),
                    MenuOption::new(
                        3,
                        "Back to Main Menu",
                        Some("Back to Main Menu..."),
                        Screen::Main,
                    ),
                    MenuOption::new(4, "Exit Program", Some("Exiting Program..."), Screen::Exit),
                ],
            },
            next_action: Menu {
                options: vec![
                    MenuOption::new(
                        1,
                        "Back to Main Menu",
                        Some("Back to Main Menu..."),
                        Screen::Main,
                    ),
                    MenuOption::new(
                        2,
                        "Access to Analysis Program",
                        Some("Accessing Analysis Program...\n"),
                        Screen::AnalysisMenu,
                    ),
                    MenuOption::new(3, "Exit Program", Some("Exiting Program..."), Screen::Exit),
                ],
            },
        }
    }
}
