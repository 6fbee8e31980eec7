pub use crate::config::*;

/// A builder for the answers of one respondent.
///
/// Answers must be given in catalog order, and each answer must be one of the
/// answers accepted by its question.
///
/// ```
/// pub use satisfaction_stats::builder::Builder;
/// pub use satisfaction_stats::{Catalog, Question};
/// # use satisfaction_stats::StatsErrors;
///
/// let catalog = Catalog::new(vec![
///     Question::new("How is the coffee?", &["Good", "Bad"]),
/// ])?;
///
/// let mut builder = Builder::new(&catalog);
/// builder.add_answer("How is the coffee?", "Good")?;
/// let record = builder.build()?;
///
/// assert_eq!(record.to_row(), vec!["Good".to_string()]);
/// # Ok::<(), StatsErrors>(())
/// ```
pub struct Builder<'a> {
    pub(crate) _catalog: &'a Catalog,
    pub(crate) _answers: Vec<(String, String)>,
}

impl<'a> Builder<'a> {
    pub fn new(catalog: &'a Catalog) -> Builder<'a> {
        Builder {
            _catalog: catalog,
            _answers: Vec::new(),
        }
    }

    /// The question that expects an answer next, if any.
    pub fn next_question(&self) -> Option<&'a Question> {
        self._catalog.questions().get(self._answers.len())
    }

    /// Records the answer to the next question.
    pub fn add_answer(&mut self, question: &str, answer: &str) -> Result<(), StatsErrors> {
        let expected = self.next_question().ok_or(StatsErrors::NoMoreQuestions)?;
        if expected.text != question {
            return Err(StatsErrors::UnknownQuestion {
                question: question.to_string(),
            });
        }
        if !expected.accepts(answer) {
            return Err(StatsErrors::UnknownAnswer {
                question: question.to_string(),
                answer: answer.to_string(),
            });
        }
        self._answers
            .push((expected.text.clone(), answer.to_string()));
        Ok(())
    }

    /// Records the answer to the next question by its position in the list of
    /// answers. The positions start at 1, as displayed to the user.
    pub fn add_choice(&mut self, choice: usize) -> Result<(), StatsErrors> {
        let question = self.next_question().ok_or(StatsErrors::NoMoreQuestions)?;
        let answer = choice
            .checked_sub(1)
            .and_then(|idx| question.answers.get(idx))
            .ok_or_else(|| StatsErrors::UnknownAnswer {
                question: question.text.clone(),
                answer: choice.to_string(),
            })?;
        self.add_answer(&question.text, answer)
    }

    pub fn build(self) -> Result<ResponseRecord, StatsErrors> {
        if let Some(q) = self.next_question() {
            return Err(StatsErrors::IncompleteRecord {
                missing: q.text.clone(),
            });
        }
        Ok(ResponseRecord {
            answers: self._answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Question::new("Q1", &["Good", "Bad"]),
            Question::new("Q2", &["Yes", "No"]),
        ])
        .unwrap()
    }

    #[test]
    fn answers_follow_catalog_order() {
        let c = catalog();
        let mut b = Builder::new(&c);
        b.add_choice(2).unwrap();
        b.add_answer("Q2", "Yes").unwrap();
        let record = b.build().unwrap();
        assert_eq!(
            record.answers,
            vec![
                ("Q1".to_string(), "Bad".to_string()),
                ("Q2".to_string(), "Yes".to_string())
            ]
        );
    }

    #[test]
    fn out_of_order_question() {
        let c = catalog();
        let mut b = Builder::new(&c);
        assert_eq!(
            b.add_answer("Q2", "Yes"),
            Err(StatsErrors::UnknownQuestion {
                question: "Q2".to_string()
            })
        );
    }

    #[test]
    fn foreign_answer() {
        let c = catalog();
        let mut b = Builder::new(&c);
        assert!(matches!(
            b.add_answer("Q1", "Yes"),
            Err(StatsErrors::UnknownAnswer { .. })
        ));
        assert!(matches!(
            b.add_choice(0),
            Err(StatsErrors::UnknownAnswer { .. })
        ));
        assert!(matches!(
            b.add_choice(3),
            Err(StatsErrors::UnknownAnswer { .. })
        ));
    }

    #[test]
    fn no_question_left() {
        let c = catalog();
        let mut b = Builder::new(&c);
        b.add_choice(1).unwrap();
        b.add_choice(1).unwrap();
        assert_eq!(b.next_question(), None);
        assert_eq!(b.add_choice(1), Err(StatsErrors::NoMoreQuestions));
        assert_eq!(b.add_answer("Q2", "No"), Err(StatsErrors::NoMoreQuestions));
        assert_eq!(b.build().unwrap().to_row(), vec!["Good", "Yes"]);
    }

    #[test]
    fn incomplete_record() {
        let c = catalog();
        let mut b = Builder::new(&c);
        b.add_choice(1).unwrap();
        assert_eq!(
            b.build(),
            Err(StatsErrors::IncompleteRecord {
                missing: "Q2".to_string()
            })
        );
    }
}
