/*!

This is the long-form manual for `satisfaction_stats` and `moodtracker`.

## The survey

A survey is a list of questions, each with a fixed list of answers. A respondent picks
exactly one answer per question. The answers of one respondent are stored as one row of
a worksheet: the first row of the worksheet holds the question texts, every following row
holds one respondent's answers, in the same order as the questions.

```text
How satisfied are you with your current job role?,How would you rate the work environment at our company?
Very Satisfied,Good
Neutral,Poor
```

## Reports

### Summary statistic

For every question, the number of times each answer was given and the share of all the
responses it represents, in percent with one decimal. The answers are listed in the order
in which they first appear in the worksheet. Because of the rounding, the percentages of a
question may add up to slightly more or less than 100.

### Top satisfaction & top concerns

Every answer carries a weight from 1 (least satisfied) to 5 (most satisfied). The score of
a question is the sum of the weights of its answers, out of a maximum of 5 times the number
of responses. The questions are listed by decreasing score; questions with the same score
keep the order of the worksheet. The first question is the top satisfaction, the last one
the top concern.

Answers that have no weight count as 0.

The default weights are:

| weight | answers                                                              |
|--------|----------------------------------------------------------------------|
| 5      | Very Satisfied, Excellent, Strongly Agree, Very Effective            |
| 4      | Satisfied, Good, Agree, Effective                                    |
| 3      | Neutral, Average                                                     |
| 2      | Dissatisfied, Poor, Disagree, Ineffective                            |
| 1      | Very Dissatisfied, Very Poor, Strongly Disagree, Very Ineffective    |

An answer label has exactly one weight: a configuration that lists the same label twice
is rejected.

## Worksheets

The following worksheet providers are supported:
* `csv` a local CSV file. It is created with the header row if it does not exist.
  New responses are appended at the end.
* `xlsx` an Excel file, for example the spreadsheet downloaded from an online form
  service. Excel worksheets are read-only: they can be analysed but the survey cannot
  add responses to them. Without a worksheet name, the only sheet of the file is used,
  or else the sheet named `survey_result`.

## Configuration

`moodtracker` comes with the employee satisfaction survey built in. A JSON configuration
file can replace the questions, the weights and the location of the worksheet:

```json
{
  "outputSettings": { "surveyName": "satisfaction-survey", "title": "WELCOME TO MOODTRACKER" },
  "worksheetSource": { "provider": "csv", "filePath": "survey_result.csv" },
  "questions": [
    { "text": "How would you rate your work-life balance?",
      "answers": ["Excellent", "Good", "Average", "Poor", "Very Poor"] }
  ],
  "answerScores": [
    { "label": "Excellent", "weight": 5 },
    { "label": "Good", "weight": 4 }
  ]
}
```

All the sections are optional. `filePath` is relative to the directory of the
configuration file. `excelWorksheetName` (string, optional) selects the worksheet of an
Excel file; without it, the file must contain a single worksheet or one named
`survey_result`.

Command line options take precedence over the configuration file.

 */
