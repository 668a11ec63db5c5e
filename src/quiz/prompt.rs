use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::session::{QuizSession, Step};
use crate::catalog::Question;
use crate::profile::{validate_profile, ClassLevel, Profile, DISTRICTS};
use crate::scoring::AnswerSet;

/// Prompt user with a message and return their trimmed input.
/// Returns None when the input is closed.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt user with a message and a default value. Returns default if input is empty.
pub(crate) fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: &str,
) -> Result<String> {
    let answer = prompt(input, output, &format!("{} [{}]: ", message, default))?;
    match answer {
        Some(a) if !a.is_empty() => Ok(a),
        _ => Ok(default.to_string()),
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
pub(crate) fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default_yes: bool,
) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let answer = prompt(input, output, &format!("{} [{}]: ", message, hint))?
        .unwrap_or_default()
        .to_lowercase();
    if answer.is_empty() {
        Ok(default_yes)
    } else {
        Ok(answer == "y" || answer == "yes")
    }
}

/// Parse 1-based option numbers such as "1, 3" into 0-based indices.
pub fn parse_selection(input: &str) -> Result<Vec<usize>, String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<usize>() {
            Ok(0) => Err("option numbers start at 1".to_string()),
            Ok(n) => Ok(n - 1),
            Err(_) => Err(format!("'{}' is not an option number", part)),
        })
        .collect()
}

/// Parse a whole answer set: questions separated by ';', options by ','.
/// Example: "1;2,3;;4" answers four questions, leaving the third blank.
/// A single trailing ';' is ignored.
pub fn parse_answer_spec(spec: &str) -> Result<AnswerSet, String> {
    let spec = spec.trim();
    let selections = spec
        .strip_suffix(';')
        .unwrap_or(spec)
        .split(';')
        .enumerate()
        .map(|(i, part)| parse_selection(part).map_err(|e| format!("question {}: {}", i + 1, e)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AnswerSet::new(selections))
}

/// Ask for whichever profile fields are still missing, re-asking until valid.
/// Returns None if the input ends before the profile is complete.
pub fn prompt_profile<R: BufRead, W: Write>(
    name: Option<String>,
    class_level: ClassLevel,
    district: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Profile>> {
    let mut profile = Profile::new(
        name.unwrap_or_default(),
        class_level,
        district.unwrap_or_default(),
    );

    loop {
        let errors = match validate_profile(&profile) {
            Ok(()) => return Ok(Some(profile)),
            Err(errors) => errors,
        };

        for error in &errors {
            if error.starts_with("name:") {
                if !profile.name.is_empty() {
                    writeln!(output, "  {}", error)?;
                }
                let Some(name) = prompt(input, output, "Your name: ")? else {
                    return Ok(None);
                };
                profile.name = name;
            } else if error.starts_with("district:") {
                if !profile.district.is_empty() {
                    writeln!(output, "  {}", error)?;
                }
                let Some(district) = prompt(input, output, "Your district: ")? else {
                    return Ok(None);
                };
                // Accept any capitalization of a known district
                profile.district = DISTRICTS
                    .iter()
                    .find(|d| d.eq_ignore_ascii_case(&district))
                    .map(|d| d.to_string())
                    .unwrap_or(district);
            }
        }
    }
}

fn render_question<W: Write>(output: &mut W, quiz: &QuizSession, question: &Question) -> Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "Question {} of {} ({}% complete)",
        quiz.current_index() + 1,
        quiz.question_count(),
        quiz.progress_percent()
    )?;
    writeln!(output, "{}", question.prompt)?;
    for (i, option) in question.options.iter().enumerate() {
        let marker = if quiz.current_selection().contains(&i) {
            "[x]"
        } else {
            "[ ]"
        };
        writeln!(output, "  {} {}. {}", marker, i + 1, option.text)?;
    }
    Ok(())
}

/// Walk the student through every question.
///
/// Accepts option numbers ("1,3"), "b" to go back, and "q" to quit.
/// Returns None if the student quits or the input ends early.
pub fn run_quiz<R: BufRead, W: Write>(
    questions: &[Question],
    input: &mut R,
    output: &mut W,
) -> Result<Option<AnswerSet>> {
    let mut quiz = QuizSession::new(questions);
    writeln!(output, "Select all options that apply (e.g. 1,3). 'b' goes back, 'q' quits.")?;

    loop {
        let Some(question) = quiz.current_question() else {
            return Ok(Some(AnswerSet::default()));
        };
        render_question(output, &quiz, question)?;

        let label = if quiz.is_last_question() {
            "Your choice (completes the quiz): "
        } else {
            "Your choice: "
        };
        let Some(line) = prompt(input, output, label)? else {
            return Ok(None);
        };

        match line.to_lowercase().as_str() {
            "q" | "quit" => return Ok(None),
            "b" | "back" => {
                if !quiz.previous() {
                    writeln!(output, "  Already at the first question.")?;
                }
                continue;
            }
            _ => {}
        }

        let selection = match parse_selection(&line) {
            Ok(s) => s,
            Err(e) => {
                writeln!(output, "  Invalid: {}. Try again.", e)?;
                continue;
            }
        };
        // Empty input confirms an earlier selection when revisiting a question
        if !selection.is_empty() {
            if let Err(e) = quiz.select(&selection) {
                writeln!(output, "  Invalid: {}. Try again.", e)?;
                continue;
            }
        }

        match quiz.next() {
            Ok(Step::Advanced(_)) => {}
            Ok(Step::Completed(answers)) => return Ok(Some(answers)),
            Err(e) => writeln!(output, "  {}. Select at least one option.", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::io::Cursor;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1,3").unwrap(), vec![0, 2]);
        assert_eq!(parse_selection(" 2 4 ").unwrap(), vec![1, 3]);
        assert!(parse_selection("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_selection_errors() {
        assert_eq!(parse_selection("0").unwrap_err(), "option numbers start at 1");
        assert!(parse_selection("a").unwrap_err().contains("'a' is not an option number"));
    }

    #[test]
    fn test_parse_answer_spec() {
        let answers = parse_answer_spec("1;2,3;;4").unwrap();
        assert_eq!(
            answers.selections(),
            &[vec![0], vec![1, 2], vec![], vec![3]]
        );
    }

    #[test]
    fn test_parse_answer_spec_trailing_separator() {
        let answers = parse_answer_spec("1;1;1;1;1;1;1;1;").unwrap();
        assert_eq!(answers.len(), 8);
        assert!(answers.validate(&Catalog::builtin().questions).is_ok());

        // Only one trailing separator is dropped
        assert_eq!(parse_answer_spec("1;;").unwrap().selections(), &[vec![0], vec![]]);
    }

    #[test]
    fn test_parse_answer_spec_reports_question() {
        let err = parse_answer_spec("1;x").unwrap_err();
        assert!(err.starts_with("question 2:"));
    }

    #[test]
    fn test_run_quiz_completes() {
        let questions = &Catalog::builtin().questions;
        let mut input = Cursor::new("1\n1\n1\n1\n1\n1\n1\n1,2\n");
        let mut output = Vec::new();
        let answers = run_quiz(questions, &mut input, &mut output).unwrap().unwrap();
        assert_eq!(answers.len(), 8);
        assert_eq!(answers.selection(7), &[0, 1]);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Question 1 of 8"));
        assert!(text.contains("completes the quiz"));
    }

    #[test]
    fn test_run_quiz_refuses_blank_answer_and_goes_back() {
        let questions = &Catalog::builtin().questions;
        let mut input = Cursor::new("\n2\nb\n\n3\n3\n3\n3\n3\n3\n3\n");
        let mut output = Vec::new();
        let answers = run_quiz(questions, &mut input, &mut output).unwrap().unwrap();
        // Going back kept question 1's answer and a blank line confirmed it
        assert_eq!(answers.selection(0), &[1]);
        assert_eq!(answers.selection(1), &[2]);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("question 1 has no selection yet"));
    }

    #[test]
    fn test_run_quiz_rejects_out_of_range() {
        let questions = &Catalog::builtin().questions;
        let mut input = Cursor::new("9\nq\n");
        let mut output = Vec::new();
        let answers = run_quiz(questions, &mut input, &mut output).unwrap();
        assert!(answers.is_none());
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("option 9 does not exist"));
    }

    #[test]
    fn test_run_quiz_input_closed() {
        let questions = &Catalog::builtin().questions;
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();
        assert!(run_quiz(questions, &mut input, &mut output).unwrap().is_none());
    }

    #[test]
    fn test_prompt_profile_asks_for_missing_fields() {
        let mut input = Cursor::new("Asha\nGoa\nbaramulla\n");
        let mut output = Vec::new();
        let profile = prompt_profile(None, ClassLevel::Tenth, None, &mut input, &mut output)
            .unwrap()
            .unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.district, "Baramulla");
        assert_eq!(profile.class_level, ClassLevel::Tenth);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("unknown district 'Goa'"));
    }

    #[test]
    fn test_prompt_profile_complete_skips_prompts() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let profile = prompt_profile(
            Some("Ravi".to_string()),
            ClassLevel::Twelfth,
            Some("Kathua".to_string()),
            &mut input,
            &mut output,
        )
        .unwrap()
        .unwrap();
        assert_eq!(profile.name, "Ravi");
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompt_with_default() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        let value = prompt_with_default(&mut input, &mut output, "Sort", "rating").unwrap();
        assert_eq!(value, "rating");
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut input = Cursor::new("yes\n\n");
        let mut output = Vec::new();
        assert!(prompt_yes_no(&mut input, &mut output, "Save?", false).unwrap());
        assert!(!prompt_yes_no(&mut input, &mut output, "Save?", false).unwrap());
    }
}
