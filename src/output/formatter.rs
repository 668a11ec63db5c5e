use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use super::theme::{match_color, rating_color, stream_color};
use crate::catalog::{College, Fee, Question, StreamInfo};
use crate::directory::FilterCriteria;
use crate::profile::Profile;
use crate::scoring::StreamResult;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// First `shown` items joined by ", ", with a "+N more" suffix for the rest
pub fn format_list_more(items: &[String], shown: usize) -> String {
    let head = items
        .iter()
        .take(shown)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > shown {
        format!("{} +{} more", head, items.len() - shown)
    } else {
        head
    }
}

/// Group digits the Indian way: 1,50,000
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (rest, last3) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = rest.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&rest[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), last3)
}

/// Group digits in thousands: 150,000
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Annual fee, e.g. "₹15,000/year"
pub fn format_fee(fee: &Fee) -> String {
    if fee.currency.eq_ignore_ascii_case("INR") {
        format!("₹{}/year", group_indian(fee.annual))
    } else {
        format!("{} {}/year", fee.currency, group_thousands(fee.annual))
    }
}

/// Fixed-width bar for a percentage, e.g. "█████░░░░░"
pub fn format_percentage_bar(percentage: u32, width: usize) -> String {
    let filled = ((percentage.min(100) as usize * width) + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Greeting line for a completed profile
pub fn format_profile(profile: &Profile) -> String {
    format!(
        "{} ({}, {}, {})",
        profile.name, profile.class_level, profile.district, profile.state
    )
}

/// Ranked stream recommendations, highest first
pub fn format_results(results: &[StreamResult], max_score: u32, use_colors: bool) -> String {
    if results.is_empty() {
        return "No recommendations available.".to_string();
    }

    let mut lines = Vec::new();
    let top = &results[0];
    if use_colors {
        lines.push(format!(
            "Top recommendation: {} ({}% match)",
            top.stream.color(stream_color(top.color)).bold(),
            top.percentage
        ));
    } else {
        lines.push(format!(
            "Top recommendation: {} ({}% match)",
            top.stream, top.percentage
        ));
    }
    lines.push(String::new());

    for (idx, result) in results.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);
        let name = format!("{:<22}", result.stream);
        let pct = format!("{:>4}%", result.percentage);
        let bar = format_percentage_bar(result.percentage, 20);
        let score = format!("{}/{}", result.score, max_score);

        if use_colors {
            lines.push(format!(
                "{} {} {}  {}  {}",
                index_str.dimmed(),
                name.color(stream_color(result.color)).bold(),
                pct.color(match_color(result.percentage)),
                bar.color(match_color(result.percentage)),
                score.dimmed()
            ));
        } else {
            lines.push(format!("{} {} {}  {}  {}", index_str, name, pct, bar, score));
        }
        lines.push(format!("    {}", result.description));
        lines.push(format!("    Careers: {}", format_list_more(&result.careers, 3)));
        lines.push(format!("    Courses: {}", format_list_more(&result.courses, 3)));
    }

    lines.join("\n")
}

/// Results as tab-separated values for scripting
/// Columns: rank, stream key, stream, score, percentage (no headers, no colors)
pub fn format_results_tsv(results: &[StreamResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                idx + 1,
                r.category.key(),
                r.stream,
                r.score,
                r.percentage
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "Found N Colleges" summary line
pub fn format_college_count(count: usize) -> String {
    if count == 1 {
        "Found 1 College".to_string()
    } else {
        format!("Found {} Colleges", count)
    }
}

/// One line per college: index, rating, name, district, fee.
/// An empty list reads differently depending on whether filters are active.
pub fn format_college_table(
    colleges: &[&College],
    criteria: &FilterCriteria,
    use_colors: bool,
) -> String {
    if colleges.is_empty() {
        return if criteria.has_active_filters() {
            "No colleges match your filters. Try adjusting your search criteria, \
             or pass --course all --district all to see every college."
                .to_string()
        } else {
            "No colleges available.".to_string()
        };
    }

    let term_width = get_terminal_width();
    let separator = "  ";

    let mut lines = vec![format_college_count(colleges.len())];
    for (idx, college) in colleges.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);
        let rating = format!("{:.1}★", college.rating);
        let fee = format_fee(&college.fees);

        // index(3) + space + rating(4) + separators + district + fee
        let fixed_width =
            3 + 1 + 4 + separator.len() * 3 + college.district.chars().count() + fee.chars().count();
        let name = match term_width {
            Some(width) if width > fixed_width + 10 => truncate(&college.name, width - fixed_width),
            Some(_) => truncate(&college.name, 20),
            None => college.name.clone(),
        };

        if use_colors {
            lines.push(format!(
                "{} {}{}{}{}{}{}{}",
                index_str.dimmed(),
                rating.color(rating_color(college.rating)),
                separator,
                name.bold(),
                separator,
                college.district.cyan(),
                separator,
                fee
            ));
        } else {
            lines.push(format!(
                "{} {}{}{}{}{}{}{}",
                index_str, rating, separator, name, separator, college.district, separator, fee
            ));
        }
    }

    lines.join("\n")
}

/// Detailed multi-line card for one college.
/// Courses matching `highlight_course` are marked with '*'.
pub fn format_college_detail(
    college: &College,
    highlight_course: Option<&str>,
    use_colors: bool,
) -> String {
    let courses = college
        .courses
        .iter()
        .map(|course| {
            let hit = highlight_course
                .map(|h| course.to_lowercase().contains(&h.to_lowercase()))
                .unwrap_or(false);
            match (hit, use_colors) {
                (true, true) => format!("{}", course.green().bold()),
                (true, false) => format!("*{}", course),
                _ => course.clone(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let title = if use_colors {
        format!("{}", college.name.bold())
    } else {
        college.name.clone()
    };

    format!(
        "{}\n  District: {}, {}\n  Type: {}\n  Established: {}\n  Rating: {:.1}/5\n  Fees: {}\n  Courses: {}\n  Facilities: {}\n  Affiliation: {}\n  Website: {}",
        title,
        college.district,
        college.state,
        college.college_type,
        college.established,
        college.rating,
        format_fee(&college.fees),
        courses,
        format_list_more(&college.facilities, 4),
        college.affiliation,
        college.website
    )
}

/// Colleges as tab-separated values
/// Columns: id, name, district, annual fee, currency, rating
pub fn format_colleges_tsv(colleges: &[&College]) -> String {
    colleges
        .iter()
        .map(|c| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{:.1}",
                c.id, c.name, c.district, c.fees.annual, c.fees.currency, c.rating
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The question bank with 1-based option numbers
pub fn format_questions(questions: &[Question]) -> String {
    questions
        .iter()
        .map(|q| {
            let options = q
                .options
                .iter()
                .enumerate()
                .map(|(i, o)| format!("  {}. {}", i + 1, o.text))
                .collect::<Vec<_>>()
                .join("\n");
            format!("Q{}. {}\n{}", q.id, q.prompt, options)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_streams(streams: &[StreamInfo], use_colors: bool) -> String {
    streams
        .iter()
        .map(|s| {
            let name = s.category.display_name();
            let header = if use_colors {
                format!("{}", name.color(stream_color(s.color)).bold())
            } else {
                name.to_string()
            };
            format!(
                "{} [{}]\n  {}\n  Careers: {}\n  Courses: {}",
                header,
                s.category.key(),
                s.description,
                s.careers.join(", "),
                s.courses.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
