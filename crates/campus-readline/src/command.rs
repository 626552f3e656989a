//! Home-page command parsing.

use std::str::FromStr;

use campus_core::gpa::Grade;

/// Which course-row field a `/set` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Name,
    Credits,
    Grade,
}

/// Commands available on the home page.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeCommand {
    AddCourse {
        name: String,
        credits: String,
        grade: Option<Grade>,
    },
    /// 1-based row number as displayed.
    RemoveCourse(usize),
    SetField {
        row: usize,
        field: CourseField,
        value: String,
    },
    Prior {
        gpa: String,
        credits: String,
    },
    ClearAll,
    ShowGpa,
    FaqSearch(String),
    /// `None` lists the category buttons.
    FaqCategory(Option<String>),
    /// 1-based position in the visible FAQ list.
    ToggleFaq(usize),
    Export,
    Logout,
    Help,
    Quit,
}

/// Parses one home-page input line.
///
/// # Errors
///
/// Returns a user-facing message for unknown commands or malformed
/// arguments. The caller handles empty lines.
pub fn parse(line: &str) -> Result<HomeCommand, String> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next().unwrap_or_default();
    let rest: Vec<&str> = tokens.collect();

    match head {
        "quit" | "exit" => Ok(HomeCommand::Quit),
        "/help" => Ok(HomeCommand::Help),
        "/logout" => Ok(HomeCommand::Logout),
        "/gpa" => Ok(HomeCommand::ShowGpa),
        "/clear" => Ok(HomeCommand::ClearAll),
        "/export" => Ok(HomeCommand::Export),
        "/add" => {
            let grade = match rest.get(2) {
                Some(token) => parse_grade(token)?,
                None => None,
            };
            Ok(HomeCommand::AddCourse {
                name: rest.first().unwrap_or(&"").to_string(),
                credits: rest.get(1).unwrap_or(&"").to_string(),
                grade,
            })
        }
        "/remove" => Ok(HomeCommand::RemoveCourse(parse_row(rest.first())?)),
        "/set" => {
            let row = parse_row(rest.first())?;
            let field = match rest.get(1).copied() {
                Some("name") => CourseField::Name,
                Some("credits") => CourseField::Credits,
                Some("grade") => CourseField::Grade,
                _ => return Err("Usage: /set <row> name|credits|grade <value>".to_string()),
            };
            Ok(HomeCommand::SetField {
                row,
                field,
                value: rest[2..].join(" "),
            })
        }
        "/prior" => {
            if rest.len() != 2 {
                return Err("Usage: /prior <gpa> <credits>".to_string());
            }
            Ok(HomeCommand::Prior {
                gpa: rest[0].to_string(),
                credits: rest[1].to_string(),
            })
        }
        "/faq" => Ok(HomeCommand::FaqSearch(rest.join(" "))),
        "/cat" => Ok(HomeCommand::FaqCategory(
            rest.first().map(|s| s.to_string()),
        )),
        "/open" => Ok(HomeCommand::ToggleFaq(parse_row(rest.first())?)),
        other if other.starts_with('/') => Err(format!(
            "Unknown command '{other}'. Type /help for the command list."
        )),
        _ => Err("Commands start with '/'. Type /help for the command list.".to_string()),
    }
}

fn parse_row(token: Option<&&str>) -> Result<usize, String> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .ok_or_else(|| "Expected a row number (1-based).".to_string())
}

/// Parses a grade token, accepting `none` to deselect.
pub fn parse_grade(token: &str) -> Result<Option<Grade>, String> {
    if token.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Grade::from_str(token)
        .map(Some)
        .map_err(|_| format!("Unknown grade '{token}'. Use A+, A-, B+, B, B-, C+, C, C-, D+, D, F or none."))
}
