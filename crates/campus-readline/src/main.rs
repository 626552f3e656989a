//! Interactive terminal front-end for the Campus portal.
//!
//! A rustyline REPL with two pages: the login view and the home view.
//! The home view drives the GPA calculator, the FAQ browser, and the
//! disclaimer modal through their view-models. The viewport width used
//! by the modal's mobile check comes from the live terminal, overridable
//! with `--viewport-width`.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use campus_application::{DISCLAIMER_TEXT, DisclaimerView, FaqList, GpaDisplay, GpaForm, Portal};
use campus_core::faq::FaqEntry;
use campus_core::gpa::TierStyle;
use campus_core::page::Page;
use campus_infrastructure::{InMemoryTabStore, TomlFaqCatalog};

mod command;

use command::{CourseField, HomeCommand, parse_grade};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let commands = [
            "/add", "/remove", "/set", "/prior", "/clear", "/gpa", "/faq", "/cat", "/open",
            "/export", "/logout", "/help",
        ];
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Campus student portal", long_about = None)]
struct Cli {
    /// Viewport width in columns (defaults to the live terminal width)
    #[arg(long)]
    viewport_width: Option<u16>,

    /// Path to an external FAQ catalog (TOML)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

/// What a home-page command asks the page loop to do next.
enum HomeOutcome {
    Stay,
    Logout,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let viewport_width = cli
        .viewport_width
        .unwrap_or_else(|| crossterm::terminal::size().map(|(w, _)| w).unwrap_or(80));
    tracing::debug!(viewport_width, "resolved viewport width");

    let catalog = match &cli.catalog {
        Some(path) => TomlFaqCatalog::with_path(path),
        None => TomlFaqCatalog::embedded(),
    };
    let faq_entries = catalog.load()?;

    // One process is one tab: the store dies with it.
    let store = Arc::new(InMemoryTabStore::new());
    let portal = Portal::new(store);

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Campus Portal ===".bright_magenta().bold());

    let mut page = Page::Login;
    loop {
        // The access guard runs before anything else on every page open.
        let init = portal.open_page(page, viewport_width);
        if let Some(target) = init.redirect {
            page = target;
            continue;
        }

        let next = match page {
            Page::Login => run_login_page(&mut rl, &portal)?,
            Page::Home => {
                let disclaimer = init.disclaimer.map(DisclaimerView::new);
                run_home_page(&mut rl, &portal, disclaimer, &faq_entries)?
            }
        };

        match next {
            Some(target) => page = target,
            None => break,
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

fn run_login_page(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    portal: &Portal,
) -> Result<Option<Page>> {
    println!();
    println!("{}", "-- Student Login --".bright_cyan().bold());
    println!(
        "{}",
        "Enter your student ID (or 'quit' to exit).".bright_black()
    );

    let mut form = portal.login_form();

    loop {
        match rl.readline("Student ID > ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    return Ok(None);
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                // Enter submits, same as the login action.
                form.set_student_id(trimmed);
                match form.submit() {
                    Some(next) => {
                        println!("{}", format!("Welcome, student {trimmed}.").green());
                        return Ok(Some(next));
                    }
                    None => {
                        if let Some(message) = form.error() {
                            println!("{}", message.red());
                        }
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

fn run_home_page(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    portal: &Portal,
    disclaimer: Option<DisclaimerView>,
    faq_entries: &[FaqEntry],
) -> Result<Option<Page>> {
    if let Some(mut view) = disclaimer {
        if view.is_open() && !show_disclaimer(rl, &mut view)? {
            return Ok(None);
        }
    }

    let student_id = portal
        .gate()
        .current_session()
        .map(|session| session.student_id)
        .unwrap_or_default();

    println!();
    println!(
        "{}",
        format!("-- Home ({student_id}) --").bright_cyan().bold()
    );
    println!("{}", "Type /help for the command list.".bright_black());

    // The calculator page loads with its seed rows and an initial pass.
    let mut gpa = GpaForm::new();
    let mut faq = FaqList::new(faq_entries.to_vec());

    print_gpa_summary(&gpa);

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match command::parse(trimmed) {
                    Ok(cmd) => match run_home_command(cmd, portal, &mut gpa, &mut faq)? {
                        HomeOutcome::Stay => {}
                        HomeOutcome::Logout => return Ok(Some(Page::Login)),
                        HomeOutcome::Quit => return Ok(None),
                    },
                    Err(message) => println!("{}", message.red()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Renders the disclaimer overlay and waits for a dismissal.
///
/// Returns false when the user ends the session instead (EOF).
fn show_disclaimer(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    view: &mut DisclaimerView,
) -> Result<bool> {
    println!();
    println!("{}", "---- Disclaimer ----".yellow().bold());
    println!("{}", DISCLAIMER_TEXT.yellow());
    println!(
        "{}",
        "(page scroll is paused; 'close' or any input dismisses)".bright_black()
    );

    match rl.readline("[disclaimer] > ") {
        Ok(line) => {
            if line.trim() == "close" {
                view.close();
            } else {
                // Anything else counts as a click outside the content region.
                view.backdrop_interaction();
            }
            Ok(true)
        }
        Err(rustyline::error::ReadlineError::Interrupted) => {
            view.backdrop_interaction();
            Ok(true)
        }
        Err(rustyline::error::ReadlineError::Eof) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

fn run_home_command(
    cmd: HomeCommand,
    portal: &Portal,
    gpa: &mut GpaForm,
    faq: &mut FaqList,
) -> Result<HomeOutcome> {
    match cmd {
        HomeCommand::Quit => return Ok(HomeOutcome::Quit),
        HomeCommand::Logout => {
            portal.logout();
            return Ok(HomeOutcome::Logout);
        }
        HomeCommand::Help => print_help(),
        HomeCommand::AddCourse {
            name,
            credits,
            grade,
        } => {
            gpa.add_course(name, credits, grade);
            println!("{}", format!("Added row {}.", gpa.rows().len()).green());
            print_gpa_summary(gpa);
        }
        HomeCommand::RemoveCourse(row) => match gpa.rows().get(row - 1).map(|r| r.id.clone()) {
            Some(id) => {
                gpa.remove_course(&id);
                print_gpa_summary(gpa);
            }
            None => println!("{}", format!("No row {row}.").red()),
        },
        HomeCommand::SetField { row, field, value } => {
            match gpa.rows().get(row - 1).map(|r| r.id.clone()) {
                Some(id) => {
                    let applied = match field {
                        CourseField::Name => {
                            gpa.set_course_name(&id, value);
                            Ok(())
                        }
                        CourseField::Credits => {
                            gpa.set_course_credits(&id, value);
                            Ok(())
                        }
                        CourseField::Grade => parse_grade(value.trim()).map(|grade| {
                            gpa.set_course_grade(&id, grade);
                        }),
                    };
                    match applied {
                        Ok(()) => print_gpa_summary(gpa),
                        Err(message) => println!("{}", message.red()),
                    }
                }
                None => println!("{}", format!("No row {row}.").red()),
            }
        }
        HomeCommand::Prior { gpa: prior_gpa, credits } => {
            gpa.set_prior_gpa(prior_gpa);
            gpa.set_prior_credits(credits);
            print_gpa_summary(gpa);
        }
        HomeCommand::ClearAll => {
            gpa.clear_all();
            println!("{}", "Cleared all rows and the prior record.".green());
            print_gpa_summary(gpa);
        }
        HomeCommand::ShowGpa => print_gpa_table(gpa),
        HomeCommand::FaqSearch(term) => {
            faq.set_search_term(term);
            print_faq(faq);
        }
        HomeCommand::FaqCategory(None) => print_categories(faq),
        HomeCommand::FaqCategory(Some(category)) => {
            faq.activate_category(category);
            print_faq(faq);
        }
        HomeCommand::ToggleFaq(position) => {
            let target = faq.visible_entries().get(position - 1).map(|(i, _)| *i);
            match target {
                Some(index) => {
                    faq.toggle_expanded(index);
                    print_faq(faq);
                }
                None => println!("{}", format!("No question {position}.").red()),
            }
        }
        HomeCommand::Export => println!("{}", gpa.snapshot_json()?),
    }
    Ok(HomeOutcome::Stay)
}

fn print_gpa_summary(form: &GpaForm) {
    let display = form.display();
    println!(
        "Semester GPA {} ({} cr)   Cumulative GPA {} ({} cr)   {}",
        display.current_gpa.bold(),
        display.current_credits,
        display.cumulative_gpa.bold(),
        display.cumulative_credits,
        tier_banner(display)
    );
}

fn print_gpa_table(form: &GpaForm) {
    if form.rows().is_empty() {
        println!("{}", "No course rows. /add creates one.".bright_black());
    }
    for (i, row) in form.rows().iter().enumerate() {
        let name = if row.name.is_empty() {
            "(unnamed)"
        } else {
            &row.name
        };
        let credits = if row.credit_hours.is_empty() {
            "(empty)"
        } else {
            &row.credit_hours
        };
        let grade = row
            .grade
            .map(|g| g.to_string())
            .unwrap_or_else(|| "(none)".to_string());
        println!("  {:>2}. {:<24} credits {:<8} grade {}", i + 1, name, credits, grade);
    }

    let prior = form.prior();
    if !prior.gpa.is_empty() || !prior.credits.is_empty() {
        println!("  prior record: GPA {} over {} credits", prior.gpa, prior.credits);
    }

    print_gpa_summary(form);
}

fn tier_banner(display: &GpaDisplay) -> colored::ColoredString {
    match display.tier_style {
        TierStyle::Accent => display.tier_label.bright_green().bold(),
        TierStyle::Neutral => display.tier_label.yellow(),
        TierStyle::Warning => display.tier_label.red().bold(),
    }
}

fn print_categories(faq: &FaqList) {
    let buttons: Vec<String> = faq
        .categories()
        .iter()
        .map(|category| {
            if *category == faq.active_category() {
                format!("[{category}]").bright_cyan().to_string()
            } else {
                format!(" {category} ")
            }
        })
        .collect();
    println!("{}", buttons.join(" "));
}

fn print_faq(faq: &FaqList) {
    print_categories(faq);

    let visible = faq.visible_entries();
    if visible.is_empty() {
        println!("{}", "No questions match.".bright_black());
        return;
    }

    for (position, (index, entry)) in visible.iter().enumerate() {
        let marker = if faq.is_expanded(*index) { "v" } else { ">" };
        println!(
            "  {:>2}. {} {} {}",
            position + 1,
            marker,
            entry.question,
            format!("[{}]", entry.category).bright_black()
        );
        if faq.is_expanded(*index) {
            println!("      {}", entry.answer);
        }
    }
}

fn print_help() {
    println!("{}", "GPA calculator".bright_cyan());
    println!("  /add [name] [credits] [grade]   add a course row");
    println!("  /set <row> name|credits|grade <value>");
    println!("  /remove <row>                   delete a course row");
    println!("  /prior <gpa> <credits>          prior academic record");
    println!("  /clear                          remove every row and the prior record");
    println!("  /gpa                            show rows and aggregates");
    println!("  /export                         aggregates as JSON");
    println!("{}", "FAQ".bright_cyan());
    println!("  /faq [term]                     search questions (bare /faq resets)");
    println!("  /cat [category]                 activate a category (bare /cat lists)");
    println!("  /open <n>                       expand or collapse a question");
    println!("{}", "Session".bright_cyan());
    println!("  /logout                         end the session");
    println!("  quit                            exit the portal");
}
