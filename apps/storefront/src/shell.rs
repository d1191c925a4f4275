//! # Interactive Shell
//!
//! Line-oriented input for the storefront. Each line is parsed into a
//! [`ShellCommand`] and dispatched to the matching command function.
//!
//! ```text
//! stdin ──► parse() ──► ShellCommand ──► execute() ──► Outcome ──► stdout
//! ```

use std::str::FromStr;

use crate::commands::review::DraftField;
use crate::commands::{cart, catalog, review, tabs, StorefrontView};
use crate::error::ApiError;
use crate::state::StorefrontState;

pub const HELP: &str = "\
Commands:
  hover N            select colour swatch N
  add                add the selected variant to the cart
  remove             remove the last cart item
  tab NAME           reviews | write | shipping | details
  name TEXT          set the reviewer name
  review TEXT        set the review text
  rating N           set the rating (1-5)
  rating -           clear the rating
  recommend yes|no|- set or clear the recommendation
  submit             submit the review
  show               render the page
  json               print the page as JSON
  help               show this help
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Hover(usize),
    Add,
    Remove,
    Tab(String),
    Draft(DraftField),
    Submit,
    Show,
    Json,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "hover" | "select" => rest
                .parse()
                .map(ShellCommand::Hover)
                .map_err(|_| ApiError::invalid_input(format!("Not a variant index: '{}'", rest))),
            "add" => Ok(ShellCommand::Add),
            "remove" => Ok(ShellCommand::Remove),
            "tab" => Ok(ShellCommand::Tab(rest.to_string())),
            "name" => Ok(ShellCommand::Draft(DraftField::Name(rest.to_string()))),
            "review" => Ok(ShellCommand::Draft(DraftField::Text(rest.to_string()))),
            "rating" => parse_rating(rest).map(ShellCommand::Draft),
            "recommend" => parse_recommend(rest).map(ShellCommand::Draft),
            "submit" => Ok(ShellCommand::Submit),
            "show" | "" => Ok(ShellCommand::Show),
            "json" => Ok(ShellCommand::Json),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(ApiError::invalid_input(format!(
                "Unknown command '{}'. Type 'help'.",
                other
            ))),
        }
    }
}

fn parse_rating(arg: &str) -> Result<DraftField, ApiError> {
    if arg.is_empty() || arg == "-" {
        return Ok(DraftField::ClearRating);
    }
    arg.parse()
        .map(DraftField::Rating)
        .map_err(|_| ApiError::invalid_input(format!("Not a rating: '{}'", arg)))
}

fn parse_recommend(arg: &str) -> Result<DraftField, ApiError> {
    match arg.to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(DraftField::Recommend(Some(true))),
        "no" | "n" | "false" => Ok(DraftField::Recommend(Some(false))),
        "" | "-" => Ok(DraftField::Recommend(None)),
        _ => Err(ApiError::invalid_input(format!(
            "Expected yes, no or -, got '{}'",
            arg
        ))),
    }
}

/// What the shell should do after a command.
#[derive(Debug, Clone)]
pub enum Outcome {
    Render(StorefrontView),
    Json(StorefrontView),
    Help,
    Quit,
}

/// Runs one parsed command against the state.
pub fn execute(state: &StorefrontState, command: ShellCommand) -> Result<Outcome, ApiError> {
    let view = match command {
        ShellCommand::Hover(index) => catalog::hover_variant(state, index)?,
        ShellCommand::Add => cart::add_to_cart(state),
        ShellCommand::Remove => cart::remove_from_cart(state),
        ShellCommand::Tab(name) => tabs::select_tab(state, &name)?,
        ShellCommand::Draft(field) => review::set_review_draft(state, field),
        ShellCommand::Submit => review::submit_review(state)?,
        ShellCommand::Show => catalog::get_storefront(state),
        ShellCommand::Json => return Ok(Outcome::Json(catalog::get_storefront(state))),
        ShellCommand::Help => return Ok(Outcome::Help),
        ShellCommand::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Render(view))
}
