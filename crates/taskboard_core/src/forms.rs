//! Presentation-side form validation rules.
//!
//! # Responsibility
//! - Validate create/edit form input before it is handed to a service.
//! - Parse the comma-separated tag input field.
//!
//! # Invariants
//! - These rules are never applied by repositories or services; a
//!   consumer that skips them can still write any value the data model
//!   accepts.
//! - Length rules apply to trimmed input; the caller trims on submit.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const NAME_MIN_CHARS: usize = 3;
const DESCRIPTION_MIN_CHARS: usize = 10;

/// Field-name → message map. Empty means the form is valid.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Input of the project create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
}

/// Input of the task create/edit form. `assigned_user_id` and
/// `due_date` are kept as raw field text; empty means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
    pub assigned_user_id: String,
    pub due_date: String,
}

/// Input of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Checks the project form rules: name required and at least 3 chars,
/// description required and at least 10 chars.
pub fn validate_project_form(form: &ProjectForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_name(&mut errors, &form.name, "Project");
    check_description(&mut errors, &form.description, "Project");
    errors
}

/// Checks the task form rules: project-form name/description rules,
/// assignee required, and a due date (when present) that parses as
/// `YYYY-MM-DD` and is not before `today`.
///
/// `today` is passed in so callers control the timezone cutoff.
pub fn validate_task_form(form: &TaskForm, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_name(&mut errors, &form.name, "Task");
    check_description(&mut errors, &form.description, "Task");

    if form.assigned_user_id.trim().is_empty() {
        errors.insert(
            "assignedUserId",
            "Please assign this task to someone".to_string(),
        );
    }

    let due_date = form.due_date.trim();
    if !due_date.is_empty() {
        match NaiveDate::parse_from_str(due_date, "%Y-%m-%d") {
            Ok(date) if date < today => {
                errors.insert("dueDate", "Due date cannot be in the past".to_string());
            }
            Ok(_) => {}
            Err(_) => {
                errors.insert("dueDate", "Due date must be a valid date".to_string());
            }
        }
    }

    errors
}

/// Checks the registration form rules: all fields required, email must
/// look like an address.
pub fn validate_sign_up_form(form: &SignUpForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name", "Name is required".to_string());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !EMAIL_RE.is_match(email) {
        errors.insert("email", "Enter a valid email address".to_string());
    }

    if form.password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    }

    errors
}

/// Splits the comma-separated tag field into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_name(errors: &mut FieldErrors, name: &str, label: &str) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.insert("name", format!("{label} name is required"));
    } else if trimmed.chars().count() < NAME_MIN_CHARS {
        errors.insert(
            "name",
            format!("{label} name must be at least {NAME_MIN_CHARS} characters long"),
        );
    }
}

fn check_description(errors: &mut FieldErrors, description: &str, label: &str) {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        errors.insert("description", format!("{label} description is required"));
    } else if trimmed.chars().count() < DESCRIPTION_MIN_CHARS {
        errors.insert(
            "description",
            format!("{label} description must be at least {DESCRIPTION_MIN_CHARS} characters long"),
        );
    }
}
