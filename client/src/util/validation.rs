//! Client-side form checks run before any request is sent.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{InterviewRequest, NewJob, SignupForm};

pub const MIN_PASSWORD_LEN: usize = 6;

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot inside
/// the domain with text on both sides.
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.contains('@') && !s.chars().any(char::is_whitespace);
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Login form check. Returns the inline error for the first failing rule.
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if !is_valid_email(email) {
        return Err("Invalid email format");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Signup form check: name, then the login rules.
pub fn validate_signup(form: &SignupForm) -> Result<(), &'static str> {
    if form.full_name.trim().is_empty() {
        return Err("Full name is required");
    }
    validate_login(&form.email, &form.password)
}

/// Job types offered by the post form; the first is the default.
pub const JOB_TYPES: [(&str, &str); 4] = [
    ("full-time", "Full-time"),
    ("part-time", "Part-time"),
    ("contract", "Contract"),
    ("internship", "Internship"),
];

/// Empty post-job draft.
pub fn blank_job() -> NewJob {
    NewJob { job_type: JOB_TYPES[0].0.to_owned(), ..NewJob::default() }
}

/// Required-field and salary checks for the post-job form.
pub fn validate_new_job(job: &NewJob) -> Result<(), &'static str> {
    if [&job.title, &job.description, &job.location, &job.salary]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err("All fields are required");
    }
    if job.salary.trim().parse::<f64>().map_or(true, |n| !n.is_finite() || n < 0.0) {
        return Err("Salary must be a number");
    }
    if !JOB_TYPES.iter().any(|(value, _)| *value == job.job_type) {
        return Err("Unknown job type");
    }
    Ok(())
}

/// Interview slots need a date, a time and a place; notes are optional.
pub fn validate_interview(request: &InterviewRequest) -> Result<(), &'static str> {
    if [&request.date, &request.time, &request.location]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err("Date, time and location are required");
    }
    Ok(())
}
