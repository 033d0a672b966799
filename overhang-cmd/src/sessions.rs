//! Session listing, logging and deletion.

use crate::render;
use anyhow::{bail, Context};
use log::info;
use overhang_core::api::ApiClient;
use overhang_core::grade::Grade;
use overhang_core::models::{GradeEntry, SessionCreate};
use overhang_core::session_form::{SessionForm, RATINGS};
use overhang_core::OverhangError;
use overhang_utils::dates::{parse_date, today};

/// Parse `GRADE:ATTEMPTS:SENDS`, e.g. `V4-V6:6:3`.
pub fn parse_grade_entry(raw: &str) -> anyhow::Result<GradeEntry> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [grade, attempts, completed] = parts.as_slice() else {
        bail!("expected GRADE:ATTEMPTS:SENDS, got {raw:?}");
    };
    let grade: Grade = grade.trim().parse()?;
    let attempts: u32 = attempts
        .trim()
        .parse()
        .with_context(|| format!("bad attempts in {raw:?}"))?;
    let completed: u32 = completed
        .trim()
        .parse()
        .with_context(|| format!("bad sends in {raw:?}"))?;
    Ok(GradeEntry {
        grade,
        attempts,
        completed,
    })
}

/// Fill a [`SessionForm`] from command-line values and validate it the same
/// way the web form does.
pub fn build_session(
    location_id: i64,
    date: Option<&str>,
    grades: &[String],
    rating: Option<u8>,
    notes: Option<String>,
) -> anyhow::Result<SessionCreate> {
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => today(),
    };
    if let Some(r) = rating {
        if !RATINGS.contains(&r) {
            bail!("rating must be between {} and {}", RATINGS.start(), RATINGS.end());
        }
    }
    let mut form = SessionForm::new(date);
    form.location_id = location_id;
    form.grades = grades
        .iter()
        .map(|g| parse_grade_entry(g))
        .collect::<anyhow::Result<_>>()?;
    form.rating = rating;
    form.notes = notes.unwrap_or_default();
    Ok(form.validate().map_err(OverhangError::from)?)
}

pub async fn list(api: &ApiClient, csv: bool) -> anyhow::Result<()> {
    let sessions = api
        .sessions()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load sessions")))?;
    if csv {
        render::sessions_csv(std::io::stdout().lock(), &sessions)?;
    } else {
        print!("{}", render::sessions_text(&sessions));
    }
    Ok(())
}

pub async fn log_session(
    api: &ApiClient,
    location_id: i64,
    date: Option<&str>,
    grades: &[String],
    rating: Option<u8>,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let body = build_session(location_id, date, grades, rating, notes)?;
    let session = api
        .create_session(&body)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to create session")))?;
    info!("created session {}", session.id);
    println!("logged session #{} on {}", session.id, body.date);
    Ok(())
}

pub async fn delete(api: &ApiClient, id: i64) -> anyhow::Result<()> {
    api.delete_session(id)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to delete session")))?;
    println!("deleted session #{id}");
    Ok(())
}
