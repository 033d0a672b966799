//! Plain-text and CSV renderings of the reshaped series.
//!
//! Text output mirrors what the web charts show (labels, counts, totals,
//! empty-state messages). CSV output is one row per data point with a
//! header, for piping into other tools.

use overhang_core::models::{Location, Period, Session};
use overhang_data::{
    percentage, summarize_sessions, ActivitySeries, DistributionSeries, ProgressSeries,
};
use overhang_utils::dates::format_date;
use std::fmt::Write as _;
use std::io;

const BAR_WIDTH: u64 = 30;

fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value * BAR_WIDTH).div_ceil(max);
    "#".repeat(len as usize)
}

pub fn distribution_text(series: &DistributionSeries) -> String {
    if series.is_empty() {
        return "no climbs recorded yet\n".to_string();
    }
    let max = series.values.iter().copied().max().unwrap_or(0);
    let mut out = String::new();
    for (label, value) in series.labels.iter().zip(&series.values) {
        let _ = writeln!(
            out,
            "{:<7}{:>5} {:>6.1}%  {}",
            label,
            value,
            percentage(*value, series.total),
            bar(*value, max)
        );
    }
    let _ = writeln!(out, "total sends: {}", series.total);
    out
}

pub fn progress_text(series: &[ProgressSeries]) -> String {
    if series.is_empty() {
        return "no progress data for this period\n".to_string();
    }
    let mut out = String::new();
    for line in series {
        let _ = writeln!(out, "{} ({} sends)", line.grade, line.total());
        for point in &line.points {
            let _ = writeln!(out, "  {}  {:>4}", point.date, point.cumulative);
        }
    }
    out
}

pub fn activity_text(series: &ActivitySeries, period: Period) -> String {
    let mut out = String::new();
    if series.is_empty() {
        out.push_str("no sessions logged in this period\n");
    } else {
        let width = series.labels.iter().map(String::len).max().unwrap_or(0);
        let max = series.values.first().copied().unwrap_or(0);
        for (name, count) in series.labels.iter().zip(&series.values) {
            let _ = writeln!(out, "{:<width$}  {:>5}  {}", name, count, bar(*count, max));
        }
    }
    let _ = writeln!(
        out,
        "total sessions: {} | period: {}",
        series.total,
        period.description()
    );
    out
}

pub fn locations_text(locations: &[Location]) -> String {
    let mut out = String::new();
    for location in locations {
        let _ = writeln!(out, "{:>4}  {:<24} {}", location.id, location.name, location.slug);
    }
    out
}

pub fn sessions_text(sessions: &[Session]) -> String {
    if sessions.is_empty() {
        return "no sessions logged yet\n".to_string();
    }
    let mut out = String::new();
    for session in sessions {
        let grades: Vec<String> = session
            .grades
            .iter()
            .map(|g| format!("{} {}/{}", g.grade, g.completed, g.attempts))
            .collect();
        let rating = session
            .rating
            .map(|r| format!(" rating {r}/10"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "#{:<5} {} {}{}: {}",
            session.id,
            format_date(&session.date),
            session.location_name,
            rating,
            grades.join(", ")
        );
    }
    let summary = summarize_sessions(sessions);
    let average = summary
        .average_rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "N/A".to_string());
    let _ = writeln!(
        out,
        "sessions: {}  attempts: {}  sends: {}  avg rating: {}",
        summary.sessions, summary.attempts, summary.sends, average
    );
    out
}

pub fn distribution_csv<W: io::Write>(w: W, series: &DistributionSeries) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["grade", "sends", "color"])?;
    for ((label, value), color) in series.labels.iter().zip(&series.values).zip(&series.colors) {
        wtr.write_record([label.clone(), value.to_string(), color.clone()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn progress_csv<W: io::Write>(w: W, series: &[ProgressSeries]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["grade", "date", "cumulative"])?;
    for line in series {
        for point in &line.points {
            wtr.write_record([
                line.grade.label().to_string(),
                point.date.clone(),
                point.cumulative.to_string(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn activity_csv<W: io::Write>(w: W, series: &ActivitySeries) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["location", "sessions"])?;
    for (name, count) in series.labels.iter().zip(&series.values) {
        wtr.write_record([name.clone(), count.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn locations_csv<W: io::Write>(w: W, locations: &[Location]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["id", "name", "slug"])?;
    for location in locations {
        wtr.write_record([location.id.to_string(), location.name.clone(), location.slug.clone()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// One row per grade entry, so a session spans several rows.
pub fn sessions_csv<W: io::Write>(w: W, sessions: &[Session]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["id", "date", "location", "grade", "attempts", "sends", "rating"])?;
    for session in sessions {
        let date = format_date(&session.date);
        let rating = session.rating.map(|r| r.to_string()).unwrap_or_default();
        for entry in &session.grades {
            wtr.write_record([
                session.id.to_string(),
                date.clone(),
                session.location_name.clone(),
                entry.grade.label().to_string(),
                entry.attempts.to_string(),
                entry.completed.to_string(),
                rating.clone(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
