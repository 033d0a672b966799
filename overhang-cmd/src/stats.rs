//! `stats` subcommands: fetch, reshape, print.

use crate::render;
use crate::FilterArgs;
use anyhow::Context;
use log::debug;
use overhang_core::api::ApiClient;
use overhang_core::filter::FilterState;
use overhang_core::models::{Period, ViewMode};
use overhang_data::{
    distribution_total, most_popular_grade, reshape_distribution, reshape_location_activity,
    reshape_progress,
};
use overhang_utils::dates::{parse_date, today};
use std::io::Write;

fn parse_period(raw: &str) -> anyhow::Result<Period> {
    raw.parse::<Period>().map_err(anyhow::Error::msg)
}

impl FilterArgs {
    /// Build the same filter the dashboard would hold. Either date flag
    /// switches to a custom range; otherwise the period is resolved against
    /// today.
    pub fn to_filter(&self) -> anyhow::Result<FilterState> {
        let mut filter = FilterState::new();
        filter.select_period(parse_period(&self.period)?, today());
        if self.start_date.is_some() || self.end_date.is_some() {
            filter.toggle_custom_range();
            filter.set_start_date(self.start_date.as_deref().map(parse_date).transpose()?);
            filter.set_end_date(self.end_date.as_deref().map(parse_date).transpose()?);
        }
        filter.set_location(self.location_id);
        filter.set_view_mode(if self.aggregate {
            ViewMode::Aggregate
        } else {
            ViewMode::Personal
        });
        debug!("resolved filter: {:?}", filter);
        Ok(filter)
    }
}

pub async fn distribution(api: &ApiClient, args: &FilterArgs, csv: bool) -> anyhow::Result<()> {
    let filter = args.to_filter()?;
    let map = match filter.view_mode {
        ViewMode::Personal => api.user_distribution(&filter).await,
        ViewMode::Aggregate => api.aggregate_distribution(&filter).await,
    }
    .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load distribution data")))?;
    let series = reshape_distribution(&map);
    if csv {
        render::distribution_csv(std::io::stdout().lock(), &series)?;
    } else {
        print!("{}", render::distribution_text(&series));
    }
    Ok(())
}

pub async fn progress(api: &ApiClient, args: &FilterArgs, csv: bool) -> anyhow::Result<()> {
    let filter = args.to_filter()?;
    let records = match filter.view_mode {
        ViewMode::Personal => api.user_progress(&filter).await,
        ViewMode::Aggregate => api.aggregate_progress(&filter).await,
    }
    .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load progress data")))?;
    let series = reshape_progress(&records);
    if csv {
        render::progress_csv(std::io::stdout().lock(), &series)?;
    } else {
        print!("{}", render::progress_text(&series));
    }
    Ok(())
}

pub async fn aggregate(
    api: &ApiClient,
    period: &str,
    location_id: Option<i64>,
    csv: bool,
) -> anyhow::Result<()> {
    let period = parse_period(period)?;
    let stats = api
        .aggregate_stats(period, location_id)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load network activity data")))?;
    let series = reshape_location_activity(&stats.by_location);
    if csv {
        render::activity_csv(std::io::stdout().lock(), &series)?;
    } else {
        print!("{}", render::activity_text(&series, period));
    }
    Ok(())
}

pub async fn location(api: &ApiClient, slug: &str) -> anyhow::Result<()> {
    let place = api
        .location_by_slug(slug)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load location data")))?;
    let stats = api
        .location_stats(place.id)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load location data")))?;

    let distribution = &stats.grade_distribution;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{} ({})", place.name, place.slug)?;
    if let Some(description) = &place.description {
        writeln!(out, "{description}")?;
    }
    writeln!(out, "total sessions:     {}", stats.total_climbs)?;
    writeln!(out, "total completed:    {}", distribution_total(distribution))?;
    writeln!(
        out,
        "most popular grade: {}",
        most_popular_grade(distribution).unwrap_or_else(|| "N/A".to_string())
    )?;
    writeln!(out)?;
    write!(out, "{}", render::distribution_text(&reshape_distribution(distribution)))
        .context("writing distribution")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_flag_resolves_bounds() {
        let args = FilterArgs {
            period: "week".to_string(),
            location_id: Some(4),
            ..Default::default()
        };
        let filter = args.to_filter().unwrap();
        assert!(!filter.custom_range);
        assert_eq!(filter.period, Period::Week);
        assert_eq!(filter.end_date, Some(today()));
        assert_eq!(filter.location_id, Some(4));
        assert_eq!(filter.view_mode, ViewMode::Personal);
    }

    #[test]
    fn test_date_flags_switch_to_custom_range() {
        let args = FilterArgs {
            period: "month".to_string(),
            start_date: Some("2024-01-01".to_string()),
            aggregate: true,
            ..Default::default()
        };
        let filter = args.to_filter().unwrap();
        assert!(filter.custom_range);
        assert_eq!(filter.start_date, parse_date("2024-01-01").ok());
        assert_eq!(filter.end_date, None);
        assert_eq!(filter.distribution_period(), Period::All);
        assert_eq!(filter.view_mode, ViewMode::Aggregate);
    }

    #[test]
    fn test_bad_flags_are_errors() {
        let args = FilterArgs {
            period: "year".to_string(),
            ..Default::default()
        };
        assert!(args.to_filter().is_err());

        let args = FilterArgs {
            period: "all".to_string(),
            end_date: Some("tomorrow".to_string()),
            ..Default::default()
        };
        assert!(args.to_filter().is_err());
    }
}
