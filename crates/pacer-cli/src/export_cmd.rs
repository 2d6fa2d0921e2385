//! `pacer export` command: calendar URL for one day's focus session.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

use pacer_core::calendar::focus_session_url;
use pacer_core::schedule::{date_set, resolve_selected, tasks_for_day};
use pacer_store::store::ProjectStore;

use crate::resolve;

/// Print a calendar-event URL for the selected day's task list.
pub fn run_export(
    store: &ProjectStore,
    date_arg: Option<&str>,
    from: &str,
    to: &str,
) -> Result<()> {
    let projects = store.load()?;
    let idx = resolve::active_project(store, &projects, None)?;
    let project = &projects[idx];

    let dates = date_set(&project.tasks);
    let requested: NaiveDate = match date_arg {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid date {s:?} (expected YYYY-MM-DD)"))?,
        None => chrono::Local::now().date_naive(),
    };
    let Some(selected) = resolve_selected(&dates, Some(requested)) else {
        anyhow::bail!("project {:?} has no tasks to export", project.name);
    };

    let start = parse_time(from)?;
    let end = parse_time(to)?;

    let day_tasks = tasks_for_day(&project.tasks, selected);
    let url = focus_session_url(&project.name, selected, start, end, &day_tasks);

    println!("{url}");
    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("invalid time {s:?} (expected HH:MM)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_parse_from_hh_mm() {
        assert_eq!(
            parse_time("14:00").unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
        assert!(parse_time("2pm").is_err());
    }
}
