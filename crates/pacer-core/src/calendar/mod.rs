//! Calendar export: pure URL formatting for a day's focus session.
//!
//! Builds a Google Calendar event-template URL carrying the session title,
//! the time range, and a checklist body with one line per task. No state,
//! no I/O.

use chrono::{NaiveDate, NaiveTime};

use pacer_store::models::Task;

/// Build the calendar URL for one day's focus session.
///
/// `tasks` should be the day's list in display order; each becomes a
/// `[x]`/`[ ]` line in the event body depending on completion.
pub fn focus_session_url(
    project_name: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    tasks: &[Task],
) -> String {
    let title = format!("{project_name} Focus Session");
    let details = format!(
        "Project: {project_name}\n\nTasks:\n{}",
        task_checklist(tasks)
    );
    let dates = format!(
        "{}T{}/{}T{}",
        date.format("%Y%m%d"),
        start.format("%H%M%S"),
        date.format("%Y%m%d"),
        end.format("%H%M%S"),
    );

    format!(
        "https://www.google.com/calendar/render?action=TEMPLATE&text={}&dates={}&details={}",
        percent_encode(&title),
        dates,
        percent_encode(&details),
    )
}

/// One `[x]`/`[ ]` line per task, in input order.
fn task_checklist(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|t| {
            let marker = if t.is_complete() { "[x]" } else { "[ ]" };
            format!("{marker} {}", t.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Percent-encode a query-string component.
///
/// Keeps the RFC 3986 unreserved set (alphanumerics plus `-_.~`) and
/// encodes every other byte as uppercase `%XX`.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            other => {
                out.push_str(&format!("%{other:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacer_store::models::TaskKind;
    use uuid::Uuid;

    fn task(content: &str, completion: u8) -> Task {
        Task {
            id: Uuid::new_v4(),
            project_id: Uuid::nil(),
            date: "2024-01-05".parse().unwrap(),
            content: content.to_owned(),
            completion_percent: completion,
            notes: String::new(),
            order_index: 0,
            is_buffer_task: false,
            kind: TaskKind::Normal,
        }
    }

    #[test]
    fn percent_encode_keeps_unreserved() {
        assert_eq!(percent_encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    }

    #[test]
    fn percent_encode_escapes_the_rest() {
        assert_eq!(percent_encode("a b\nc"), "a%20b%0Ac");
        assert_eq!(percent_encode("50%"), "50%25");
        assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn percent_encode_handles_multibyte_utf8() {
        // Each UTF-8 byte is escaped individually.
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn checklist_marks_completion() {
        let tasks = vec![task("Done thing", 100), task("Half thing", 50)];
        let list = task_checklist(&tasks);
        assert_eq!(list, "[x] Done thing\n[ ] Half thing");
    }

    #[test]
    fn url_carries_title_dates_and_details() {
        let tasks = vec![task("Outline", 100), task("Draft", 0)];
        let url = focus_session_url(
            "HSK 1",
            "2024-01-05".parse().unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            &tasks,
        );

        assert!(url.starts_with("https://www.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("text=HSK%201%20Focus%20Session"));
        assert!(url.contains("dates=20240105T140000/20240105T190000"));
        assert!(url.contains("%5Bx%5D%20Outline"));
        assert!(url.contains("%5B%20%5D%20Draft"));
    }

    #[test]
    fn url_for_an_empty_day_still_forms() {
        let url = focus_session_url(
            "Empty",
            "2024-01-05".parse().unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            &[],
        );
        assert!(url.contains("dates=20240105T090000/20240105T103000"));
    }
}
