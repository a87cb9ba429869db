mod common;

use common::{item, test_context, MockScheduleService};
use study_planner::commands::wizard::Wizard;
use study_planner::components::planner::forms::{stored_commitments, stored_preferences, stored_tasks};
use study_planner::components::planner::{Page, TimeSlot};
use study_planner::utils::time::{format_date, today_in};
use tokio::io::BufReader;

#[tokio::test]
async fn test_walks_every_page_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let today = format_date(today_in(chrono_tz::UTC));
    let service = MockScheduleService::returning(vec![
        item(
            "Fixed Commitment",
            "Lecture",
            &format!("{} 09:00", today),
            &format!("{} 10:30", today),
        ),
        item(
            "Task",
            "Essay",
            &format!("{} 13:00", today),
            &format!("{} 14:30", today),
        ),
    ]);
    let ctx = test_context(service.clone(), dir.path());

    let script = "\
Lecture
2026-10-20T09:00
2026-10-20T10:30

Essay
90
2026-11-01
1
Broken

2026-11-01
1

morning, brunch
y
45
y
";

    let mut wizard = Wizard::new(&ctx, BufReader::new(script.as_bytes()), Vec::new());
    wizard.run().await.unwrap();
    let printed = String::from_utf8(wizard.into_output()).unwrap();

    // Pages appear in order
    let commitments_at = printed.find("== Fixed commitments ==").unwrap();
    let tasks_at = printed.find("== Task details ==").unwrap();
    let preferences_at = printed.find("== Preferences ==").unwrap();
    let output_at = printed.find("== Your schedule ==").unwrap();
    assert!(commitments_at < tasks_at && tasks_at < preferences_at && preferences_at < output_at);

    // The incomplete task was refused with the alert, the walk carried on
    assert!(printed.contains("Please fill in all fields."));
    assert!(printed.contains("Unknown time of day \"brunch\" ignored."));
    assert!(printed.contains("[fixed] Lecture  09:00 - 10:30"));
    assert!(printed.contains("[task] Essay  13:00 - 14:30"));
    assert_eq!(printed.matches("No items").count(), 29);

    let commitments = stored_commitments(&ctx.storage).await.unwrap();
    assert_eq!(commitments.len(), 1);
    let tasks = stored_tasks(&ctx.storage).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].subject, "Essay");

    let prefs = stored_preferences(&ctx.storage).await.unwrap().unwrap();
    assert_eq!(
        prefs.preferred_times.into_iter().collect::<Vec<_>>(),
        vec![TimeSlot::Morning]
    );
    assert!(prefs.prefer_breaks);
    assert_eq!(prefs.attention_span, 45);

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].preferences.attention_span, 45);

    let csv = std::fs::read_to_string(dir.path().join("study_schedule.csv")).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.starts_with("Type,Subject,Start,End\n"));
}

#[tokio::test]
async fn test_end_of_input_stops_quietly() {
    let dir = tempfile::tempdir().unwrap();
    let service = MockScheduleService::returning(Vec::new());
    let ctx = test_context(service.clone(), dir.path());

    let script = "Lecture\n2026-10-20T09:00\n";
    let mut wizard = Wizard::new(&ctx, BufReader::new(script.as_bytes()), Vec::new());
    wizard.run().await.unwrap();

    assert!(stored_commitments(&ctx.storage).await.unwrap().is_empty());
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn test_backend_failure_is_an_alert() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = test_context(MockScheduleService::failing(), dir.path());

    // Skip straight through to the output page
    let script = "\n\n\n\n\n";
    let mut wizard = Wizard::new(&ctx, BufReader::new(script.as_bytes()), Vec::new());
    wizard.run().await.unwrap();
    let printed = String::from_utf8(wizard.into_output()).unwrap();

    assert!(printed.contains("Error loading schedule. Make sure the backend is running."));
    assert!(!printed.contains("Export the schedule as CSV?"));
    assert!(!dir.path().join("study_schedule.csv").exists());
}

#[tokio::test]
async fn test_starts_on_the_page_named_by_a_path() {
    let dir = tempfile::tempdir().unwrap();
    let service = MockScheduleService::returning(Vec::new());
    let ctx = test_context(service.clone(), dir.path());

    let script = "night\nn\n\nn\n";
    let mut wizard = Wizard::new(&ctx, BufReader::new(script.as_bytes()), Vec::new());
    wizard.run_from(Page::from_path("/planner/preferences.html")).await.unwrap();
    let printed = String::from_utf8(wizard.into_output()).unwrap();

    assert!(!printed.contains("== Fixed commitments =="));
    assert!(!printed.contains("== Task details =="));
    assert!(printed.contains("== Preferences =="));
    assert_eq!(printed.matches("No items").count(), 30);

    let prefs = stored_preferences(&ctx.storage).await.unwrap().unwrap();
    assert_eq!(
        prefs.preferred_times.into_iter().collect::<Vec<_>>(),
        vec![TimeSlot::Night]
    );
    assert_eq!(service.requests().len(), 1);
    assert!(!dir.path().join("study_schedule.csv").exists());
}
