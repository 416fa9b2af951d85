//! Display order of tasks inside one day bucket.

use crate::model::task::Task;
use std::cmp::Ordering;

/// Total order: incomplete first, then higher priority, then newer
/// `created_at`, then ascending `id`.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_bucket(tasks: &mut [Task]) {
    tasks.sort_by(compare_tasks);
}

#[cfg(test)]
mod tests {
    use super::sort_bucket;
    use crate::model::task::{Task, TaskId};
    use chrono::{Duration, TimeZone, Utc};

    fn task(id: u32, name: &str, minutes: i64, completed: bool) -> Task {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let mut task = Task::with_id(
            TaskId::parse(&format!("task-{id:04}")).unwrap(),
            "2024-01-01",
            name,
            "",
            base + Duration::minutes(minutes),
        )
        .unwrap();
        task.completed = completed;
        task
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.name.as_str()).collect()
    }

    #[test]
    fn incomplete_then_priority_then_newest() {
        let mut tasks = vec![
            task(1, "old plain", 0, false),
            task(2, "done critical", 5, true),
            task(3, "new plain", 10, false),
            task(4, "urgent thing", 1, false),
            task(5, "done plain", 20, true),
        ];
        sort_bucket(&mut tasks);
        assert_eq!(
            names(&tasks),
            vec![
                "urgent thing",
                "new plain",
                "old plain",
                "done critical",
                "done plain"
            ]
        );
    }

    #[test]
    fn identical_keys_fall_back_to_id() {
        let mut tasks = vec![task(9, "b", 0, false), task(2, "a", 0, false)];
        sort_bucket(&mut tasks);
        assert_eq!(names(&tasks), vec!["a", "b"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut tasks = vec![
            task(1, "call bob", 3, false),
            task(2, "exam prep", 1, false),
            task(3, "read later", 2, true),
            task(4, "plain", 3, false),
        ];
        sort_bucket(&mut tasks);
        let once = tasks.clone();
        sort_bucket(&mut tasks);
        assert_eq!(tasks, once);
    }
}
