//! Command execution against an opened `TaskStore`.

use crate::cli::Command;
use daylist_core::{
    explain, is_date_key, today_key, PersistenceAdapter, PrioritySignal, Task, TaskId, TaskStore,
    TaskUpdate,
};
use anyhow::{bail, Context, Result};

pub type CommandResult = Result<String>;

/// Runs one command and returns what should be printed on success.
pub fn run<P: PersistenceAdapter>(store: &mut TaskStore<P>, command: Command) -> CommandResult {
    match command {
        Command::Add {
            name,
            description,
            date,
        } => {
            let date = resolve_date(date)?;
            let task = store.add_task(date, &name, &description)?;
            Ok(format!(
                "added {} [{}] {}",
                task.id,
                task.priority.label(),
                task.name
            ))
        }
        Command::List { date } => {
            let date = resolve_date(date)?;
            Ok(render_day(&date, store.list_for_date(&date), store))
        }
        Command::Edit {
            id,
            name,
            description,
        } => {
            let id = parse_id(&id)?;
            let update = TaskUpdate { name, description };
            if update.is_empty() {
                bail!("nothing to edit; pass --name and/or --description");
            }
            store.update_task(&id, &update)?;
            Ok(describe(store, &id, "updated"))
        }
        Command::Done { id } => {
            let id = parse_id(&id)?;
            store.toggle_complete(&id)?;
            Ok(describe(store, &id, "toggled"))
        }
        Command::Delete { id } => {
            let id = parse_id(&id)?;
            store.delete_task(&id)?;
            Ok(format!("deleted {id}"))
        }
        Command::Dates => {
            let dates = store.list_available_dates();
            if dates.is_empty() {
                return Ok("no history yet".to_string());
            }
            let lines: Vec<String> = dates
                .iter()
                .map(|date| {
                    let summary = store.summary_for_date(date);
                    format!(
                        "{date}  {} pending, {} done",
                        summary.pending, summary.completed
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Score { name, description } => {
            let report = explain(&name, &description);
            let mut out = format!("priority: {}", report.priority);
            for signal in report.signals {
                out.push_str("\n  - ");
                out.push_str(&signal_label(signal));
            }
            Ok(out)
        }
    }
}

fn resolve_date(date: Option<String>) -> Result<String> {
    match date {
        None => Ok(today_key()),
        Some(date) if is_date_key(&date) => Ok(date),
        Some(date) => bail!("invalid date `{date}`; expected YYYY-MM-DD"),
    }
}

fn parse_id(raw: &str) -> Result<TaskId> {
    TaskId::parse(raw.trim()).with_context(|| format!("invalid task id `{raw}`"))
}

fn describe<P: PersistenceAdapter>(store: &TaskStore<P>, id: &TaskId, verb: &str) -> String {
    match store.get_task(id) {
        Some(task) => format!("{verb} {}", render_task(task)),
        None => format!("{verb} {id}"),
    }
}

fn render_day<P: PersistenceAdapter>(date: &str, tasks: &[Task], store: &TaskStore<P>) -> String {
    if tasks.is_empty() {
        return format!("no tasks for {date}");
    }
    let summary = store.summary_for_date(date);
    let mut out = format!(
        "{date}: {} pending, {} done",
        summary.pending, summary.completed
    );
    for task in tasks {
        out.push('\n');
        out.push_str(&render_task(task));
    }
    out
}

fn render_task(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!(
        "[{mark}] {:<8} {}  ({})",
        task.priority.label(),
        task.name,
        task.id
    );
    if !task.description.is_empty() {
        line.push_str("\n             ");
        line.push_str(&task.description);
    }
    line
}

fn signal_label(signal: PrioritySignal) -> String {
    match signal {
        PrioritySignal::Keyword { phrase, priority } => {
            format!("keyword `{phrase}` -> {}", priority.label())
        }
        PrioritySignal::TimePattern(name) => format!("time pattern `{name}` -> High"),
        PrioritySignal::Exclamation => "exclamation mark -> High".to_string(),
        PrioritySignal::Emphasis => "all-caps word -> High".to_string(),
    }
}
