use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use crate::config::{Config, Rgb};
use crate::models::Task;
use crate::progress::Progress;
use crate::store::TaskStore;

const BAR_WIDTH: usize = 30;

/// Converts a 1-based row number as shown by `list` into a store index.
///
/// Zero and negative numbers have no row and map to `None`.
pub fn position_to_index(position: i64) -> Option<usize> {
    if position < 1 {
        return None;
    }
    usize::try_from(position - 1).ok()
}

/// Adds a task, acknowledging it unless `silent`.
pub fn cmd_add(store: &mut TaskStore, description: &str, silent: bool) {
    match store.add_task(description) {
        Some(t) => {
            if !silent { println!("Task \"{}\" added!", t.description); }
        }
        None => {
            if !silent { println!("Nothing to add."); }
        }
    }
}

/// Completes the task shown at `position` in the list.
pub fn cmd_complete(store: &mut TaskStore, position: i64, silent: bool) {
    let outcome = match position_to_index(position) {
        Some(i) => store.complete_task(i),
        None => None,
    };
    match outcome {
        Some(t) => {
            if !silent { println!("Task \"{}\" completed!", t.description); }
        }
        None => {
            if !silent { println!("No task at position {}.", position); }
        }
    }
}

/// Removes the task shown at `position` in the list.
pub fn cmd_remove(store: &mut TaskStore, position: i64, silent: bool) {
    let outcome = match position_to_index(position) {
        Some(i) => store.remove_task(i),
        None => None,
    };
    match outcome {
        Some(t) => {
            if !silent { println!("Task \"{}\" removed!", t.description); }
        }
        None => {
            if !silent { println!("No task at position {}.", position); }
        }
    }
}

/// Empties the task list. Completed history is kept.
pub fn cmd_clear(store: &mut TaskStore, silent: bool) {
    store.clear_active();
    if !silent { println!("All tasks cleared!"); }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles.iter().map(|t| Cell::new(t).add_attribute(Attribute::Bold)).collect()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Table of active tasks, or `None` when there are none.
pub fn list_table(tasks: &[Task]) -> Option<Table> {
    if tasks.is_empty() {
        return None;
    }
    let mut table = new_table();
    table.set_header(header(&["#", "Task", "Added"]));
    for (i, t) in tasks.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&t.description),
            Cell::new(t.added_label()),
        ]);
    }
    Some(table)
}

/// Table of completed tasks, or `None` when nothing is completed yet.
pub fn history_table(tasks: &[Task]) -> Option<Table> {
    if tasks.is_empty() {
        return None;
    }
    let mut table = new_table();
    table.set_header(header(&["#", "Task", "Added", "Completed"]));
    for (i, t) in tasks.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&t.description),
            Cell::new(t.added_label()),
            Cell::new(t.completed_label()).fg(Color::Green),
        ]);
    }
    Some(table)
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width)
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}

/// Horizontal bar chart of completed versus remaining tasks.
pub fn chart_table(progress: &Progress, config: &Config) -> Table {
    let max = progress.completed.max(progress.remaining);
    let colors = [config.completed_color, config.remaining_color];
    let mut table = new_table();
    table.set_header(header(&["Task Progress", "Number of Tasks", ""]));
    for ((label, count), color) in progress.bars().into_iter().zip(colors) {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(bar(count, max)).fg(to_color(color)),
        ]);
    }
    table
}

pub fn cmd_list(store: &TaskStore) {
    match list_table(store.active()) {
        Some(table) => println!("{table}"),
        None => println!("No tasks yet."),
    }
}

pub fn cmd_history(store: &TaskStore) {
    match history_table(store.completed()) {
        Some(table) => println!("{table}"),
        None => println!("No tasks have been completed yet."),
    }
}

pub fn cmd_chart(store: &TaskStore, config: &Config) {
    let progress = store.progress();
    println!("{}", chart_table(&progress, config));
    println!("{} of {} tasks done ({}%)", progress.completed, progress.total(), progress.percent_complete());
}

#[derive(Serialize)]
struct Snapshot<'a> {
    active: &'a [Task],
    completed: &'a [Task],
    progress: Progress,
}

/// The session state as pretty JSON. Nothing is written to disk.
pub fn snapshot_json(store: &TaskStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Snapshot {
        active: store.active(),
        completed: store.completed(),
        progress: store.progress(),
    })
}

pub fn cmd_export(store: &TaskStore) {
    match snapshot_json(store) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to export tasks: {}", e),
    }
}

pub fn cmd_about() {
    for line in crate::about::lines() {
        println!("{line}");
    }
}
