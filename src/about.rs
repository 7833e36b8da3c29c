pub const TITLE: &str = "About This App";

pub const INTRO: &str = "Tasktally keeps a to-do list for the length of one session. \
Add tasks, complete or remove them, and watch the progress chart fill up. \
Nothing is written to disk: quitting discards the list.";

pub const FEATURES: &[(&str, &str)] = &[
    ("Add Tasks", "quickly add new tasks to your list."),
    ("Complete Tasks", "mark tasks as completed and see them in the history."),
    ("Remove Tasks", "drop tasks you no longer need; they do not count as done."),
    ("Clear All Tasks", "empty the task list in one go; the history stays."),
    ("Track Task Time", "see when each task was added and when it was completed."),
];

pub const HOW_TO_USE: &[&str] = &[
    "Press 'a' and type a task, then Enter to add it.",
    "Press Space on a task to mark it as completed.",
    "Press 'd' on a task to remove it.",
    "Press 'C' to clear every task from the list.",
    "Open the History page to see completed tasks with their timestamps.",
];

pub const SHELL_HOW_TO_USE: &[&str] = &[
    "Type 'add' followed by a task to add it.",
    "Type 'list' to see your tasks with their row numbers.",
    "Type 'complete <row>' to mark a task as completed.",
    "Type 'remove <row>' to remove a task.",
    "Type 'clear' to clear every task from the list.",
    "Type 'history' to see completed tasks with their timestamps.",
];

/// The about page as plain lines, for the shell.
pub fn lines() -> Vec<String> {
    let mut out = vec![TITLE.to_string(), String::new(), INTRO.to_string(), String::new(), "Features:".to_string()];
    out.extend(FEATURES.iter().map(|(name, text)| format!("  - {}: {}", name, text)));
    out.push(String::new());
    out.push("How to Use:".to_string());
    out.extend(SHELL_HOW_TO_USE.iter().enumerate().map(|(i, step)| format!("  {}. {}", i + 1, step)));
    out
}
