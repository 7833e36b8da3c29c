use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use tasktally::clock::FixedClock;
use tasktally::config::Config;
use tasktally::store::TaskStore;
use tasktally::tui::app::{App, InputMode, Page};
use tasktally::tui::ui::ui;

fn clocked_app(config: Config) -> (App, FixedClock) {
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(15, 9, 26).unwrap());
    (App::new(TaskStore::with_clock(clock.clone()), config), clock)
}

fn app_with(config: Config) -> App {
    clocked_app(config).0
}

fn app() -> App {
    app_with(Config::default())
}

fn type_task(app: &mut App, text: &str) {
    app.on_key(KeyCode::Char('a'));
    for c in text.chars() {
        app.on_key(KeyCode::Char(c));
    }
    app.on_key(KeyCode::Enter);
}

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();
    terminal.backend().buffer().content.iter().map(|c| c.symbol()).collect()
}

#[test]
fn add_via_prompt() {
    let mut app = app();
    type_task(&mut app, "buy milk");

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.store.active()[0].description, "buy milk");
    assert_eq!(app.status.as_deref(), Some("Task \"buy milk\" added!"));
    assert_eq!(app.state.selected(), Some(0));
}

#[test]
fn blank_prompt_adds_nothing() {
    let mut app = app();
    type_task(&mut app, "   ");

    assert!(app.store.active().is_empty());
    assert!(app.status.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn no_op_clears_previous_acknowledgement() {
    let mut app = app();
    type_task(&mut app, "x");
    assert!(app.status.is_some());

    type_task(&mut app, "");
    assert_eq!(app.store.active().len(), 1);
    assert!(app.status.is_none());

    app.on_key(KeyCode::Char(' '));
    assert_eq!(app.status.as_deref(), Some("Task \"x\" completed!"));
    app.on_key(KeyCode::Char(' '));
    assert!(app.store.active().is_empty());
    assert!(app.status.is_none());
}

#[test]
fn escape_cancels_prompt() {
    let mut app = app();
    app.on_key(KeyCode::Char('a'));
    app.on_key(KeyCode::Char('x'));
    app.on_key(KeyCode::Backspace);
    app.on_key(KeyCode::Char('y'));
    assert_eq!(app.input_buffer, "y");
    app.on_key(KeyCode::Esc);

    assert!(app.store.active().is_empty());
    assert!(app.input_buffer.is_empty());
}

#[test]
fn complete_and_remove_selected() {
    let mut app = app();
    for t in ["a", "b", "c"] {
        type_task(&mut app, t);
    }
    app.on_key(KeyCode::Down);
    app.on_key(KeyCode::Char(' '));
    assert_eq!(app.store.completed()[0].description, "b");
    assert_eq!(app.status.as_deref(), Some("Task \"b\" completed!"));

    app.on_key(KeyCode::Char('d'));
    assert_eq!(app.store.active().len(), 1);
    assert_eq!(app.store.active()[0].description, "a");
    assert_eq!(app.store.completed().len(), 1);
    assert_eq!(app.state.selected(), Some(0));
}

#[test]
fn selection_wraps() {
    let mut app = app();
    type_task(&mut app, "a");
    type_task(&mut app, "b");

    app.on_key(KeyCode::Up);
    assert_eq!(app.state.selected(), Some(1));
    app.on_key(KeyCode::Char('j'));
    assert_eq!(app.state.selected(), Some(0));
}

#[test]
fn actions_on_empty_list_do_nothing() {
    let mut app = app();
    app.on_key(KeyCode::Char(' '));
    app.on_key(KeyCode::Char('d'));
    app.on_key(KeyCode::Down);

    assert!(app.store.is_empty());
    assert!(app.status.is_none());
}

#[test]
fn clear_asks_first() {
    let mut app = app();
    type_task(&mut app, "a");
    type_task(&mut app, "b");
    app.on_key(KeyCode::Char('c'));

    app.on_key(KeyCode::Char('C'));
    assert_eq!(app.input_mode, InputMode::ConfirmClear);
    app.on_key(KeyCode::Char('n'));
    assert_eq!(app.store.active().len(), 1);

    app.on_key(KeyCode::Char('C'));
    app.on_key(KeyCode::Char('y'));
    assert!(app.store.active().is_empty());
    assert_eq!(app.store.completed().len(), 1);
    assert_eq!(app.status.as_deref(), Some("All tasks cleared!"));
}

#[test]
fn clear_without_confirmation() {
    let mut app = app_with(Config { confirm_clear: false, ..Config::default() });
    type_task(&mut app, "a");
    app.on_key(KeyCode::Char('C'));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.store.active().is_empty());
}

#[test]
fn pages_cycle() {
    let mut app = app();
    app.on_key(KeyCode::Tab);
    assert_eq!(app.page, Page::History);
    app.on_key(KeyCode::Tab);
    assert_eq!(app.page, Page::About);
    app.on_key(KeyCode::Tab);
    assert_eq!(app.page, Page::Tasks);
    app.on_key(KeyCode::BackTab);
    assert_eq!(app.page, Page::About);
    app.on_key(KeyCode::Char('2'));
    assert_eq!(app.page, Page::History);
}

#[test]
fn list_keys_ignored_off_the_list_page() {
    let mut app = app();
    type_task(&mut app, "a");
    app.on_key(KeyCode::Char('2'));

    app.on_key(KeyCode::Char(' '));
    app.on_key(KeyCode::Char('d'));
    app.on_key(KeyCode::Char('a'));
    app.on_key(KeyCode::Char('C'));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.store.active().len(), 1);
}

#[test]
fn quit_key() {
    let mut app = app();
    app.on_key(KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn renders_task_page() {
    let mut app = app();
    type_task(&mut app, "water plants");
    let screen = render(&mut app);

    assert!(screen.contains("water plants"));
    assert!(screen.contains("2025-03-14 15:09:26"));
    assert!(screen.contains("Task Progress"));
    assert!(screen.contains("Completed"));
    assert!(screen.contains("Remaining"));
}

#[test]
fn renders_empty_history() {
    let mut app = app();
    app.goto(Page::History);
    let screen = render(&mut app);

    assert!(screen.contains("No tasks have been completed yet."));
}

#[test]
fn renders_history_rows() {
    let (mut app, clock) = clocked_app(Config::default());
    type_task(&mut app, "file taxes");
    clock.advance(chrono::Duration::hours(1));
    app.on_key(KeyCode::Char(' '));
    app.goto(Page::History);
    let screen = render(&mut app);

    assert!(screen.contains("file taxes"));
    assert!(screen.contains("2025-03-14 15:09:26"));
    assert!(screen.contains("2025-03-14 16:09:26"));
}

#[test]
fn help_bar_drawn_once() {
    let mut app = app();
    let help = "q: Quit | a: Add";
    assert_eq!(render(&mut app).matches(help).count(), 1);

    type_task(&mut app, "x");
    let screen = render(&mut app);
    assert_eq!(screen.matches(help).count(), 1);
    assert!(screen.contains("Task \"x\" added!"));
}

#[test]
fn renders_about_and_prompts() {
    let mut app = app();
    app.goto(Page::About);
    assert!(render(&mut app).contains("About This App"));

    app.goto(Page::Tasks);
    app.on_key(KeyCode::Char('a'));
    assert!(render(&mut app).contains("Enter a new task"));
}
