use crossterm::event::KeyCode;
use ratatui::widgets::TableState;
use crate::config::Config;
use crate::models::TaskId;
use crate::store::TaskStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Tasks,
    History,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Tasks, Page::History, Page::About];

    pub fn title(self) -> &'static str {
        match self {
            Page::Tasks => "To-Do List",
            Page::History => "History",
            Page::About => "About",
        }
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    fn previous(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adding,
    ConfirmClear,
}

pub struct App {
    pub store: TaskStore,
    pub config: Config,
    pub page: Page,
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Selection in the task list.
    pub state: TableState,
    /// Selection in the history list.
    pub history_state: TableState,
    /// Acknowledgement of the last accepted action.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TaskStore, config: Config) -> App {
        let mut app = App {
            store,
            config,
            page: Page::Tasks,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            state: TableState::default(),
            history_state: TableState::default(),
            status: None,
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// Selects the next row on the current page, wrapping at the end.
    pub fn next(&mut self) {
        let (len, state) = match self.page {
            Page::Tasks => (self.store.active().len(), &mut self.state),
            Page::History => (self.store.completed().len(), &mut self.history_state),
            Page::About => return,
        };
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        state.select(Some(i));
    }

    /// Selects the previous row on the current page, wrapping at the start.
    pub fn previous(&mut self) {
        let (len, state) = match self.page {
            Page::Tasks => (self.store.active().len(), &mut self.state),
            Page::History => (self.store.completed().len(), &mut self.history_state),
            Page::About => return,
        };
        if len == 0 { return; }
        let i = match state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.previous();
    }

    pub fn goto(&mut self, page: Page) {
        self.page = page;
    }

    /// Id of the highlighted task, resolved before any mutation so a
    /// shifted list can never hit the wrong row.
    pub fn selected_id(&self) -> Option<TaskId> {
        self.state.selected().and_then(|i| self.store.active().get(i)).map(|t| t.id)
    }

    /// Marks the highlighted task as complete.
    pub fn complete_selected(&mut self) {
        if self.page != Page::Tasks { return; }
        let Some(id) = self.selected_id() else { return };
        if let Some(t) = self.store.complete_by_id(id) {
            self.status = Some(format!("Task \"{}\" completed!", t.description));
        }
        self.sync_selection();
    }

    /// Removes the highlighted task without recording it as done.
    pub fn delete_selected(&mut self) {
        if self.page != Page::Tasks { return; }
        let Some(id) = self.selected_id() else { return };
        if let Some(t) = self.store.remove_by_id(id) {
            self.status = Some(format!("Task \"{}\" removed!", t.description));
        }
        self.sync_selection();
    }

    /// Opens the new-task prompt.
    pub fn start_add(&mut self) {
        if self.page != Page::Tasks { return; }
        self.input_mode = InputMode::Adding;
        self.input_buffer.clear();
    }

    /// Adds the typed task. Blank input just closes the prompt.
    pub fn submit_add(&mut self) {
        self.status = None;
        if let Some(t) = self.store.add_task(&self.input_buffer) {
            self.status = Some(format!("Task \"{}\" added!", t.description));
        }
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.sync_selection();
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    /// Clears the task list, asking first when configured to.
    pub fn request_clear(&mut self) {
        if self.page != Page::Tasks { return; }
        if self.config.confirm_clear {
            self.input_mode = InputMode::ConfirmClear;
        } else {
            self.clear_all();
        }
    }

    pub fn confirm_clear(&mut self, yes: bool) {
        self.input_mode = InputMode::Normal;
        if yes {
            self.clear_all();
        }
    }

    fn clear_all(&mut self) {
        self.store.clear_active();
        self.status = Some("All tasks cleared!".to_string());
        self.sync_selection();
    }

    /// Keeps both selections inside their lists after a mutation.
    pub fn sync_selection(&mut self) {
        clamp(&mut self.state, self.store.active().len());
        clamp(&mut self.history_state, self.store.completed().len());
    }

    /// Applies one key press.
    pub fn on_key(&mut self, code: KeyCode) {
        match self.input_mode {
            InputMode::Normal => {
                self.status = None;
                self.on_normal_key(code);
            }
            InputMode::Adding => match code {
                KeyCode::Enter => self.submit_add(),
                KeyCode::Esc => self.cancel_input(),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                _ => {}
            },
            InputMode::ConfirmClear => match code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_clear(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.confirm_clear(false),
                _ => {}
            },
        }
    }

    /// Keys on the page itself. Acknowledgements are already cleared.
    fn on_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.next_page(),
            KeyCode::BackTab => self.previous_page(),
            KeyCode::Char('1') => self.goto(Page::Tasks),
            KeyCode::Char('2') => self.goto(Page::History),
            KeyCode::Char('3') => self.goto(Page::About),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char(' ') | KeyCode::Char('c') => self.complete_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('a') => self.start_add(),
            KeyCode::Char('C') => self.request_clear(),
            _ => {}
        }
    }
}

fn clamp(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
    } else if let Some(i) = state.selected() {
        if i >= len {
            state.select(Some(len - 1));
        }
    } else {
        state.select(Some(0));
    }
}
