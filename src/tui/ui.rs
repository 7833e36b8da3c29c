use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};
use crate::about;
use crate::config::Rgb;
use super::app::{App, InputMode, Page};

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn header_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Page
            Constraint::Length(3)  // Status / help
        ].as_ref())
        .split(f.area());

    let tabs = Tabs::new(Page::ALL.iter().map(|p| p.title()))
        .select(app.page.index())
        .block(Block::default().borders(Borders::ALL).title("Tasktally"))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    match app.page {
        Page::Tasks => render_tasks(f, app, chunks[1]),
        Page::History => render_history(f, app, chunks[1]),
        Page::About => render_about(f, chunks[1]),
    }

    let help_text = match app.input_mode {
        InputMode::Normal => match app.page {
            Page::Tasks => "q: Quit | a: Add | Space: Complete | d: Remove | C: Clear All | Tab: Next Page",
            Page::History => "q: Quit | j/k: Scroll | Tab: Next Page",
            Page::About => "q: Quit | Tab: Next Page",
        },
        InputMode::Adding => "Enter: Add | Esc: Cancel",
        InputMode::ConfirmClear => "y: Clear | n: Keep",
    };
    let status_line = match &app.status {
        Some(msg) => Line::from(msg.as_str()).style(Style::default().fg(Color::Green)),
        None => Line::default(),
    };
    let status = Paragraph::new(status_line)
        .block(Block::default().borders(Borders::ALL).title_bottom(help_text));
    f.render_widget(status, chunks[2]);

    match app.input_mode {
        InputMode::Adding => {
            let area = centered_rect(60, 3, f.area());
            f.render_widget(Clear, area);
            let input = Paragraph::new(app.input_buffer.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title("Enter a new task"));
            f.render_widget(input, area);
        }
        InputMode::ConfirmClear => {
            let area = centered_rect(40, 3, f.area());
            f.render_widget(Clear, area);
            let prompt = Paragraph::new("Clear all tasks? (y/n)")
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("Clear All Tasks"));
            f.render_widget(prompt, area);
        }
        InputMode::Normal => {}
    }
}

fn render_tasks(f: &mut Frame, app: &mut App, area: Rect) {
    let quote_height = if app.config.quote.is_empty() { 0 } else { 1 };
    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(quote_height), Constraint::Min(0)].as_ref())
        .split(area);
    if quote_height > 0 {
        let quote = Paragraph::new(app.config.quote.as_str())
            .style(Style::default().add_modifier(Modifier::ITALIC));
        f.render_widget(quote, rows_area[0]);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)].as_ref())
        .split(rows_area[1]);

    let list_block = Block::default().borders(Borders::ALL).title("Your Tasks");
    if app.store.active().is_empty() {
        let empty = Paragraph::new("No tasks yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::Gray))
            .block(list_block);
        f.render_widget(empty, cols[0]);
    } else {
        let rows: Vec<Row> = app
            .store
            .active()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Row::new(vec![
                    Cell::from((i + 1).to_string()),
                    Cell::from(t.description.clone()),
                    Cell::from(t.added_label()),
                ])
            })
            .collect();
        let widths = [Constraint::Length(4), Constraint::Min(16), Constraint::Length(19)];
        let table = Table::new(rows, widths)
            .header(Row::new(vec!["#", "Task", "Added"]).style(header_style()).bottom_margin(1))
            .block(list_block)
            .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
            .highlight_symbol(">> ");
        f.render_stateful_widget(table, cols[0], &mut app.state);
    }

    let progress = app.store.progress();
    let colors = [app.config.completed_color, app.config.remaining_color];
    let bars: Vec<Bar> = progress
        .bars()
        .into_iter()
        .zip(colors)
        .map(|((label, count), color)| {
            Bar::default()
                .label(Line::from(label))
                .value(count as u64)
                .text_value(count.to_string())
                .style(Style::default().fg(to_color(color)))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Task Progress")
                .title_bottom(format!("Number of Tasks: {} ({}% done)", progress.total(), progress.percent_complete())),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(3)
        .value_style(Style::default().fg(Color::Black).add_modifier(Modifier::BOLD));
    f.render_widget(chart, cols[1]);
}

fn render_history(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Completed Tasks");
    if app.store.completed().is_empty() {
        let empty = Paragraph::new("No tasks have been completed yet.")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }
    let rows: Vec<Row> = app
        .store
        .completed()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(t.description.clone()),
                Cell::from(t.added_label()),
                Cell::from(t.completed_label()).style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    let widths = [Constraint::Length(4), Constraint::Min(16), Constraint::Length(19), Constraint::Length(19)];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["#", "Task", "Added", "Completed"]).style(header_style()).bottom_margin(1))
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");
    f.render_stateful_widget(table, area, &mut app.history_state);
}

fn render_about(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(about::INTRO),
        Line::from(""),
        Line::from("Features:").style(header_style()),
    ];
    lines.extend(about::FEATURES.iter().map(|(name, text)| Line::from(format!("  - {}: {}", name, text))));
    lines.push(Line::from(""));
    lines.push(Line::from("How to Use:").style(header_style()));
    lines.extend(about::HOW_TO_USE.iter().enumerate().map(|(i, step)| Line::from(format!("  {}. {}", i + 1, step))));

    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(about::TITLE));
    f.render_widget(text, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(r.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(r.height.saturating_sub(height) / 2),
        ].as_ref())
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ].as_ref())
        .split(popup_layout[1])[1]
}
