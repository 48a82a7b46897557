use crate::calendar::{
    days_in_month, month_title, CalendarPicker, PickerState, WEEKDAY_HEADINGS,
};
use crate::config::Config;
use crate::form::{FieldValue, FormField, TaskForm};
use crate::model::{Status, Task, TaskStore};
use crate::view::{self, TaskList, TaskViews};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Alignment, Color, Modifier, Rect, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap,
};
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use std::time::Duration;

pub fn run(config: &Config, today: NaiveDate) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config, today);
    let result = app.event_loop(&mut terminal);
    teardown_terminal(&mut terminal)?;
    if !app.store.is_empty() {
        log::info!("discarding {} in-memory task(s)", app.store.len());
    }
    result
}

struct App {
    store: TaskStore,
    form: TaskForm,
    tab: Tab,
    mode: Mode,
    status: String,
    picker_enabled: bool,
    today: NaiveDate,
    active_idx: usize,
    completed_idx: usize,
}

enum Mode {
    Normal,
    Calendar(CalendarDialog),
    Notice { title: String, message: String },
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Tab {
    Create,
    Active,
    Completed,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Create, Tab::Active, Tab::Completed];

    fn label(&self) -> &'static str {
        match self {
            Tab::Create => "Create",
            Tab::Active => TaskList::Active.label(),
            Tab::Completed => TaskList::Completed.label(),
        }
    }

    fn index(&self) -> usize {
        match self {
            Tab::Create => 0,
            Tab::Active => 1,
            Tab::Completed => 2,
        }
    }

    fn next(self) -> Self {
        match self {
            Tab::Create => Tab::Active,
            Tab::Active => Tab::Completed,
            Tab::Completed => Tab::Create,
        }
    }

    fn prev(self) -> Self {
        match self {
            Tab::Create => Tab::Completed,
            Tab::Active => Tab::Create,
            Tab::Completed => Tab::Active,
        }
    }

    fn list(&self) -> Option<TaskList> {
        match self {
            Tab::Create => None,
            Tab::Active => Some(TaskList::Active),
            Tab::Completed => Some(TaskList::Completed),
        }
    }
}

/// Picker plus the highlighted day the keyboard moves around.
struct CalendarDialog {
    picker: CalendarPicker,
    cursor: u32,
}

impl CalendarDialog {
    fn new(today: NaiveDate) -> Self {
        CalendarDialog {
            picker: CalendarPicker::new(today),
            cursor: today.day(),
        }
    }

    fn days_shown(&self) -> u32 {
        self.picker
            .displayed()
            .map(|(year, month)| days_in_month(year, month))
            .unwrap_or(0)
    }

    fn move_cursor(&mut self, delta: i64) {
        let target = self.cursor as i64 + delta;
        if target >= 1 && target <= self.days_shown() as i64 {
            self.cursor = target as u32;
        }
    }

    fn prev_month(&mut self) {
        self.picker.prev_month();
        self.clamp_cursor();
    }

    fn next_month(&mut self) {
        self.picker.next_month();
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.clamp(1, self.days_shown().max(1));
    }
}

impl App {
    fn new(config: &Config, today: NaiveDate) -> Self {
        App {
            store: TaskStore::new(),
            form: TaskForm::new(config.form_options()),
            tab: Tab::Create,
            mode: Mode::Normal,
            status: "Ready. Tasks live in memory until you quit.".into(),
            picker_enabled: config.date_picker,
            today,
            active_idx: 0,
            completed_idx: 0,
        }
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;
            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Calendar(_) => {
                self.handle_calendar_key(key);
                false
            }
            Mode::Notice { .. } => {
                self.handle_notice_key(key);
                false
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(1) => {
                self.set_tab(Tab::Create);
                return false;
            }
            KeyCode::F(2) => {
                self.set_tab(Tab::Active);
                return false;
            }
            KeyCode::F(3) => {
                self.set_tab(Tab::Completed);
                return false;
            }
            KeyCode::Right if control => {
                self.set_tab(self.tab.next());
                return false;
            }
            KeyCode::Left if control => {
                self.set_tab(self.tab.prev());
                return false;
            }
            _ => {}
        }

        match self.tab {
            Tab::Create => {
                self.handle_form_key(key);
                false
            }
            Tab::Active | Tab::Completed => self.handle_list_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('1') => self.set_tab(Tab::Create),
            KeyCode::Char('2') => self.set_tab(Tab::Active),
            KeyCode::Char('3') => self.set_tab(Tab::Completed),
            KeyCode::Tab => self.set_tab(self.tab.next()),
            KeyCode::BackTab => self.set_tab(self.tab.prev()),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Home => self.move_selection(isize::MIN),
            KeyCode::End => self.move_selection(isize::MAX),
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.set_tab(Tab::Active),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Char('o') if control => self.open_calendar(),
            _ => {
                if self.form.field == FormField::Status {
                    match key.code {
                        KeyCode::Left => self.form.prev_status(),
                        KeyCode::Right | KeyCode::Char(' ') => self.form.next_status(),
                        _ => {}
                    }
                } else if let Some(field) = self.form.active_text_mut() {
                    edit_text(field, key);
                }
            }
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        let mut mode = std::mem::replace(&mut self.mode, Mode::Normal);
        let mut keep_open = false;
        if let Mode::Calendar(dialog) = &mut mode {
            match key.code {
                KeyCode::Esc => {
                    dialog.picker.close();
                    log::debug!("calendar canceled");
                    self.status = "Date selection canceled".into();
                }
                KeyCode::PageUp | KeyCode::Char('<') | KeyCode::Char('p') => dialog.prev_month(),
                KeyCode::PageDown | KeyCode::Char('>') | KeyCode::Char('n') => {
                    dialog.next_month()
                }
                KeyCode::Left | KeyCode::Char('h') => dialog.move_cursor(-1),
                KeyCode::Right | KeyCode::Char('l') => dialog.move_cursor(1),
                KeyCode::Up | KeyCode::Char('k') => dialog.move_cursor(-7),
                KeyCode::Down | KeyCode::Char('j') => dialog.move_cursor(7),
                KeyCode::Enter | KeyCode::Char(' ') => match dialog.picker.pick(dialog.cursor) {
                    Ok(date) => {
                        log::info!("picked due date {}", date);
                        self.form.set_due_date(&date);
                        self.status = format!("Due date set to {}", date);
                    }
                    Err(err) => self.status = format!("Could not pick date: {}", err),
                },
                _ => {}
            }
            keep_open = !dialog.picker.is_closed();
        }
        if keep_open {
            self.mode = mode;
        }
    }

    fn handle_notice_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.mode = Mode::Normal;
        }
    }

    fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            log::debug!("switching to {:?} tab", tab);
            self.tab = tab;
            self.status = format!("Switched to {} tab", tab.label());
        }
        self.clamp_selection();
    }

    fn open_calendar(&mut self) {
        if !self.picker_enabled {
            self.status = "Date picker is disabled".into();
            return;
        }
        log::debug!("opening calendar at {}", self.today);
        self.mode = Mode::Calendar(CalendarDialog::new(self.today));
        self.status = "Pick a due date".into();
    }

    fn submit_form(&mut self) {
        match self.form.submit(&mut self.store) {
            Ok(task) => {
                log::info!("added task {} ({})", task.id, task.status);
                let list = if task.status.is_active() {
                    TaskList::Active
                } else {
                    TaskList::Completed
                };
                self.status = format!("Added task {} to {}", task.id, list.label());
                self.clamp_selection();
            }
            Err(err) => {
                log::warn!("rejected task: {}", err);
                self.mode = Mode::Notice {
                    title: "Cannot add task".into(),
                    message: err.to_string(),
                };
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let list = match self.tab.list() {
            Some(list) => list,
            None => return,
        };
        let len = view::partition(self.store.all()).list(list).len();
        let idx = match list {
            TaskList::Active => &mut self.active_idx,
            TaskList::Completed => &mut self.completed_idx,
        };
        if len == 0 {
            *idx = 0;
            return;
        }
        let max = (len - 1) as isize;
        *idx = (*idx as isize).saturating_add(delta).clamp(0, max) as usize;
    }

    fn clamp_selection(&mut self) {
        let views = view::partition(self.store.all());
        let (active_len, completed_len) = (views.active.len(), views.completed.len());
        self.active_idx = self.active_idx.min(active_len.saturating_sub(1));
        self.completed_idx = self.completed_idx.min(completed_len.saturating_sub(1));
    }

    fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(4),
            ])
            .split(f.size());

        let views = view::partition(self.store.all());
        self.draw_header(f, layout[0], &views);
        match self.tab {
            Tab::Create => self.draw_form(f, layout[1]),
            Tab::Active => self.draw_task_table(
                f,
                layout[1],
                TaskList::Active,
                views.list(TaskList::Active),
                self.active_idx,
            ),
            Tab::Completed => self.draw_task_table(
                f,
                layout[1],
                TaskList::Completed,
                views.list(TaskList::Completed),
                self.completed_idx,
            ),
        }
        self.draw_footer(f, layout[2]);

        match &self.mode {
            Mode::Calendar(dialog) => self.draw_calendar(f, dialog),
            Mode::Notice { title, message } => self.draw_notice(f, title, message),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, f: &mut ratatui::Frame<'_>, area: Rect, views: &TaskViews<'_>) {
        let titles: Vec<Line<'static>> = Tab::ALL
            .iter()
            .map(|tab| {
                let text = match tab {
                    Tab::Create => format!("F1 {}", tab.label()),
                    Tab::Active => format!("F2 {} ({})", tab.label(), views.active.len()),
                    Tab::Completed => {
                        format!("F3 {} ({})", tab.label(), views.completed.len())
                    }
                };
                Line::from(text)
            })
            .collect();

        let block = Block::default()
            .title(Span::styled(
                "tasktabs",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider(Span::raw("  •  "));
        f.render_widget(tabs, area);
    }

    fn draw_form(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let form = &self.form;
        let due_label = if form.options().validate_due_dates {
            "Due date (YYYY-MM-DD)"
        } else {
            "Due date"
        };
        let mut lines = vec![
            field_line(
                "Description",
                &form.description,
                form.field == FormField::Description,
            ),
            Line::from(""),
            field_line(due_label, &form.due_date, form.field == FormField::DueDate),
            Line::from(""),
            status_line(form.status, form.field == FormField::Status),
            Line::from(""),
        ];
        let mut hint = String::from("Enter to add • Tab/Shift-Tab to move • ←/→ change status");
        if self.picker_enabled {
            hint.push_str(" • Ctrl+O calendar");
        }
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::Gray),
        )));

        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(Span::styled(
                        "New Task",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(panel, area);
    }

    fn draw_task_table(
        &self,
        f: &mut ratatui::Frame<'_>,
        area: Rect,
        list: TaskList,
        tasks: &[&Task],
        selected: usize,
    ) {
        let block = Block::default()
            .title(Span::styled(
                format!("{} Tasks ({})", list.label(), tasks.len()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if tasks.is_empty() {
            let msg = Paragraph::new("No tasks")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(msg, area);
            return;
        }

        let header = Row::new(vec!["ID", "Description", "Due date", "Status"])
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);
        let rows: Vec<Row<'static>> = tasks.iter().map(|&task| task_row(task)).collect();
        let widths = [
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(13),
        ];
        let mut state = TableState::default();
        state.select(Some(selected.min(tasks.len() - 1)));

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::LightCyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(area);

        let help_bar = Paragraph::new(self.footer_help_line())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(help_bar, rows[0]);

        let status = Paragraph::new(self.status.clone())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(status, rows[1]);
    }

    fn footer_help_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("F1-F3", Style::default().fg(Color::LightCyan)),
            Span::raw(" tabs  "),
            Span::styled("Ctrl+←→", Style::default().fg(Color::LightCyan)),
            Span::raw(" cycle  "),
        ];
        match self.tab {
            Tab::Create => {
                spans.extend([
                    Span::styled("Enter", Style::default().fg(Color::LightGreen)),
                    Span::raw(" add  "),
                ]);
                if self.picker_enabled {
                    spans.extend([
                        Span::styled("Ctrl+O", Style::default().fg(Color::LightYellow)),
                        Span::raw(" calendar  "),
                    ]);
                }
                spans.extend([
                    Span::styled("Esc", Style::default().fg(Color::LightMagenta)),
                    Span::raw(" to lists  "),
                    Span::styled("Ctrl+C", Style::default().fg(Color::LightRed)),
                    Span::raw(" quit"),
                ]);
            }
            Tab::Active | Tab::Completed => spans.extend([
                Span::styled("↑↓ / j k", Style::default().fg(Color::LightCyan)),
                Span::raw(" browse  "),
                Span::styled("1 2 3", Style::default().fg(Color::LightCyan)),
                Span::raw(" tabs  "),
                Span::styled("q", Style::default().fg(Color::LightRed)),
                Span::raw(" quit"),
            ]),
        }
        Line::from(spans)
    }

    fn draw_calendar(&self, f: &mut ratatui::Frame<'_>, dialog: &CalendarDialog) {
        let (year, month) = match dialog.picker.state() {
            PickerState::Displaying { year, month } => (year, month),
            PickerState::Closed => return,
        };
        let area = centered_rect(50, 60, f.size());
        let mut lines = vec![
            Line::from(Span::styled(
                format!("<  {}  >", month_title(year, month)),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        let header_spans: Vec<Span<'static>> = WEEKDAY_HEADINGS
            .iter()
            .map(|h| Span::styled(format!("{:^4}", h), Style::default().fg(Color::Gray)))
            .collect();
        lines.push(Line::from(header_spans));

        for week in dialog.picker.weeks() {
            let spans: Vec<Span<'static>> = week
                .iter()
                .map(|&day| {
                    if day == 0 {
                        return Span::raw("    ");
                    }
                    let is_today = NaiveDate::from_ymd_opt(year, month, day) == Some(self.today);
                    let mut style = Style::default().fg(if is_today {
                        Color::LightYellow
                    } else {
                        Color::White
                    });
                    if day == dialog.cursor {
                        style = style
                            .bg(Color::Cyan)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD);
                    }
                    Span::styled(format!("{:^4}", day), style)
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "←↑↓→ day • PgUp/PgDn month • Enter pick • Esc cancel",
            Style::default().fg(Color::Gray),
        )));

        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled(
                    "Pick a Due Date",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(Clear, area);
        f.render_widget(widget, area);
    }

    fn draw_notice(&self, f: &mut ratatui::Frame<'_>, title: &str, message: &str) {
        let area = centered_rect(50, 30, f.size());
        let body = vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press Enter or Esc to go back to the form"),
        ];
        let dialog = Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(
                        title.to_string(),
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::LightRed)),
            );
        f.render_widget(Clear, area);
        f.render_widget(dialog, area);
    }
}

fn edit_text(field: &mut FieldValue, key: KeyEvent) {
    match key.code {
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Char(c) => {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                field.insert_char(c);
            }
        }
        _ => {}
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Open => Color::LightGreen,
        Status::InProgress => Color::LightBlue,
        Status::Done => Color::DarkGray,
    }
}

fn task_row(task: &Task) -> Row<'static> {
    let (id, description, due_date, status) = view::row(task);
    let due = if due_date.is_empty() { "-" } else { due_date };
    Row::new(vec![
        Cell::from(id.to_string()).style(Style::default().fg(Color::DarkGray)),
        Cell::from(description.to_string()).style(Style::default().fg(Color::White)),
        Cell::from(due.to_string()).style(Style::default().fg(Color::LightYellow)),
        Cell::from(status).style(Style::default().fg(status_color(task.status))),
    ])
}

fn field_line(label: &str, field: &FieldValue, active: bool) -> Line<'static> {
    let label_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD | Modifier::DIM);
    let value_style = Style::default().fg(if active { Color::Cyan } else { Color::White });
    let text = if active {
        field.with_caret()
    } else {
        field.value.clone()
    };
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(text, value_style),
    ])
}

fn status_line(current: Status, active: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Status: ",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD | Modifier::DIM),
    )];
    for status in Status::ALL {
        let style = if status == current {
            Style::default()
                .fg(if active { Color::Black } else { Color::White })
                .bg(if active { Color::Cyan } else { Color::DarkGray })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", status.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
