use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::admin::{
    MockDataset, ResourceSource, Row, RowAction, RowData, Section, SectionView,
    TabbedResourceBrowser,
};
use crate::chat::{
    ChatEvent, ChatSession, PlaceholderResponder, Responder, Scheduler, TokioScheduler,
};
use crate::config::Config;
use crate::ui::action::Action;
use crate::ui::components::theme::{
    ACCENT_PRIMARY, BORDER_DEFAULT, BORDER_FOCUSED, SIDEBAR_BG, STATUS_BAR_BG, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::components::{
    ChatView, FooterContext, GlobalFooter, Overview, ResourceTable, Sidebar, Spinner,
    TextInputState, SIDEBAR_WIDTH,
};
use crate::ui::events::{InputMode, Screen};
use crate::ui::keys::{default_keymap, KeyContext, Keymap};
use crate::ui::terminal_guard::TerminalGuard;

/// Lines moved per scroll action
const SCROLL_STEP: usize = 5;

/// Main application state
pub struct App {
    config: Config,
    keymap: Keymap,
    should_quit: bool,
    screen: Screen,
    /// Admin screen input mode
    input_mode: InputMode,
    browser: TabbedResourceBrowser,
    search_input: TextInputState,
    session: ChatSession,
    chat_input: TextInputState,
    /// Completions posted by scheduled reply tasks
    chat_rx: mpsc::UnboundedReceiver<ChatEvent>,
    /// Transcript scroll, lines up from the bottom
    chat_scroll: usize,
    spinner: Spinner,
    /// Transient message for the status bar
    status: Option<String>,
    /// Tick counter for spinner animation
    tick_count: u32,
}

impl App {
    pub fn new(config: Config) -> Self {
        let responder = Arc::new(PlaceholderResponder::new(
            config.chat.placeholder_response.clone(),
        ));
        Self::with_collaborators(
            config,
            Arc::new(MockDataset::new()),
            responder,
            Arc::new(TokioScheduler),
        )
    }

    pub fn with_collaborators(
        config: Config,
        source: Arc<dyn ResourceSource>,
        responder: Arc<dyn Responder>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        let (chat_tx, chat_rx) = mpsc::unbounded_channel();
        let browser = TabbedResourceBrowser::new(source).with_state(config.browser_state());
        let session = ChatSession::new(config.session_options(), responder, scheduler, chat_tx);

        Self {
            screen: config.default_screen,
            config,
            keymap: default_keymap(),
            should_quit: false,
            input_mode: InputMode::Normal,
            browser,
            search_input: TextInputState::new(),
            session,
            chat_input: TextInputState::new(),
            chat_rx,
            chat_scroll: 0,
            spinner: Spinner::new(),
            status: None,
            tick_count: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn browser(&self) -> &TabbedResourceBrowser {
        &self.browser
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn search_input(&self) -> &TextInputState {
        &self.search_input
    }

    pub fn chat_input(&self) -> &TextInputState {
        &self.chat_input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                // Terminal input + tick
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            if key.kind == KeyEventKind::Press {
                                self.handle_key(key);
                            }
                        }
                    }
                    self.tick();
                }

                Some(event) = self.chat_rx.recv() => {
                    self.handle_chat_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Advance animations (every 6 frames = ~100ms)
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.tick_count % 6 == 0 && self.session.is_pending() {
            self.spinner.tick();
        }
    }

    fn key_context(&self) -> KeyContext {
        match (self.screen, self.input_mode) {
            (Screen::Chat, _) => KeyContext::Chat,
            (Screen::Admin, InputMode::Searching) => KeyContext::Search,
            (Screen::Admin, InputMode::Normal) => KeyContext::Admin,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.key_context();
        if let Some(action) = self.keymap.resolve(&key, context) {
            self.dispatch(action);
        }
    }

    /// Wait for the next scheduled completion and apply it
    pub async fn process_chat_event(&mut self) -> bool {
        match self.chat_rx.recv().await {
            Some(event) => self.handle_chat_event(event),
            None => false,
        }
    }

    pub fn handle_chat_event(&mut self, event: ChatEvent) -> bool {
        let applied = self.session.handle_event(event);
        if applied {
            self.chat_scroll = 0;
        }
        applied
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(action = action.description(), screen = %self.screen, "Dispatch");
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleScreen => {
                self.screen = self.screen.toggled();
                self.input_mode = InputMode::Normal;
                self.status = None;
                tracing::debug!(screen = %self.screen, "Switched screen");
            }
            action if action.is_edit() => self.edit_active_input(&action),
            action => match self.screen {
                Screen::Admin => self.dispatch_admin(action),
                Screen::Chat => self.dispatch_chat(action),
            },
        }
    }

    fn dispatch_admin(&mut self, action: Action) {
        match action {
            Action::NextSection => self.browser.next_section(),
            Action::PrevSection => self.browser.prev_section(),
            Action::SelectSection(section) => {
                if let Err(e) = self.browser.select_section(section.id()) {
                    self.status = Some(e.to_string());
                }
            }
            Action::NextRow => self.browser.select_next_row(),
            Action::PrevRow => self.browser.select_prev_row(),
            Action::InvokeRow(row_action) => self.invoke_row(row_action),
            Action::StartSearch => {
                if self.browser.active().is_searchable() {
                    self.input_mode = InputMode::Searching;
                } else {
                    self.status = Some(format!(
                        "{} has nothing to search",
                        self.browser.active().label()
                    ));
                }
            }
            Action::ConfirmSearch => self.input_mode = InputMode::Normal,
            Action::ClearSearch => {
                self.browser.set_filter("");
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
        self.sync_search_input();
    }

    fn dispatch_chat(&mut self, action: Action) {
        match action {
            // Enter is inert while sending is unavailable
            Action::Submit if !self.session.can_submit() => {}
            Action::Submit => match self.session.submit_input() {
                Ok(request_id) => {
                    self.chat_input.clear();
                    self.spinner.reset();
                    self.chat_scroll = 0;
                    self.status = None;
                    tracing::debug!(%request_id, "Submitted message");
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Submit rejected");
                    self.status = Some(e.to_string());
                }
            },
            Action::CancelResponse => {
                if self.session.cancel() {
                    self.status = Some("Response cancelled".to_string());
                }
            }
            Action::NewChat => {
                self.session.reset();
                self.chat_input.clear();
                self.chat_scroll = 0;
                self.status = Some("Started a new conversation".to_string());
            }
            Action::UseExample(index) => {
                if self.session.use_example(index) {
                    self.chat_input.set(self.session.state().input());
                }
            }
            Action::ScrollUp => self.chat_scroll = self.chat_scroll.saturating_add(SCROLL_STEP),
            Action::ScrollDown => self.chat_scroll = self.chat_scroll.saturating_sub(SCROLL_STEP),
            _ => {}
        }
    }

    fn edit_active_input(&mut self, action: &Action) {
        let input = match (self.screen, self.input_mode) {
            (Screen::Chat, _) => &mut self.chat_input,
            (Screen::Admin, InputMode::Searching) => &mut self.search_input,
            (Screen::Admin, InputMode::Normal) => return,
        };

        match action {
            Action::InsertChar(c) => input.insert_char(*c),
            Action::Backspace => input.delete_char(),
            Action::Delete => input.delete_forward(),
            Action::MoveCursorLeft => input.move_left(),
            Action::MoveCursorRight => input.move_right(),
            Action::MoveCursorStart => input.move_start(),
            Action::MoveCursorEnd => input.move_end(),
            Action::MoveWordLeft => input.move_word_left(),
            Action::MoveWordRight => input.move_word_right(),
            Action::DeleteToStart => input.delete_to_start(),
            Action::DeleteToEnd => input.delete_to_end(),
            Action::DeleteWordBack => input.delete_word(),
            _ => {}
        }

        match self.screen {
            Screen::Chat => self.session.set_input(self.chat_input.value()),
            Screen::Admin => {
                if self.search_input.value() != self.browser.filter_text() {
                    self.browser.set_filter(self.search_input.value());
                }
            }
        }
    }

    /// Section changes clear the filter; mirror that into the search box
    fn sync_search_input(&mut self) {
        if self.search_input.value() != self.browser.filter_text() {
            self.search_input.set(self.browser.filter_text());
        }
        if !self.browser.active().is_searchable() {
            self.input_mode = InputMode::Normal;
        }
    }

    fn invoke_row(&mut self, row_action: RowAction) {
        let mut message = None;
        let result = self.browser.invoke(
            self.browser.selected_row(),
            row_action,
            &mut |section: Section, row: &Row, action: RowAction| {
                message = Some(format!(
                    "{} requested for {} in {}",
                    capitalize(action.label()),
                    describe_row(row),
                    section.label()
                ));
            },
        );
        match result {
            Ok(()) => self.status = message,
            Err(e) => {
                tracing::debug!(error = %e, "Row action rejected");
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let [header, body, status, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(f.area());

        self.draw_header(f, header);
        match self.screen {
            Screen::Admin => self.draw_admin(f, body),
            Screen::Chat => self.draw_chat(f, body),
        }
        self.draw_status(f, status);

        let context = FooterContext::from_state(
            self.screen,
            self.input_mode,
            self.session.can_submit(),
            self.session.is_pending(),
        );
        GlobalFooter::for_context(context).render(footer, f.buffer_mut());
    }

    fn draw_header(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for screen in [Screen::Admin, Screen::Chat] {
            if screen == self.screen {
                spans.push(Span::styled(" ▶ ", Style::default().fg(ACCENT_PRIMARY)));
                spans.push(Span::styled(
                    screen.label(),
                    Style::default()
                        .fg(TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw("   "));
                spans.push(Span::styled(screen.label(), Style::default().fg(TEXT_MUTED)));
            }
            spans.push(Span::raw("  "));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(SIDEBAR_BG)),
            area,
        );
    }

    fn draw_admin(&self, f: &mut Frame, area: Rect) {
        let [sidebar_area, content] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .areas(area);

        let searching = self.input_mode == InputMode::Searching;
        f.render_widget(
            Sidebar::new(self.browser.active()).focused(!searching),
            sidebar_area,
        );

        match self.browser.render() {
            SectionView::Overview {
                cards,
                recent_queries,
                services,
            } => {
                f.render_widget(Overview::new(&cards, &recent_queries, &services), content);
            }
            SectionView::List(list) => {
                let [search_area, table_area] = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(0)])
                    .areas(content);
                self.draw_search(f, search_area);
                f.render_widget(
                    ResourceTable::new(&list)
                        .selected(self.browser.selected_row())
                        .focused(!searching),
                    table_area,
                );
            }
            SectionView::Placeholder { message } => {
                let block = Block::default()
                    .title(format!(" {} ", self.browser.active().label()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_DEFAULT));
                f.render_widget(
                    Paragraph::new(message)
                        .style(Style::default().fg(TEXT_MUTED))
                        .alignment(Alignment::Center)
                        .block(block),
                    content,
                );
            }
        }
    }

    fn draw_search(&self, f: &mut Frame, area: Rect) {
        let searching = self.input_mode == InputMode::Searching;
        let border = if searching {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let text_style = Style::default().fg(TEXT_PRIMARY);
        let placeholder_style = Style::default().fg(TEXT_MUTED);
        if searching {
            self.search_input.render_with_placeholder(
                inner,
                f.buffer_mut(),
                text_style,
                "Type to filter...",
                placeholder_style,
            );
        } else if self.search_input.is_empty() {
            f.render_widget(Paragraph::new("Press / to search").style(placeholder_style), inner);
        } else {
            f.render_widget(
                Paragraph::new(self.search_input.value()).style(text_style),
                inner,
            );
        }
    }

    fn draw_chat(&self, f: &mut Frame, area: Rect) {
        let [transcript_area, input_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .areas(area);

        let pending_line = self
            .session
            .is_pending()
            .then(|| self.spinner.line("Thinking...", ACCENT_PRIMARY));
        f.render_widget(
            ChatView::new(self.session.state().transcript())
                .pending(pending_line)
                .scroll_offset(self.chat_scroll),
            transcript_area,
        );

        let block = Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_FOCUSED));
        let inner = block.inner(input_area);
        f.render_widget(block, input_area);
        self.chat_input.render_with_placeholder(
            inner,
            f.buffer_mut(),
            Style::default().fg(TEXT_PRIMARY),
            "Type your message...",
            Style::default().fg(TEXT_MUTED),
        );
    }

    fn draw_status(&self, f: &mut Frame, area: Rect) {
        let text = match &self.status {
            Some(message) => message.clone(),
            None => match self.screen {
                Screen::Admin => {
                    let filter = self.browser.filter_text();
                    if filter.is_empty() {
                        self.browser.active().label().to_string()
                    } else {
                        format!("{} · filter: {}", self.browser.active().label(), filter)
                    }
                }
                Screen::Chat => {
                    let info = self.session.conversation_info();
                    let id = info.conversation_id.simple().to_string();
                    format!(
                        "Conversation {} · {} messages",
                        &id[..8],
                        info.message_count
                    )
                }
            },
        };
        f.render_widget(
            Paragraph::new(format!(" {}", text))
                .style(Style::default().fg(TEXT_SECONDARY).bg(STATUS_BAR_BG)),
            area,
        );
    }
}

fn describe_row(row: &Row) -> String {
    match &row.data {
        RowData::User(user) => user.name.clone(),
        RowData::Document(doc) => doc.name.clone(),
        RowData::Query(query) => format!("query #{}", query.id),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
