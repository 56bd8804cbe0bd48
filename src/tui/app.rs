//! Main application state and rendering

use crate::config::Config;
use crate::data::{generate_alert, CREW_MANIFEST};
use crate::mainframe::boot::total_duration;
use crate::mainframe::{boot_sequence, initial_alert, BootStep, BoundedLog, Command, Effect, LoginGate, Mainframe, TerminalState, Tone};
use crate::tui::widgets::{AlertBadge, LockoutBox};
use crate::tui::{centered_rect, create_terminal_layout, crew_status_color, styled_block, Theme, SMALL_LOGO};
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Shown in front of every echoed command
const ECHO_PREFIX: &str = "MU-TH-UR> ";

/// Application state
pub struct App {
    pub state: TerminalState,
    pub theme: Theme,
    pub running: bool,
    pub current_screen: Screen,
    pub input_buffer: String,
    pub output: BoundedLog<TerminalLine>,
    pub login_error: Option<String>,
    config: Config,
    mainframe: Mainframe,
    gate: LoginGate,
    rng: StdRng,
    pending_login: Option<(String, Instant)>,
    pending_command: Option<(String, Instant)>,
    boot_queue: VecDeque<BootStep>,
    next_boot_at: Option<Instant>,
    scheduled_notice: Option<(BootStep, Instant)>,
    next_alert_check: Instant,
    history_cursor: Option<usize>,
}

/// Current screen being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Booting,
    Terminal,
}

/// One line of the output pane
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalLine {
    pub text: String,
    pub tone: Tone,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build with a caller-supplied generator
    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        let config = config.sanitized();
        let mainframe = Mainframe::new(config.alerts.scan_chance);
        let gate = LoginGate::new(config.login.max_attempts);
        let output = BoundedLog::new(config.terminal.max_output_lines);
        let next_alert_check = Instant::now() + Duration::from_secs(config.alerts.interval_secs);

        Self {
            state: TerminalState::new(),
            theme: Theme::default(),
            running: true,
            current_screen: Screen::Login,
            input_buffer: String::new(),
            output,
            login_error: None,
            config,
            mainframe,
            gate,
            rng,
            pending_login: None,
            pending_command: None,
            boot_queue: VecDeque::new(),
            next_boot_at: None,
            scheduled_notice: None,
            next_alert_check,
            history_cursor: None,
        }
    }

    /// Handle keyboard input and fire due timers
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, Instant::now());
                }
            }
        }

        self.tick(Instant::now());
        Ok(self.running)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        match self.current_screen {
            Screen::Login => self.handle_login_key(key.code, now),
            Screen::Terminal => self.handle_terminal_key(key.code, now),
            Screen::Booting => {}
        }
    }

    fn handle_login_key(&mut self, code: KeyCode, now: Instant) {
        if code == KeyCode::Esc {
            self.running = false;
            return;
        }
        if self.gate.is_locked() || self.pending_login.is_some() {
            return;
        }

        match code {
            KeyCode::Enter => self.submit_login(now),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }

    fn handle_terminal_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Enter => self.submit_command(now),
            KeyCode::Esc => {
                self.input_buffer.clear();
                self.history_cursor = None;
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Up => self.recall_older(),
            KeyCode::Down => self.recall_newer(),
            KeyCode::Tab => self.complete_input(),
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }

    fn submit_login(&mut self, now: Instant) {
        let user_id = self.input_buffer.trim().to_uppercase();
        if user_id.is_empty() {
            return;
        }

        self.input_buffer.clear();
        self.login_error = None;
        let due = now + Duration::from_millis(self.config.login.auth_delay_ms);
        self.pending_login = Some((user_id, due));
    }

    fn submit_command(&mut self, now: Instant) {
        if self.pending_command.is_some() {
            return;
        }
        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        self.input_buffer.clear();
        self.history_cursor = None;
        self.state.record_command(&input);
        self.push_line(format!("{}{}", ECHO_PREFIX, input), Tone::Input);

        let due = now + Duration::from_millis(self.config.terminal.processing_delay_ms);
        self.pending_command = Some((input, due));
    }

    fn complete_input(&mut self) {
        match Command::complete(&self.input_buffer) {
            Some(command) => self.input_buffer = command.name().to_string(),
            None => tracing::debug!(prefix = %self.input_buffer, "no unique completion"),
        }
    }

    fn recall_older(&mut self) {
        let len = self.state.command_history.len();
        if len == 0 {
            return;
        }
        let index = match self.history_cursor {
            None => len - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_cursor = Some(index);
        if let Some(cmd) = self.state.command_history.get(index) {
            self.input_buffer = cmd.clone();
        }
    }

    fn recall_newer(&mut self) {
        let Some(i) = self.history_cursor else {
            return;
        };
        if i + 1 < self.state.command_history.len() {
            self.history_cursor = Some(i + 1);
            if let Some(cmd) = self.state.command_history.get(i + 1) {
                self.input_buffer = cmd.clone();
            }
        } else {
            self.history_cursor = None;
            self.input_buffer.clear();
        }
    }

    /// Fire every timer that is due at `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some((user_id, due)) = self.pending_login.take() {
            if now >= due {
                self.finish_login(&user_id, due);
            } else {
                self.pending_login = Some((user_id, due));
            }
        }

        self.play_boot(now);

        if let Some((step, due)) = self.scheduled_notice.take() {
            if now >= due {
                self.push_line(step.text, step.tone);
            } else {
                self.scheduled_notice = Some((step, due));
            }
        }

        if let Some((input, due)) = self.pending_command.take() {
            if now >= due {
                self.run_command(&input);
            } else {
                self.pending_command = Some((input, due));
            }
        }

        if now >= self.next_alert_check {
            self.next_alert_check = now + Duration::from_secs(self.config.alerts.interval_secs);
            self.roll_periodic_alert();
        }
    }

    fn finish_login(&mut self, user_id: &str, at: Instant) {
        match self.gate.attempt(user_id) {
            Ok(member) => {
                self.state.login(member.name);
                tracing::info!(session = %self.state.session_id, user = member.name, "session started");

                self.output.clear();
                let steps = boot_sequence(member.name);
                tracing::debug!(
                    steps = steps.len(),
                    duration_ms = total_duration(&steps).as_millis() as u64,
                    "boot sequence started"
                );
                self.boot_queue = steps.into();
                self.next_boot_at = self.boot_queue.front().map(|step| at + step.delay);
                self.current_screen = Screen::Booting;
            }
            Err(err) => {
                self.login_error = Some(err.to_string());
            }
        }
    }

    fn play_boot(&mut self, now: Instant) {
        while let Some(at) = self.next_boot_at {
            if now < at {
                return;
            }
            if let Some(step) = self.boot_queue.pop_front() {
                self.push_line(step.text, step.tone);
            }
            match self.boot_queue.front() {
                Some(next) => self.next_boot_at = Some(at + next.delay),
                None => {
                    self.next_boot_at = None;
                    self.current_screen = Screen::Terminal;
                    let notice = initial_alert();
                    let due = at + notice.delay;
                    self.scheduled_notice = Some((notice, due));
                }
            }
        }
    }

    fn run_command(&mut self, input: &str) {
        let dispatch = self.mainframe.process(input, &self.state, &mut self.rng);
        let result = dispatch.result;

        if result.clear_screen {
            self.output.clear();
        }
        if !result.output.is_empty() {
            let tone = result.tone();
            for line in result.output {
                self.push_line(line, tone);
            }
            self.push_line(String::new(), Tone::Output);
        }

        for effect in dispatch.effects {
            let ends_session = effect == Effect::EndSession;
            self.state.apply(effect);
            if ends_session {
                self.end_session();
            }
        }
    }

    fn end_session(&mut self) {
        tracing::info!(session = %self.state.session_id, "session ended");
        self.output.clear();
        self.input_buffer.clear();
        self.history_cursor = None;
        self.scheduled_notice = None;
        self.login_error = None;
        self.current_screen = Screen::Login;
    }

    fn roll_periodic_alert(&mut self) {
        if !self.state.is_logged_in || !self.state.alien_detected || self.current_screen != Screen::Terminal {
            return;
        }
        if !self.rng.gen_bool(self.config.alerts.periodic_chance) {
            return;
        }

        let alert = generate_alert(&mut self.rng);
        self.push_line(format!("🚨 SYSTEM ALERT: {}", alert.message), Tone::Warning);
        self.state.push_alert(alert);
    }

    fn push_line(&mut self, text: impl Into<String>, tone: Tone) {
        self.output.push(TerminalLine {
            text: text.into(),
            tone,
        });
    }

    /// Live prompt at the current wall-clock time
    pub fn prompt(&self) -> String {
        self.prompt_at(Local::now())
    }

    /// `MU-TH-UR [USER] [HH:MM:SS]>`, or `AUTH [HH:MM:SS]>` with nobody logged in
    pub fn prompt_at(&self, now: DateTime<Local>) -> String {
        let clock = now.format("%H:%M:%S");
        match self.state.current_user.as_deref() {
            Some(user) => format!("MU-TH-UR [{}] [{}]>", user, clock),
            None => format!("AUTH [{}]>", clock),
        }
    }

    pub fn is_processing(&self) -> bool {
        self.pending_command.is_some()
    }

    pub fn is_authenticating(&self) -> bool {
        self.pending_login.is_some()
    }

    pub fn is_locked(&self) -> bool {
        self.gate.is_locked()
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.gate.remaining()
    }

    /// Text of the output pane, oldest first
    pub fn output_text(&self) -> impl Iterator<Item = &str> {
        self.output.iter().map(|line| line.text.as_str())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Login => self.render_login(frame),
            Screen::Booting | Screen::Terminal => self.render_terminal(frame),
        }
    }

    fn render_login(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg)), area);

        let panel = centered_rect(72, 20, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(3), // Input
                Constraint::Length(3), // Status
                Constraint::Min(4),    // Crew hints
            ])
            .split(panel);

        frame.render_widget(styled_block("MU-TH-UR 6000 ACCESS", &self.theme), panel);

        let title = vec![
            Line::from(Span::styled(
                "WEYLAND-YUTANI CORPORATION",
                Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("MU-TH-UR 6000 MAINFRAME INTERFACE", Style::default().fg(self.theme.fg))),
            Line::from(Span::styled("USCSS NOSTROMO - REG. 180924609", Style::default().fg(self.theme.dim))),
        ];
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

        if self.gate.is_locked() {
            let lockout = LockoutBox::new("TERMINAL LOCKED").content(vec![
                "MAXIMUM ATTEMPTS EXCEEDED".to_string(),
                "CONTACT SECURITY. PRESS ESC TO DISCONNECT".to_string(),
            ]);
            let lock_area = Rect::new(chunks[1].x, chunks[1].y, chunks[1].width, chunks[1].height + chunks[2].height);
            frame.render_widget(lockout, lock_area);
        } else {
            let input_text = if self.pending_login.is_some() {
                "AUTHENTICATING...".to_string()
            } else {
                format!("> {}_", self.input_buffer)
            };
            let input = Paragraph::new(input_text)
                .style(Style::default().fg(self.theme.accent))
                .block(styled_block("ENTER CREW IDENTIFICATION", &self.theme));
            frame.render_widget(input, chunks[1]);

            let mut status = Vec::new();
            if let Some(ref err) = self.login_error {
                status.push(Line::from(Span::styled(err.clone(), self.theme.tone_style(Tone::Error))));
                status.push(Line::from(Span::styled(
                    format!("ATTEMPTS REMAINING: {}", self.gate.remaining()),
                    self.theme.tone_style(Tone::Warning),
                )));
            }
            frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[2]);
        }

        let mut crew_spans = vec![Span::styled("CREW: ", Style::default().fg(self.theme.dim))];
        for member in CREW_MANIFEST.iter() {
            crew_spans.push(Span::styled(
                format!("{} ", member.name),
                Style::default().fg(crew_status_color(member.status)),
            ));
        }
        let hints = vec![
            Line::from(crew_spans),
            Line::from(""),
            Line::from(Span::styled(
                "Try RIPLEY for active access or ASH for synthetic override",
                Style::default().fg(self.theme.dim),
            )),
            Line::from(Span::styled("ENTER to log in | ESC to disconnect", Style::default().fg(self.theme.dim))),
        ];
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[3]);
    }

    fn render_terminal(&self, frame: &mut Frame) {
        let chunks = create_terminal_layout(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_output(frame, chunks[1]);
        self.render_input(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(18),
                Constraint::Min(20),
                Constraint::Length(18),
            ])
            .split(area);

        let border = Style::default().fg(self.theme.border);

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(logo, header_layout[0]);

        let user = self.state.current_user.as_deref().unwrap_or("-");
        let title = Paragraph::new(format!("USCSS NOSTROMO | USER: {}", user))
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(title, header_layout[1]);

        let badge_block = Block::default().borders(Borders::ALL).border_style(border);
        let badge_area = badge_block.inner(header_layout[2]);
        frame.render_widget(badge_block, header_layout[2]);
        frame.render_widget(AlertBadge::new(self.state.system_alerts.len()).blink(true), badge_area);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let skip = self.output.len().saturating_sub(visible);
        let lines: Vec<Line> = self
            .output
            .iter()
            .skip(skip)
            .map(|line| Line::from(Span::styled(line.text.clone(), self.theme.tone_style(line.tone))))
            .collect();

        let output = Paragraph::new(lines)
            .style(Style::default().bg(self.theme.bg))
            .block(styled_block("MAINFRAME", &self.theme));
        frame.render_widget(output, area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let (text, title) = match self.current_screen {
            Screen::Booting => ("INITIALIZING...".to_string(), "STANDBY"),
            _ if self.is_processing() => (format!("{} PROCESSING...", self.prompt()), "BUSY"),
            _ => (format!("{} {}_", self.prompt(), self.input_buffer), "INPUT"),
        };

        let input = Paragraph::new(text)
            .style(Style::default().fg(self.theme.accent))
            .block(styled_block(title, &self.theme));
        frame.render_widget(input, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
