//! Interactive recommendation screen.
//!
//! ```text
//! ┌ Query or job description ───────────────────────────┐
//! │ Looking for a Java developer who can collaborate▏   │
//! └─────────────────────────────────────────────────────┘
//! ┌ Top K ──────┐┌ Characters ─┐┌──────────────────────┐
//! │ ◂ 10 ▸      ││ 48          ││ Get Recommendations  │
//! └─────────────┘└─────────────┘└──────────────────────┘
//! ┌ Recommended Assessments (10 Results) ───────────────┐
//! │ #1 Core Java (Entry Level)                          │
//! │    Knowledge & Skills · 30 min · ✓ 85.0%            │
//! └─────────────────────────────────────────────────────┘
//!  Ctrl+Enter submit · ↑/↓ top k · PgUp/PgDn scroll · Esc quit
//! ```

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::debug;

use crate::application::{
    RecommendationCard, RecommendationClient, RelevanceTier, ResultRenderer, ResultView,
};
use crate::domain::{DomainError, RecommendationResult};

use super::events::{Event, EventHandler};
use super::input_field::{QueryInput, TopKSelector};

const TICK_RATE: Duration = Duration::from_millis(100);
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SCROLL_STEP: u16 = 5;

type Outcome = Result<RecommendationResult, DomainError>;

pub struct TuiApp {
    client: Arc<RecommendationClient>,
    renderer: ResultRenderer,
    input: QueryInput,
    top_k: TopKSelector,
    view: Option<ResultView>,
    scroll: u16,
    spinner_frame: usize,
    should_quit: bool,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl TuiApp {
    pub fn new(client: Arc<RecommendationClient>, renderer: ResultRenderer, top_k: u32) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            client,
            renderer,
            input: QueryInput::new(),
            top_k: TopKSelector::new(top_k),
            view: None,
            scroll: 0,
            spinner_frame: 0,
            should_quit: false,
            outcome_tx,
            outcome_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        // Restore the terminal even when the loop failed.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut events = EventHandler::new(TICK_RATE);

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                event = events.next() => match event? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Tick => self.on_tick(),
                    Event::Resize(..) => {}
                },
                Some(outcome) = self.outcome_rx.recv() => self.on_outcome(outcome),
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Many terminals report Ctrl+Enter as Ctrl+J.
            KeyCode::Enter if ctrl => self.submit(),
            KeyCode::Char('j') if ctrl => self.submit(),
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.input.insert_newline(),
            KeyCode::Char(c) if !ctrl => self.input.insert_char(c),
            KeyCode::Backspace => self.input.delete_char(),
            KeyCode::Delete => self.input.delete_char_forward(),
            KeyCode::Left => self.input.cursor_left(),
            KeyCode::Right => self.input.cursor_right(),
            KeyCode::Home => self.input.cursor_home(),
            KeyCode::End => self.input.cursor_end(),
            KeyCode::Up => self.top_k.increase(),
            KeyCode::Down => self.top_k.decrease(),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(SCROLL_STEP),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(SCROLL_STEP),
            _ => {}
        }
    }

    /// Spawns the request so the screen keeps redrawing while it is in flight.
    /// The trigger is disabled while the client is busy.
    fn submit(&mut self) {
        if self.client.is_busy() {
            debug!("Submit ignored while a request is in flight");
            return;
        }

        self.view = None;
        self.scroll = 0;

        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        let text = self.input.value().to_string();
        let top_k = self.top_k.value();

        tokio::spawn(async move {
            let outcome = client.submit(&text, top_k).await;
            let _ = tx.send(outcome);
        });
    }

    fn on_outcome(&mut self, outcome: Outcome) {
        // A rejected double submission leaves the pending request's view alone.
        if matches!(outcome, Err(DomainError::Busy)) {
            return;
        }

        let view = self.renderer.render(&outcome);
        if view.scroll_into_view() {
            self.scroll = 0;
        }
        self.view = Some(view);
    }

    fn on_tick(&mut self) {
        if self.client.is_busy() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.input.render(frame, chunks[0], !self.client.is_busy());
        self.render_controls(frame, chunks[1]);
        self.render_results(frame, chunks[2]);

        let help = Paragraph::new(Line::from(Span::styled(
            " Ctrl+Enter submit · ↑/↓ top k · PgUp/PgDn scroll · Ctrl+U clear · Esc quit",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(help, chunks[3]);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14),
                Constraint::Length(16),
                Constraint::Min(20),
            ])
            .split(area);

        let top_k = Paragraph::new(format!(" ◂ {} ▸", self.top_k.value()))
            .block(Block::default().title(" Top K ").borders(Borders::ALL));
        frame.render_widget(top_k, chunks[0]);

        let counter = Paragraph::new(format!(" {}", self.input.char_count()))
            .block(Block::default().title(" Characters ").borders(Borders::ALL));
        frame.render_widget(counter, chunks[1]);

        let button = if self.client.is_busy() {
            Paragraph::new(Line::from(vec![
                Span::styled(
                    SPINNER_FRAMES[self.spinner_frame],
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    " Finding the best assessments...",
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        } else {
            Paragraph::new(Span::styled(
                " Get Recommendations",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
        };
        frame.render_widget(button.block(Block::default().borders(Borders::ALL)), chunks[2]);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let (title, lines) = match &self.view {
            None => (" Results ".to_string(), Vec::new()),
            Some(view) => view_lines(view),
        };

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title(title).borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

fn view_lines(view: &ResultView) -> (String, Vec<Line<'static>>) {
    match view {
        ResultView::NoResults { message } => (
            " Results ".to_string(),
            vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            ))],
        ),
        ResultView::Error(error) => (
            " Error ".to_string(),
            vec![Line::from(Span::styled(
                error.full_message(),
                Style::default().fg(Color::Red),
            ))],
        ),
        ResultView::Results(results) => {
            let title = format!(" {} ({}) ", results.title, results.count_label());
            let lines = results.cards.iter().flat_map(card_lines).collect();
            (title, lines)
        }
    }
}

fn card_lines(card: &RecommendationCard) -> Vec<Line<'static>> {
    let tier_color = match card.badge.tier {
        RelevanceTier::High => Color::Green,
        RelevanceTier::Medium => Color::Yellow,
        RelevanceTier::Low => Color::Red,
    };
    let dim = Style::default().fg(Color::DarkGray);

    vec![
        Line::from(vec![
            Span::styled(card.rank_label(), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(card.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::raw("   "),
            Span::raw(card.test_type.clone()),
            Span::styled(" · ", dim),
            Span::raw(card.duration_label()),
            Span::styled(" · ", dim),
            Span::styled(card.badge.label(), Style::default().fg(tier_color)),
        ]),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(
                card.link.href.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use tokio::sync::Notify;

    use super::*;
    use crate::application::RecommendationService;
    use crate::connector::adapter::MockRecommendationService;
    use crate::domain::{BatchQuery, BatchResult, HealthStatus, Query, Recommendation};

    /// Holds every recommend call until the gate is opened.
    struct GatedService {
        gate: Notify,
        calls: AtomicUsize,
    }

    impl GatedService {
        fn new() -> Self {
            Self {
                gate: Notify::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecommendationService for GatedService {
        async fn recommend(&self, _query: &Query) -> Result<RecommendationResult, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(RecommendationResult::new(vec![Recommendation::new(
                "Core Java (Entry Level)",
                "Knowledge & Skills",
                30,
                "https://example.com/core-java",
                0.85,
            )]))
        }

        async fn batch_recommend(&self, _batch: &BatchQuery) -> Result<BatchResult, DomainError> {
            Ok(BatchResult::default())
        }

        async fn health(&self) -> Result<HealthStatus, DomainError> {
            Ok(HealthStatus::new("healthy"))
        }

        fn base_url(&self) -> &str {
            "http://localhost:5000"
        }
    }

    fn app() -> TuiApp {
        let service: Arc<dyn RecommendationService> = Arc::new(MockRecommendationService::new());
        let renderer = ResultRenderer::new(service.base_url());
        TuiApp::new(Arc::new(RecommendationClient::new(service)), renderer, 5)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn screen(app: &TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_ctrl_enter_submits_and_renders_cards() {
        let mut app = app();
        type_text(&mut app, "Java developer for a banking team");

        app.handle_key(ctrl(KeyCode::Enter));
        let outcome = app.outcome_rx.recv().await.unwrap();
        app.on_outcome(outcome);

        let view = app.view.as_ref().unwrap();
        assert_eq!(view.cards().len(), 5);
        assert!(!app.client.is_busy());
        assert!(screen(&app).contains("#1"));
    }

    #[tokio::test]
    async fn test_short_query_renders_error() {
        let mut app = app();
        type_text(&mut app, "java");

        app.handle_key(ctrl(KeyCode::Char('j')));
        let outcome = app.outcome_rx.recv().await.unwrap();
        app.on_outcome(outcome);

        assert!(app.view.as_ref().unwrap().is_error());
        assert!(screen(&app).contains("at least 10 characters"));
    }

    #[tokio::test]
    async fn test_loading_clears_results_and_disables_submit() {
        let service = Arc::new(GatedService::new());
        let renderer = ResultRenderer::new(service.base_url());
        let mut app = TuiApp::new(
            Arc::new(RecommendationClient::new(service.clone())),
            renderer,
            5,
        );
        app.view = Some(ResultView::NoResults {
            message: "previous".to_string(),
        });
        type_text(&mut app, "Java developer for a banking team");

        app.handle_key(ctrl(KeyCode::Enter));
        while service.calls() == 0 {
            tokio::task::yield_now().await;
        }

        assert!(app.client.is_busy());
        assert!(app.view.is_none());
        let drawn = screen(&app);
        assert!(drawn.contains("Finding the best assessments..."));
        assert!(!drawn.contains("Get Recommendations"));

        // The trigger is disabled: nothing is spawned for the second press.
        app.handle_key(ctrl(KeyCode::Enter));
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(service.calls(), 1);

        service.gate.notify_one();
        let outcome = app.outcome_rx.recv().await.unwrap();
        app.on_outcome(outcome);
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert!(app.outcome_rx.try_recv().is_err());
        assert_eq!(app.view.as_ref().unwrap().cards().len(), 1);
        assert!(!app.client.is_busy());
        assert!(screen(&app).contains("Get Recommendations"));
    }

    #[tokio::test]
    async fn test_busy_outcome_keeps_current_view() {
        let mut app = app();
        app.on_outcome(Err(DomainError::Busy));
        assert!(app.view.is_none());
    }

    #[test]
    fn test_plain_enter_inserts_newline() {
        let mut app = app();
        type_text(&mut app, "line");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.input.value(), "line\n");
    }

    #[test]
    fn test_arrows_change_top_k_and_escape_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.top_k.value(), 7);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.top_k.value(), 6);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_character_counter_is_drawn() {
        let mut app = app();
        type_text(&mut app, "abc");
        let screen = screen(&app);
        assert!(screen.contains("Characters"));
        assert!(screen.contains("Get Recommendations"));
    }
}
