//! Terminal session orchestrator: owns the engine, the fixed-period tick
//! timer, input dispatch, and restart handling.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameState, LogSink, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Frame period for the renderer; game logic runs on its own slower timer
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    events: LogSink,
    should_quit: bool,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("invalid game configuration")?;

        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            events: LogSink,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal even if the loop failed
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.engine.config().tick_interval_ms);
        let mut tick_timer = interval(tick_interval);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Input events interleave between ticks, never within one
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Fixed-period simulation tick; a dead game ignores it,
                // which is the "stopped timer" until a restart arrives
                _ = tick_timer.tick() => {
                    if self.state.is_alive {
                        self.advance_tick();
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(dir) => {
                    self.engine
                        .set_direction(&mut self.state, dir, &mut self.events);
                }
                KeyAction::Restart => {
                    // Only honored after a game over; a silent no-op otherwise
                    if !self.state.is_alive {
                        self.restart();
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn advance_tick(&mut self) {
        let outcome = self.engine.tick(&mut self.state, &mut self.events);

        if outcome == TickOutcome::GameOver {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn restart(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
