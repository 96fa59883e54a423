//! TUI controller, the state machine driving screens over a single engine.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tictactoe::{GameEngine, Mode};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{GameScreen, ModeSelectScreen};

/// Active screen in the TUI state machine.
#[derive(Debug)]
enum ActiveScreen {
    ModeSelect(ModeSelectScreen),
    Game(GameScreen),
}

/// Runs the TUI event loop until the user quits.
///
/// One engine instance serves the whole session; screens receive it from
/// here. When `initial_mode` is set the mode selection screen is skipped
/// and play begins immediately.
#[instrument(skip(terminal))]
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    initial_mode: Option<Mode>,
) -> anyhow::Result<()> {
    info!("Starting TUI event loop");

    let mut engine = GameEngine::new(initial_mode.unwrap_or(Mode::PlayerVsPlayer));

    let mut screen = match initial_mode {
        Some(mode) => {
            let events = engine.start_game(mode);
            let mut game = GameScreen::new();
            game.apply_events(&events, &engine);
            ActiveScreen::Game(game)
        }
        None => ActiveScreen::ModeSelect(ModeSelectScreen::new()),
    };

    loop {
        // Render current screen.
        terminal.draw(|f| match &mut screen {
            ActiveScreen::ModeSelect(s) => s.render(f, &engine),
            ActiveScreen::Game(s) => s.render(f, &engine),
        })?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let transition = match &mut screen {
                ActiveScreen::ModeSelect(s) => s.handle_key(key, &mut engine),
                ActiveScreen::Game(s) => s.handle_key(key, &mut engine),
            };

            screen = match apply_transition(transition, screen, &mut engine) {
                Some(next) => next,
                None => {
                    info!("Quitting");
                    return Ok(());
                }
            };
        }
    }
}

/// Applies a screen transition, returning the next screen or `None` to quit.
#[instrument(skip(current, engine))]
fn apply_transition(
    transition: ScreenTransition,
    current: ActiveScreen,
    engine: &mut GameEngine,
) -> Option<ActiveScreen> {
    debug!(?transition, "Applying screen transition");
    match transition {
        ScreenTransition::Stay => Some(current),

        ScreenTransition::StartGame(mode) => {
            info!(%mode, "Starting game");
            let events = engine.start_game(mode);
            let mut screen = GameScreen::new();
            screen.apply_events(&events, engine);
            Some(ActiveScreen::Game(screen))
        }

        ScreenTransition::GoToModeSelect => {
            info!("Navigating to mode select");
            Some(ActiveScreen::ModeSelect(ModeSelectScreen::new()))
        }

        ScreenTransition::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_game_transition_builds_game_screen() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        let current = ActiveScreen::ModeSelect(ModeSelectScreen::new());

        let next = apply_transition(
            ScreenTransition::StartGame(Mode::PlayerVsComputer),
            current,
            &mut engine,
        );

        assert!(matches!(next, Some(ActiveScreen::Game(_))));
        assert_eq!(engine.mode(), Mode::PlayerVsComputer);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_quit_transition_ends_loop() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        let current = ActiveScreen::ModeSelect(ModeSelectScreen::new());

        assert!(apply_transition(ScreenTransition::Quit, current, &mut engine).is_none());
    }

    #[test]
    fn test_stay_keeps_current_screen() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        let current = ActiveScreen::Game(GameScreen::new());

        let next = apply_transition(ScreenTransition::Stay, current, &mut engine);
        assert!(matches!(next, Some(ActiveScreen::Game(_))));
    }
}
