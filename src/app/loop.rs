use crate::app::{
    action::Action,
    command::Command,
    debounce::Debouncer,
    handler::{handle_command, Services},
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'a>,
    services: Services,
) -> Result<AppState<'a>> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'a>,
    services: Services,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState<'a>> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Dropped on return, which cancels a pending query.
    let mut debouncer = Debouncer::new(app_state.prefs.debounce());

    // A launch query runs right away, without the quiet period.
    let initial = app_state.search_text();
    if !initial.trim().is_empty() {
        if let Some(cmd) = reducer::update(&mut app_state, Action::SubmitQuery(initial)) {
            dispatch(cmd, &mut debouncer, &app_state, &services, &action_tx)?;
        }
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state)
            },

            // Timers and async results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);
            if app_state.should_quit {
                break;
            }
            if let Some(cmd) = command {
                dispatch(cmd, &mut debouncer, &app_state, &services, &action_tx)?;
            }
        }
    }

    Ok(app_state)
}

fn dispatch(
    command: Command,
    debouncer: &mut Debouncer,
    app_state: &AppState<'_>,
    services: &Services,
    tx: &mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::ScheduleQuery(text) => {
            debouncer.set_delay(app_state.prefs.debounce());
            let tx = tx.clone();
            debouncer.schedule(async move {
                let _ = tx.send(Action::SubmitQuery(text)).await;
            });
            Ok(())
        }
        other => handle_command(other, services, tx.clone()),
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
