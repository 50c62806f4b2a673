use crate::app::{action::Action, command::Command};
use crate::config::ConfigLoader;
use crate::domain::resolver::QueryResolver;
use crate::infrastructure::clipboard::Clipboard;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Everything a command may reach outside the reducer.
#[derive(Clone)]
pub struct Services {
    pub resolver: Arc<dyn QueryResolver>,
    pub clipboard: Arc<dyn Clipboard>,
    pub config: Arc<dyn ConfigLoader>,
}

/// Runs a side effect and reports back through `tx`.
/// `Command::ScheduleQuery` belongs to the loop, which owns the debouncer.
pub fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Resolve(ticket, query) => {
            let resolver = services.resolver.clone();
            tokio::spawn(async move {
                let result = resolver.resolve(query).await;
                if let Err(e) = &result {
                    tracing::error!(%ticket, error = %e, "invocation failed");
                }
                let _ = tx.send(Action::QueryResolved(ticket, result)).await;
            });
        }
        Command::Copy(field, text) => {
            let clipboard = services.clipboard.clone();
            tokio::spawn(async move {
                let outcome = tokio::task::spawn_blocking(move || {
                    clipboard.copy(&text).map(|()| text)
                })
                .await
                .map_err(|e| anyhow!("Clipboard task failed: {e}"))
                .and_then(|r| r);
                let message = match outcome {
                    Ok(text) => Ok(text),
                    Err(e) => {
                        tracing::warn!(field = field.label(), error = %e, "copy failed");
                        Err(format!("{e:#}"))
                    }
                };
                let _ = tx.send(Action::Copied(message)).await;
            });
        }
        Command::OpenPreferencesAfter(delay) => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(Action::ReturnToPreferences).await;
            });
        }
        Command::SavePreferences(path) => {
            let config = services.config.clone();
            tokio::spawn(async move {
                let outcome = tokio::task::spawn_blocking(move || {
                    config.save_binary_path(&path)?;
                    config.load()
                })
                .await
                .map_err(|e| anyhow!("Preferences task failed: {e}"))
                .and_then(|r| r);
                let message = match outcome {
                    Ok(prefs) => {
                        tracing::info!(binary = %prefs.binary_path.display(), "preferences saved");
                        Ok(Box::new(prefs))
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to save preferences");
                        Err(format!("{e:#}"))
                    }
                };
                let _ = tx.send(Action::PreferencesSaved(message)).await;
            });
        }
        Command::ScheduleQuery(_) => {
            return Err(anyhow!("ScheduleQuery must be handled by the event loop"));
        }
    }
    Ok(())
}
