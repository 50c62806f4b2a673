use crate::config::{ConfigLoader, Preferences};
use crate::domain::{
    error::InvokeError,
    models::{InvocationStyle, ResultItem},
    resolver::QueryResolver,
    response::parse_output,
};
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

/// Runs the user-configured binary and decodes what it prints.
pub struct ProcessInvoker {
    loader: Arc<dyn ConfigLoader>,
}

impl ProcessInvoker {
    pub fn new(loader: Arc<dyn ConfigLoader>) -> Self {
        Self { loader }
    }

    fn load_preferences(&self) -> Result<Preferences, InvokeError> {
        let prefs = self
            .loader
            .load()
            .map_err(|e| InvokeError::Configuration {
                path: self.loader.location(),
                reason: format!("{e:#}"),
            })?;

        if prefs.binary_path.as_os_str().is_empty() {
            return Err(InvokeError::Configuration {
                path: prefs.binary_path,
                reason: "no binary configured".to_string(),
            });
        }
        if !prefs.binary_path.exists() {
            return Err(InvokeError::Configuration {
                path: prefs.binary_path,
                reason: "no such file".to_string(),
            });
        }
        Ok(prefs)
    }
}

fn build_command(prefs: &Preferences, query: Option<&str>) -> Command {
    let mut cmd = match prefs.invocation {
        InvocationStyle::Direct => {
            let mut cmd = Command::new(&prefs.binary_path);
            if let Some(q) = query {
                cmd.arg(q);
            }
            cmd
        }
        InvocationStyle::Shell => {
            let binary = prefs.binary_path.to_string_lossy();
            let mut line = shell_words::quote(&binary).into_owned();
            if let Some(q) = query {
                line.push(' ');
                line.push_str(&shell_words::quote(q));
            }
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    };
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    cmd
}

#[async_trait]
impl QueryResolver for ProcessInvoker {
    async fn resolve(&self, query: Option<String>) -> Result<Vec<ResultItem>, InvokeError> {
        let prefs = self.load_preferences()?;
        tracing::info!(
            binary = %prefs.binary_path.display(),
            query = ?query,
            style = ?prefs.invocation,
            "invoking binary"
        );

        let mut cmd = build_command(&prefs, query.as_deref());
        let output = match tokio::time::timeout(prefs.timeout(), cmd.output()).await {
            Err(_) => {
                return Err(InvokeError::Execution(format!(
                    "{} timed out after {} ms",
                    prefs.binary_path.display(),
                    prefs.timeout_ms
                )))
            }
            Ok(Err(e)) => {
                return Err(InvokeError::Execution(format!(
                    "failed to run {}: {e}",
                    prefs.binary_path.display()
                )))
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let mut message =
                format!("{} exited with {}", prefs.binary_path.display(), output.status);
            if !stderr.is_empty() {
                message.push_str(": ");
                message.push_str(stderr);
            }
            return Err(InvokeError::Execution(message));
        }

        parse_output(&output.stdout)
    }
}
