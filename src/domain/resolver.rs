use super::{error::InvokeError, models::ResultItem};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryResolver: Send + Sync {
    /// Runs one invocation for an already-trimmed query.
    /// `None` means "invoke without an argument".
    async fn resolve(&self, query: Option<String>) -> Result<Vec<ResultItem>, InvokeError>;
}
