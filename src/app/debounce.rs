use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Single-slot delayed execution. Arming replaces whatever was pending.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Runs `task` once `delay` has passed without another call to `schedule`.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::Pin;
    use std::sync::{Arc, Mutex};

    const QUIET: Duration = Duration::from_millis(300);

    type Task = Pin<Box<dyn Future<Output = ()> + Send>>;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Task) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let make = move |value: &str| {
            let sink = sink.clone();
            let value = value.to_string();
            Box::pin(async move {
                sink.lock().unwrap().push(value);
            }) as Task
        };
        (calls, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(QUIET);

        for text in ["1", "17", "170", "1700"] {
            debouncer.schedule(make(text));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(calls.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["1700".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_updates_each_fire() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.schedule(make("a"));
        tokio::time::sleep(Duration::from_millis(350)).await;
        debouncer.schedule(make("b"));
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(*calls.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_exactly_at_quiet_period() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.schedule(make("x"));
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(calls.lock().unwrap().is_empty());
        assert!(debouncer.is_pending());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop() {
        let (calls, make) = recorder();

        let mut debouncer = Debouncer::new(QUIET);
        debouncer.schedule(make("cancelled"));
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        debouncer.schedule(make("dropped"));
        drop(debouncer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(calls.lock().unwrap().is_empty());
    }
}
