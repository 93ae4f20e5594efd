//! Cancellable deferred tasks.

use std::time::Duration;

use futures::future::BoxFuture;
use tokio::task::AbortHandle;

/// Work to run once the delay has elapsed
pub type Task = BoxFuture<'static, ()>;

/// Runs a task after a delay and hands back a handle that can cancel it
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;
}

/// Handle to a scheduled task
#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn new(abort: AbortHandle) -> Self {
        Self { abort }
    }

    /// Stop the task if it has not finished. The task's future is dropped
    /// at its next await point, so nothing it would have sent is sent.
    pub fn cancel(self) {
        self.abort.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

/// Spawns tasks on the current tokio runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            task.await;
        });
        TaskHandle::new(handle.abort_handle())
    }
}
