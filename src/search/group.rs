use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio_util::task::TaskTracker;

/// A set of tasks that can be joined as a whole, including tasks spawned by
/// tasks already in the set.
///
/// Cloning yields another handle to the same set. Call [`close`] once no
/// more top-level work will be added, then [`wait`]; it resolves when every
/// task has finished. A task still running can always add children, so
/// nested fan-out never lets `wait` resolve early.
///
/// [`close`]: SearchGroup::close
/// [`wait`]: SearchGroup::wait
#[derive(Debug, Clone, Default)]
pub struct SearchGroup {
    tracker: TaskTracker,
    counters: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    spawned: AtomicUsize,
    completed: AtomicUsize,
}

/// Counts a completion when dropped, so early returns and panics count too.
struct Completion(Arc<Counters>);

impl Drop for Completion {
    fn drop(&mut self) {
        self.0.completed.fetch_add(1, Ordering::SeqCst);
    }
}

impl SearchGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` on the runtime as part of this group.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.counters.spawned.fetch_add(1, Ordering::SeqCst);
        let completion = Completion(self.counters.clone());
        self.tracker.spawn(async move {
            let _completion = completion;
            task.await;
        });
    }

    /// Mark that the caller will add no more top-level tasks.
    pub fn close(&self) {
        self.tracker.close();
    }

    pub fn is_closed(&self) -> bool {
        self.tracker.is_closed()
    }

    /// Resolves once the group is closed and every task has finished.
    pub async fn wait(&self) {
        self.tracker.wait().await;
    }

    /// Tasks spawned so far.
    pub fn spawned(&self) -> usize {
        self.counters.spawned.load(Ordering::SeqCst)
    }

    /// Tasks that have run to completion (or panicked).
    pub fn completed(&self) -> usize {
        self.counters.completed.load(Ordering::SeqCst)
    }

    /// Tasks still running.
    pub fn active(&self) -> usize {
        self.tracker.len()
    }
}
