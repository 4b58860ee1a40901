use gloo_timers::callback::Timeout;

/// Something that can run a task after a delay.
///
/// Dropping the returned handle must cancel the task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo. A dropped `Timeout` is cleared.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Holds at most one pending task. Arming again, cancelling, or dropping the
/// timer releases whatever was pending before.
pub struct ResetTimer<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> ResetTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn arm<F>(&mut self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}
