//! Debounce and throttle wrappers over a pluggable timer host.
//!
//! A [`TimerHost`] schedules a one-shot callback and hands back a handle;
//! dropping the handle cancels the callback if it has not run yet. The browser
//! crate backs this with `setTimeout`, tests use [`ManualTimers`].
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub trait TimerHost {
    type Handle;

    /// Run `callback` once after `delay_ms`. Dropping the returned handle
    /// before then cancels it.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Calls collapse into one: every call cancels the pending run and schedules
/// the latest argument `wait_ms` later.
pub struct Debounced<H: TimerHost, A> {
    host: H,
    wait_ms: u32,
    func: Rc<dyn Fn(A)>,
    pending: RefCell<Option<H::Handle>>,
}

impl<H: TimerHost, A: 'static> Debounced<H, A> {
    pub fn call(&self, arg: A) {
        // Drop first so the previous timer is cleared before the new one exists.
        drop(self.pending.borrow_mut().take());
        let func = Rc::clone(&self.func);
        let handle = self.host.schedule(self.wait_ms, Box::new(move || func(arg)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop any scheduled run without firing it.
    pub fn cancel(&self) {
        drop(self.pending.borrow_mut().take());
    }
}

/// Wrap `func` so it only runs after `wait_ms` without further calls.
pub fn debounce<H, A, F>(host: H, wait_ms: u32, func: F) -> Debounced<H, A>
where
    H: TimerHost,
    A: 'static,
    F: Fn(A) + 'static,
{
    Debounced {
        host,
        wait_ms,
        func: Rc::new(func),
        pending: RefCell::new(None),
    }
}

/// Leading-edge gate with a trailing replay: a call runs immediately when the
/// gate is open and then closes it for `limit_ms`. While closed, only the most
/// recent argument is kept and it runs once the gate reopens.
pub struct Throttled<H: TimerHost, A> {
    host: H,
    limit_ms: u32,
    func: Rc<dyn Fn(A)>,
    gate: Rc<Gate<A>>,
    reopen: RefCell<Option<H::Handle>>,
}

struct Gate<A> {
    closed: Cell<bool>,
    trailing: RefCell<Option<A>>,
}

impl<H: TimerHost, A: 'static> Throttled<H, A> {
    /// Returns whether the call ran immediately. A `false` call is held as
    /// the trailing argument, replacing any earlier held one.
    pub fn call(&self, arg: A) -> bool {
        if self.gate.closed.get() {
            *self.gate.trailing.borrow_mut() = Some(arg);
            return false;
        }
        (self.func)(arg);
        self.gate.closed.set(true);
        let gate = Rc::clone(&self.gate);
        let func = Rc::clone(&self.func);
        let handle = self.host.schedule(
            self.limit_ms,
            Box::new(move || {
                gate.closed.set(false);
                let last = gate.trailing.borrow_mut().take();
                if let Some(last) = last {
                    func(last);
                }
            }),
        );
        *self.reopen.borrow_mut() = Some(handle);
        true
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.gate.closed.get()
    }
}

/// Wrap `func` so it runs at most once per `limit_ms`, plus one trailing run
/// with the last argument seen while gated.
pub fn throttle<H, A, F>(host: H, limit_ms: u32, func: F) -> Throttled<H, A>
where
    H: TimerHost,
    A: 'static,
    F: Fn(A) + 'static,
{
    Throttled {
        host,
        limit_ms,
        func: Rc::new(func),
        gate: Rc::new(Gate {
            closed: Cell::new(false),
            trailing: RefCell::new(None),
        }),
        reopen: RefCell::new(None),
    }
}

type Scheduled = (u64, u64, Box<dyn FnOnce()>);

#[derive(Default)]
struct ManualInner {
    now: u64,
    next_id: u64,
    queue: Vec<Scheduled>,
}

/// Deterministic timer host driven by [`ManualTimers::advance`].
#[derive(Clone, Default)]
pub struct ManualTimers {
    inner: Rc<RefCell<ManualInner>>,
}

pub struct ManualHandle {
    id: u64,
    inner: Weak<RefCell<ManualInner>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade()
            && let Ok(mut inner) = inner.try_borrow_mut()
        {
            inner.queue.retain(|(id, _, _)| *id != self.id);
        }
    }
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Move the clock forward, running every callback that comes due in
    /// deadline order. Callbacks may schedule further timers.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, at, _))| *at <= target)
                    .min_by_key(|(_, (id, at, _))| (*at, *id))
                    .map(|(idx, _)| idx);
                due.map(|idx| {
                    let (_, at, callback) = inner.queue.remove(idx);
                    inner.now = at;
                    callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

impl TimerHost for ManualTimers {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let at = inner.now + u64::from(delay_ms);
        inner.queue.push((id, at, callback));
        ManualHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}
