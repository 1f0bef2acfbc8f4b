// Timing gates shared by the frame scheduler and the event throttle.
//
// Both take explicit millisecond timestamps so the browser glue can feed
// them `requestAnimationFrame` / `instant::now()` values.

/// Lets a per-refresh tick through at most once per `interval_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cadence {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Cadence {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// The first tick always passes; later ones pass once `interval_ms` has
    /// elapsed since the previous pass.
    #[inline]
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleAction<A> {
    /// Run now with these arguments.
    Invoke(A),
    /// Arguments were parked; arm the trailing timer for `delay_ms` from now.
    Defer { delay_ms: f64 },
}

/// Leading + trailing edge throttle. Holds at most one pending call, always
/// the most recent one.
#[derive(Clone, Debug, PartialEq)]
pub struct ThrottleGate<A> {
    wait_ms: f64,
    last_ms: Option<f64>,
    pending: Option<A>,
}

impl<A> ThrottleGate<A> {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms: wait_ms.max(0.0),
            last_ms: None,
            pending: None,
        }
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    pub fn pending(&self) -> Option<&A> {
        self.pending.as_ref()
    }

    /// A leading call drops anything still pending. A call inside the
    /// window replaces the pending arguments.
    pub fn call(&mut self, now_ms: f64, args: A) -> ThrottleAction<A> {
        match self.last_ms {
            Some(last) if now_ms - last < self.wait_ms => {
                self.pending = Some(args);
                ThrottleAction::Defer {
                    delay_ms: self.wait_ms,
                }
            }
            _ => {
                self.last_ms = Some(now_ms);
                self.pending = None;
                ThrottleAction::Invoke(args)
            }
        }
    }

    /// Trailing timer expired. Returns the pending arguments, if any, and
    /// restarts the window when there were some.
    pub fn fire(&mut self, now_ms: f64) -> Option<A> {
        let args = self.pending.take()?;
        self.last_ms = Some(now_ms);
        Some(args)
    }
}
