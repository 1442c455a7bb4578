/// A leading-edge rate limiter for fetch dispatch.
///
/// The first [`Throttle::fire`] in a quiescent period reports `true`
/// immediately; calls within `interval_ms` of the last accepted fire report
/// `false` and are dropped, never queued (the gated callbacks take no
/// arguments, so there is nothing to preserve for later).
///
/// Time is supplied by the host as `now_ms`. There are no internal timers, so
/// nothing can leak across remounts; the gate lives and dies with the
/// coordinator that owns it.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval_ms: u64,
    last_fire_ms: Option<u64>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
        }
    }

    /// Reports whether a call at `now_ms` passes the gate, recording it when
    /// it does.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => false,
            _ => {
                self.last_fire_ms = Some(now_ms);
                true
            }
        }
    }

    /// Forgets the last fire, so the next call passes immediately.
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }
}
