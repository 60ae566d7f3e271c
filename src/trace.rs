//! Opt-in step log for the balancing state machines.
//!
//! The fixup loops never print or pause; when tracing is enabled they append
//! one event per structural or metadata step instead. Callers drain the log
//! with [`Trace::take`] between operations to observe how a mutation was
//! repaired.

/// One observable step of a fixup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Left rotation with the demoted subtree root as pivot.
    RotateLeft { pivot: u32 },
    /// Right rotation with the demoted subtree root as pivot.
    RotateRight { pivot: u32 },
    /// A red-black node changed color.
    Recolor { node: u32, black: bool },
    /// An AVL node's stored height was recomputed.
    HeightUpdate { node: u32, height: i32 },
}

/// Event buffer. Disabled by default; recording into a disabled trace is a
/// no-op so the fixup code stays branch-light.
#[derive(Debug, Default)]
pub struct Trace {
    events: Option<Vec<TraceEvent>>,
}

impl Trace {
    pub fn disabled() -> Self {
        Self { events: None }
    }

    pub fn enabled() -> Self {
        Self {
            events: Some(Vec::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.events.is_some()
    }

    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if let Some(buf) = &mut self.events {
            buf.push(event);
        }
    }

    pub fn events(&self) -> &[TraceEvent] {
        self.events.as_deref().unwrap_or(&[])
    }

    /// Drains and returns the buffered events, keeping tracing enabled.
    pub fn take(&mut self) -> Vec<TraceEvent> {
        match &mut self.events {
            Some(buf) => std::mem::take(buf),
            None => Vec::new(),
        }
    }
}
