//! Event types and sinks for observing contour runs.
//!
//! This module defines [`ContourEvent`] and a set of sinks to emit, collect, or forward events
//! while executing [`crate::runner::ContourRunner`], [`crate::runner::run_segments`] or
//! [`crate::runner::run_polylines`].
use crate::runner::{ContourConfig, RunSummary};

/// Describes events emitted by contour runs.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ContourEvent {
    /// Emitted before any level is scanned.
    RunStarted {
        /// The configuration used.
        config: ContourConfig,
        /// Number of requested levels.
        level_count: usize,
        /// Grid dimensions `(nx, ny)`.
        grid_size: (usize, usize),
    },

    /// Emitted once the segment collection of a level is complete.
    LevelScanned {
        /// Index of the level in the request.
        index: usize,
        /// Level value.
        level: f64,
        /// Number of extracted segments.
        segments: usize,
    },

    /// Emitted after a level has been stitched.
    LevelStitched {
        /// Index of the level in the request.
        index: usize,
        /// Level value.
        level: f64,
        /// Number of polylines, open and closed.
        polylines: usize,
        /// Number of closed polylines.
        closed: usize,
    },

    /// Emitted when the run completes.
    RunFinished {
        /// Totals for the run.
        summary: RunSummary,
    },

    /// Non-fatal warning generated during a run.
    Warning {
        /// Context string (e.g. level index).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`ContourEvent`], used by sinks to filter what they receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContourEventKind {
    RunStarted,
    LevelScanned,
    LevelStitched,
    RunFinished,
    Warning,
}

impl ContourEvent {
    pub fn kind(&self) -> ContourEventKind {
        match self {
            ContourEvent::RunStarted { .. } => ContourEventKind::RunStarted,
            ContourEvent::LevelScanned { .. } => ContourEventKind::LevelScanned,
            ContourEvent::LevelStitched { .. } => ContourEventKind::LevelStitched,
            ContourEvent::RunFinished { .. } => ContourEventKind::RunFinished,
            ContourEvent::Warning { .. } => ContourEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`ContourEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: ContourEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: ContourEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = ContourEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: ContourEvent) {}

    #[inline]
    fn wants(&self, _kind: ContourEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(ContourEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(ContourEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(ContourEvent),
{
    #[inline]
    fn send(&mut self, event: ContourEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<ContourEvent>,
    only: Option<Vec<ContourEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Collects only events of the given kinds.
    pub fn only(kinds: impl IntoIterator<Item = ContourEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<ContourEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[ContourEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: ContourEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: ContourEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn sinks(&self) -> &[S] {
        &self.sinks
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: ContourEvent) {
        let kind = event.kind();
        let Some(last_idx) = self.sinks.iter().rposition(|s| s.wants(kind)) else {
            return;
        };
        for sink in &mut self.sinks[..last_idx] {
            if sink.wants(kind) {
                sink.send(event.clone());
            }
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: ContourEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
