//! Sequential fallback over a candidate list.
//!
//! A [`CoverCursor`] holds the private resolution state of one image: which
//! candidate is currently set on the target and whether resolution is over.
//! The host reports the outcome of each load with [`LoadEvent`]; a failure
//! moves the cursor to the next candidate, a success stops it. Setting the
//! final candidate (the placeholder) ends resolution without waiting for
//! its load, since the placeholder is assumed reachable.

use crate::candidates::CandidateList;

/// A surface that loads an image from a source reference.
///
/// The cursor's only side effect is calling [`set_source`](Self::set_source).
pub trait CoverTarget {
    fn set_source(&mut self, source: &str);
}

/// Load result reported by the host for the currently set source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    Loaded,
    Failed,
}

/// Where a cursor is in its scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    NotStarted,
    /// Candidate `index` is set and its load is pending.
    Trying { index: usize },
    /// Candidate `index` loaded.
    Found { index: usize },
    /// Every earlier candidate failed; the final one stays set.
    Placeholder { index: usize },
}

impl CursorState {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Found { .. } | Self::Placeholder { .. })
    }
}

/// Final result of resolving one cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Found { source: String, attempts: usize },
    Placeholder { source: String, attempts: usize },
}

impl ResolutionOutcome {
    pub fn source(&self) -> &str {
        match self {
            Self::Found { source, .. } | Self::Placeholder { source, .. } => source,
        }
    }

    /// Number of sources set on the target, the winning one included.
    pub fn attempts(&self) -> usize {
        match self {
            Self::Found { attempts, .. } | Self::Placeholder { attempts, .. } => *attempts,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Cursor over an ordered, non-empty list of sources.
#[derive(Debug, Clone)]
pub struct CoverCursor {
    label: String,
    sources: Vec<String>,
    state: CursorState,
}

impl CoverCursor {
    pub fn new(candidates: CandidateList) -> Self {
        let label = candidates.title().to_string();
        Self {
            label,
            sources: candidates.into_sources(),
            state: CursorState::NotStarted,
        }
    }

    /// Cursor over arbitrary sources. The last one plays the placeholder
    /// role. Returns `None` for an empty list.
    pub fn from_sources(label: impl Into<String>, sources: Vec<String>) -> Option<Self> {
        if sources.is_empty() {
            return None;
        }
        Some(Self {
            label: label.into(),
            sources,
            state: CursorState::NotStarted,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Source currently set on the target, if started.
    pub fn current(&self) -> Option<&str> {
        match self.state {
            CursorState::NotStarted => None,
            CursorState::Trying { index }
            | CursorState::Found { index }
            | CursorState::Placeholder { index } => self.sources.get(index).map(String::as_str),
        }
    }

    /// Set the first source on the target. Calling it again does nothing.
    pub fn start(&mut self, target: &mut impl CoverTarget) -> CursorState {
        if self.state == CursorState::NotStarted {
            self.set(0, target);
        }
        self.state
    }

    /// Feed the load result of the current source.
    ///
    /// Events before [`start`](Self::start) or after resolution finished
    /// are ignored.
    pub fn on_event(&mut self, event: LoadEvent, target: &mut impl CoverTarget) -> CursorState {
        let CursorState::Trying { index } = self.state else {
            return self.state;
        };
        match event {
            LoadEvent::Loaded => {
                log::debug!("[cover ok ] {} -> {}", self.label, self.sources[index]);
                self.state = CursorState::Found { index };
            }
            LoadEvent::Failed => self.set(index + 1, target),
        }
        self.state
    }

    pub fn outcome(&self) -> Option<ResolutionOutcome> {
        match self.state {
            CursorState::Found { index } => Some(ResolutionOutcome::Found {
                source: self.sources[index].clone(),
                attempts: index + 1,
            }),
            CursorState::Placeholder { index } => Some(ResolutionOutcome::Placeholder {
                source: self.sources[index].clone(),
                attempts: index + 1,
            }),
            CursorState::NotStarted | CursorState::Trying { .. } => None,
        }
    }

    fn set(&mut self, index: usize, target: &mut impl CoverTarget) {
        let last = self.sources.len() - 1;
        let source = &self.sources[index];
        log::debug!("[cover try] {} -> {}", self.label, source);
        target.set_source(source);
        self.state = if index >= last {
            CursorState::Placeholder { index }
        } else {
            CursorState::Trying { index }
        };
    }
}

/// A [`CoverTarget`] that records every source it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverSlot {
    history: Vec<String>,
}

impl CoverSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl CoverTarget for CoverSlot {
    fn set_source(&mut self, source: &str) {
        self.history.push(source.to_string());
    }
}

#[cfg(test)]
#[path = "tests/cursor_tests.rs"]
mod tests;
