use dep_slim::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// One call recorded by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Message(String),
    Stage { current: usize, total: usize },
    Error(String),
    Completed(String),
}

/// Mock ProgressReporter that records every call
///
/// Clones share the same event log, so a test can keep one handle while
/// the use case owns another.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Rc<RefCell<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.borrow().clone()
    }

    /// Stage numbers in the order they were reported
    pub fn stages(&self) -> Vec<(usize, usize)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::Stage { current, total } => Some((*current, *total)),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ProgressEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.record(ProgressEvent::Stage { current, total });
    }

    fn report_error(&self, message: &str) {
        self.record(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ProgressEvent::Completed(message.to_string()));
    }
}
