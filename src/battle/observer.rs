//! Synchronous observers notified of battle events
//!
//! Observers run on the battle thread, in attachment order. Nothing isolates
//! one observer from another: a panicking observer takes the battle down.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use crate::battle::events::BattleEvent;

/// Receives every event an army (or the battle itself) announces
pub trait BattleObserver {
    fn update(&self, event: &BattleEvent);
}

impl<F> BattleObserver for F
where
    F: Fn(&BattleEvent),
{
    fn update(&self, event: &BattleEvent) {
        self(event)
    }
}

/// Where a console observer writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Prints `"<name>: <event>"` for every event
#[derive(Debug, Clone)]
pub struct ConsoleObserver {
    name: String,
    stream: ConsoleStream,
}

impl ConsoleObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn with_stream(mut self, stream: ConsoleStream) -> Self {
        self.stream = stream;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self, event: &BattleEvent) -> String {
        format!("{}: {}", self.name, event)
    }
}

impl BattleObserver for ConsoleObserver {
    fn update(&self, event: &BattleEvent) {
        let line = self.format(event);
        // Write errors on a closed stream are ignored
        let _ = match self.stream {
            ConsoleStream::Stdout => writeln!(io::stdout().lock(), "{}", line),
            ConsoleStream::Stderr => writeln!(io::stderr().lock(), "{}", line),
        };
    }
}

/// Keeps a copy of every event it sees
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: RefCell<Vec<BattleEvent>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BattleEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl BattleObserver for EventRecorder {
    fn update(&self, event: &BattleEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Ordered list of attached observers
#[derive(Clone, Default)]
pub struct ObserverList {
    observers: Vec<Rc<dyn BattleObserver>>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Rc<dyn BattleObserver>) {
        self.observers.push(observer);
    }

    pub fn notify(&self, event: &BattleEvent) {
        for observer in &self.observers {
            observer.update(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}
