use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Local;
use lazy_static::lazy_static;

use crate::record::{format_record, timestamp};
use crate::sink::{Sink, lock};
use crate::{Error, Level, Result};

lazy_static! {
    static ref REGISTRY: Mutex<HashMap<String, Arc<Channel>>> = Mutex::new(HashMap::new());
}

/// Returns the channel registered under `name`, creating it on first use.
///
/// Channels live for the rest of the process.
pub fn channel(name: &str) -> Arc<Channel> {
    let mut registry = lock(&REGISTRY);
    if let Some(existing) = registry.get(name) {
        return existing.clone();
    }

    tracing::debug!(channel = name, total = registry.len() + 1, "Registering log channel");
    let created = Arc::new(Channel::new(name));
    registry.insert(name.to_string(), created.clone());
    created
}

/// Number of channels created so far in this process.
pub fn channel_count() -> usize {
    lock(&REGISTRY).len()
}

/// Named destination with a severity threshold and attached sinks.
pub struct Channel {
    name: String,
    threshold: Mutex<Level>,
    sinks: Mutex<Vec<Arc<dyn Sink>>>,
}

impl Channel {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            threshold: Mutex::new(Level::Debug),
            sinks: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Level {
        *lock(&self.threshold)
    }

    pub fn set_threshold(&self, level: Level) {
        *lock(&self.threshold) = level;
    }

    pub fn sink_count(&self) -> usize {
        lock(&self.sinks).len()
    }

    pub fn attach(&self, sink: Arc<dyn Sink>) {
        tracing::trace!(channel = %self.name, "Attaching sink");
        lock(&self.sinks).push(sink);
    }

    pub fn detach(&self, sink: &Arc<dyn Sink>) {
        tracing::trace!(channel = %self.name, "Detaching sink");
        lock(&self.sinks).retain(|existing| !same_sink(existing, sink));
    }

    /// Attaches `sink` for as long as the returned guard is alive.
    pub fn attach_scoped(self: &Arc<Self>, sink: Arc<dyn Sink>) -> ScopedSink {
        self.attach(sink.clone());
        ScopedSink { channel: self.clone(), sink: Some(sink) }
    }

    /// Writes one record to every attached sink, provided `level` passes the
    /// threshold.
    ///
    /// Every sink is tried; the first failure is returned.
    pub fn emit(&self, level: Level, body: &str) -> Result<()> {
        if !level.enabled(self.threshold()) {
            return Ok(());
        }

        let line = format_record(&timestamp(Local::now()), &self.name, level, body);
        let sinks = lock(&self.sinks).clone();

        let mut first_error = None;
        for sink in sinks {
            if let Err(source) = sink.write_line(&line)
                && first_error.is_none()
            {
                first_error = Some(Error::Write { channel: self.name.clone(), source });
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("threshold", &self.threshold())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

/// Detaches and drops its sink when it goes out of scope.
#[must_use = "the sink is detached as soon as the guard is dropped"]
pub struct ScopedSink {
    channel: Arc<Channel>,
    sink: Option<Arc<dyn Sink>>,
}

impl Drop for ScopedSink {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            self.channel.detach(&sink);
        }
    }
}

fn same_sink(a: &Arc<dyn Sink>, b: &Arc<dyn Sink>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}
