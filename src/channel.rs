//! Delivery of area updates from the polygon lifecycle to the display layer.
//!
//! The channel is single-slot: every report replaces the previous value, nothing is
//! batched or merged, and a report of exactly `0.0` means no polygon is selected.

use std::fmt;

/// Area value that marks the cleared state.
pub const CLEARED_AREA: f64 = 0.0;

/// Receives area reports in km².
pub trait AreaSink {
    fn report(&mut self, area_km2: f64);
}

impl<F> AreaSink for F
where
    F: FnMut(f64),
{
    fn report(&mut self, area_km2: f64) {
        self(area_km2)
    }
}

/// Remembers the last reported area and forwards each report to an optional subscriber.
pub struct AreaChannel {
    last: f64,
    emissions: u64,
    subscriber: Option<Box<dyn AreaSink>>,
}

impl AreaChannel {
    pub fn new() -> Self {
        Self {
            last: CLEARED_AREA,
            emissions: 0,
            subscriber: None,
        }
    }

    /// Create a channel that forwards reports to `sink`.
    pub fn with_subscriber<S>(sink: S) -> Self
    where
        S: AreaSink + 'static,
    {
        let mut channel = Self::new();
        channel.subscribe(sink);
        channel
    }

    /// Replace the subscriber.
    pub fn subscribe<S>(&mut self, sink: S)
    where
        S: AreaSink + 'static,
    {
        self.subscriber = Some(Box::new(sink));
    }

    /// Drop the subscriber. Reports are still recorded.
    pub fn unsubscribe(&mut self) {
        self.subscriber = None;
    }

    /// Last reported area, `0.0` before the first report.
    pub fn last_reported(&self) -> f64 {
        self.last
    }

    /// Whether the last report was the cleared sentinel.
    pub fn is_cleared(&self) -> bool {
        self.last == CLEARED_AREA
    }

    /// Number of reports delivered so far.
    pub fn emissions(&self) -> u64 {
        self.emissions
    }
}

impl AreaSink for AreaChannel {
    fn report(&mut self, area_km2: f64) {
        self.last = area_km2;
        self.emissions += 1;
        log::debug!("📐 Area report: {:.3} km²", area_km2);

        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber.report(area_km2);
        }
    }
}

impl Default for AreaChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AreaChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AreaChannel")
            .field("last", &self.last)
            .field("emissions", &self.emissions)
            .field("subscribed", &self.subscriber.is_some())
            .finish()
    }
}
