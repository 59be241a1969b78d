//! Structured packing telemetry
//!
//! The packing core reports progress as typed events through an observer
//! supplied by the caller, so the algorithms stay free of console calls.

/// A progress event emitted by the packing core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackEvent<'a> {
    /// The estimator is testing feasibility at this canvas size
    FillAttempt { size: u32 },
    /// The estimator settled on this canvas size
    SizeSelected { size: u32 },
    /// The shelf placer overflowed and the canvas was doubled
    SizeGrown { from: u32, to: u32 },
    /// A sprite received its final position
    SpritePlaced { name: &'a str, x: u32, y: u32 },
}

/// Sink for packing progress events.
pub trait PackObserver {
    fn on_event(&self, event: PackEvent<'_>);
}

/// Observer that reports progress on stderr.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl PackObserver for ConsoleObserver {
    fn on_event(&self, event: PackEvent<'_>) {
        match event {
            PackEvent::FillAttempt { size } => {
                eprintln!("trying to fill a {}x{} canvas", size, size);
            }
            PackEvent::SizeSelected { size } => {
                eprintln!("packing into a {}x{} canvas", size, size);
            }
            PackEvent::SizeGrown { from, to } => {
                eprintln!("shelf placement overflowed {}x{}, growing to {}x{}", from, from, to, to);
            }
            PackEvent::SpritePlaced { name, x, y } => {
                eprintln!("placed '{}' at ({}, {})", name, x, y);
            }
        }
    }
}

/// Observer that discards every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl PackObserver for NullObserver {
    fn on_event(&self, _event: PackEvent<'_>) {}
}
