//! Demand-driven asynchronous pull sources.
//!
//! A pull source exposes a producer whose elements can only be obtained
//! asynchronously (file reads, externally paced computations) as a
//! backpressured stream. Downstream advertises demand, the engine never emits
//! beyond it, never runs two fetches at once, and signals completion or
//! failure exactly once.
//!
//! The [`core`] module holds the executor-independent protocol machinery: the
//! [`core::Pump`] state machine, the bulk and unfold fetch strategies, and the
//! [`core::PullSource`] blueprints. The [`std`] module (enabled by the `std`
//! feature) drives materialized sources on a caller-supplied tokio runtime.
#![no_std]

extern crate alloc;

/// Executor-independent pull engine.
pub mod core;
/// Tokio-backed materialization layer.
#[cfg(feature = "std")]
pub mod std;
