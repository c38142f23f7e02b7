//! Scenario tests for the drawing workflow.
//!
//! These drive a [`DrawingView`](crate::state::DrawingView) through messages the
//! host map would send and check what the area channel and the panel end up with.
