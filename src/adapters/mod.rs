//! Adapter implementations of the port traits.

pub mod live;
pub mod manual;
pub mod recording;
pub mod replaying;
