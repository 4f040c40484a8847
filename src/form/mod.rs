//! Form state adapter for formguard
//!
//! Binds a schema mapping to input change/submit events without committing
//! to any UI framework: the host pushes value changes in and reads current
//! values and errors back out.

mod state;

pub use state::FormState;
