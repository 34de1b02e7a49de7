//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session state machine is kept pure and separate from the network
//! driver so transitions can be unit tested without a browser.

pub mod session;
