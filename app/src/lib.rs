//! Client application for the user service.
//!
//! # Overview
//! Models the single-page view: a counter, a deliberately slow computed
//! value, and a list of users fetched from the service on mount. Adding a
//! user only touches local state.
//!
//! # Design
//! - `state` holds plain values and a pure reducer.
//! - `store` applies actions and notifies subscribers on change.
//! - `view::App` drives the store and performs I/O through a `Transport`.
//! - `render` turns a state into text for the terminal binary.

pub mod compute;
pub mod render;
pub mod state;
pub mod store;
pub mod transport;
pub mod view;

pub use state::{Action, NewUser, ViewState};
pub use store::Store;
pub use transport::{Transport, TransportError, UreqTransport};
pub use view::{App, INITIAL_USER_ID};
