//! Rooms Module
//!
//! Room, call and user endpoints. Room and user operations are forwarded
//! to the homeserver through `MatrixService`; calls are handled by
//! `ElementService`.

pub mod types;

pub mod handlers;
