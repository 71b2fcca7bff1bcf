// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Observable state containers shared across screens.
//!
//! Each store is cheap to clone; clones share the same state. Every write
//! notifies all subscribers, and concurrent writes are last-write-wins.

pub mod categories;
pub mod session;

pub use categories::CategoryStore;
pub use session::{SessionState, SessionStore};
