//! Minimal terminal runtime driving an [`App`] from key events and a gravity clock.

pub use self::{app::App, gravity::GravityClock, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod gravity;
mod runtime;
