//! Client and controller layer for a container-infrastructure admin
//! dashboard: typed HTTP resource clients, view-model shaping, and the
//! view controllers that glue them to a host UI.

#![allow(async_fn_in_trait)]

pub mod client;
pub mod components;
pub mod controllers;
pub mod error;
pub mod models;
pub mod notifications;
pub mod session;

pub use error::{ApiError, ControllerError};
pub use session::Session;
