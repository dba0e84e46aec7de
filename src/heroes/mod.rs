//! The heroes data-access facade and resource model.
//!
//! This module is the core of the crate: [`HeroService`] exposes one
//! operation per CRUD/search intent over the remote heroes collection,
//! with uniform fail-open error recovery and activity logging.
//!
//! # Overview
//!
//! - [`HeroService`]: the facade itself
//! - [`Hero`]: the resource record, with backend-defined field passthrough
//! - [`HeroRef`]: a by-id or by-value reference accepted by `remove`
//! - [`Ack`]: the opaque acknowledgement returned by `update`

mod hero;
mod service;

pub use hero::{Ack, Hero, HeroRef};
pub use service::HeroService;
