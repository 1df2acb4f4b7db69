//! Cart Handlers

pub(crate) mod delete;
pub(crate) mod details;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod mine;
pub(crate) mod open;
