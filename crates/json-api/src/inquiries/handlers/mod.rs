//! Inquiry Handlers

pub(crate) mod create;
