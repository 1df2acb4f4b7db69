//! User Handlers

pub(crate) mod delete;
pub(crate) mod deletion_requests;
pub(crate) mod index;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod me;
pub(crate) mod request_deletion;
pub(crate) mod resolve_deletion;
pub(crate) mod role;
pub(crate) mod signup;
