//! HTTP handlers, one module per endpoint group.

pub(crate) mod locations;
pub(crate) mod meta;
pub(crate) mod predict;
