pub(crate) mod arena;
pub(crate) mod builder;
pub(crate) mod config;
