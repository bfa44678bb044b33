pub(crate) mod component;
pub(crate) mod config;
pub(crate) mod connective;
pub(crate) mod feed_forward;
