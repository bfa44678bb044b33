pub(crate) mod description;
pub(crate) mod ease;
pub(crate) mod ops;
pub(crate) mod schedule;
