//! Shared application domain modules.

pub mod context;
pub mod domain;
pub mod uuids;

#[cfg(test)]
mod test;
