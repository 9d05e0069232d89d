//! Topic models

pub mod nmf;

pub use nmf::{Nmf, NmfConfig, NmfError, NmfModel};
