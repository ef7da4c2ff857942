//! Operator implementations used by the evaluation engine

pub(crate) mod binary;
