//! Library half of the `wiki` binary: the inspect transforms.

pub mod transforms;
