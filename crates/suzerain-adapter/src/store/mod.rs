//! Store implementations of the domain's `FactionStore` port

pub mod in_memory;
