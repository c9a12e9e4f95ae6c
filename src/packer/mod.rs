pub mod allocator;
pub mod bin_pack;
pub mod mixer;

pub use allocator::{allocate, PoolEntry, MAX_PROPORTION};
pub use bin_pack::pack;
pub use mixer::order_for_packing;
