pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod packer;
pub mod session;

pub use catalog::Catalog;
pub use error::{Result, StockError};
pub use models::{ContainerId, ContainerType, FoodPacket, PackedContainer, SizeClass};
pub use packer::PoolEntry;
pub use session::{PackMode, PlanSession, PlanSummary};
