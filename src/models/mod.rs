pub mod container;
pub mod order;
pub mod packet;

pub use container::{ContainerId, ContainerType, IdGen, PackedContainer};
pub use order::{IdeaRequest, OrderKind, OrderRequest};
pub use packet::{FoodPacket, SizeClass};
