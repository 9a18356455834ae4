pub mod initialize;
pub mod fund;
pub mod claim;
pub mod accessors;

pub use initialize::*;
pub use fund::*;
pub use claim::*;
pub use accessors::*;
