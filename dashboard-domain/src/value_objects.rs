pub mod event_kind;
pub mod identifiers;
pub mod locker_size;
pub mod palette;

pub use event_kind::*;
pub use identifiers::*;
pub use locker_size::*;
pub use palette::*;
