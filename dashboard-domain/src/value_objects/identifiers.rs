// Identifier value objects

use serde::{Deserialize, Serialize};

/// Synthetic stable row identifier, assigned sequentially at load time.
/// Addresses are the display identifier but are not guaranteed unique, so
/// click resolution prefers this id when the client supplies one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u32);
