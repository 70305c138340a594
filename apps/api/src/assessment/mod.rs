// Assessment submission: score -> rank career domains -> persist.
// The scoring engine never touches storage; this layer owns that hand-off.

pub mod handlers;
pub mod service;
