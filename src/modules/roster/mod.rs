pub mod controller;
pub mod router;

pub use router::{init_roster_router, init_selection_router};
