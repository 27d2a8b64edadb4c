pub mod handlers;
pub mod server;
pub mod state;

pub use server::{build_router, serve};
pub use state::AppState;
