pub mod handler;
pub mod listener;

pub use handler::EventHandler;
pub use listener::UpdateListener;
