pub mod frame;
pub mod image;
pub mod ops;

pub use frame::AppState;
