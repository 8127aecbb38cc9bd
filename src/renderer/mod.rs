//! Rendering adapter
//!
//! Turns a simulation snapshot into triangle-list vertex data. The host owns
//! the surface and uploads the vertices however it likes.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{build_frame, to_clip_space};
pub use vertex::Vertex;
