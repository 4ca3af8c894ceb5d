pub mod domain;
pub mod error;
pub mod view;

pub use view::ViewId;
