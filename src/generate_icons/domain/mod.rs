pub mod color;
pub mod error;
pub mod icon_processor_trait;
pub mod icon_target;
pub mod placement;
