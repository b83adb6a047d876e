pub mod background;
pub mod dataset_loader;
pub mod error;
