pub mod args;
pub mod random;
pub mod scene;
pub mod scene_loader;
