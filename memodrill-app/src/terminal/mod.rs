pub mod keys;
pub mod reviewer;
pub mod theme;
pub mod viewer;
