pub mod config;
pub mod constants;
pub mod icons;
pub mod navigation;
pub mod storage;
pub mod theme;
