pub mod catcher;
pub mod conversion;
