pub mod console;
pub mod null;
