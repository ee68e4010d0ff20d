pub mod content;
pub mod leads;
pub mod seed;
