pub mod modules;
pub mod vendor;
