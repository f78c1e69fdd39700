pub mod density;

pub use density::KernelDensity;
