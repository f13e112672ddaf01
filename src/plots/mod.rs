pub mod histogram;

pub use histogram::render_distributions;
