mod sweep;

pub use sweep::Sweep;
