pub mod paint;
pub mod path;
pub mod stroke;
