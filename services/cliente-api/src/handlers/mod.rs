pub mod clientes;
pub mod health;

pub use clientes::*;
pub use health::*;
