mod crt;
mod modulo_sqrt;

pub use crt::crt;
pub use modulo_sqrt::{ sqrt_mod4p, sqrt_modp };
