pub mod cliente;
pub mod ponto;
