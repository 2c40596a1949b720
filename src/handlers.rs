pub mod afd;
pub mod clientes;
pub mod ponto;
