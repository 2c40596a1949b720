pub mod afd_service;
pub mod cliente_service;
pub mod ponto_service;

pub use afd_service::AfdService;
pub use cliente_service::ClienteService;
pub use ponto_service::PontoService;
