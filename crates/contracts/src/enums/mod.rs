pub mod area_orientacao;
pub mod como_conheceu;
pub mod faixa_salarial;
pub mod genero;

pub use area_orientacao::AreaOrientacao;
pub use como_conheceu::ComoConheceu;
pub use faixa_salarial::FaixaSalarial;
pub use genero::Genero;
