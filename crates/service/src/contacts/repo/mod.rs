pub mod seaorm;

pub use seaorm::SeaOrmContactRepository;
