#![forbid(unsafe_code)]

pub mod repository;

pub use repository::{
    InMemoryStore, QuizResultRepository, StorageError, User, UserRepository,
};
