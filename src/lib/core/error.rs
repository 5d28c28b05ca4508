use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("No todo with id {0}")]
    NotFound(u64),
    #[error("Name cannot be blank!")]
    NameRequired,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
