use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to generate session id: {0}")]
    SessionIdGeneration(String),

    #[error("session store lock poisoned")]
    StorePoisoned,
}
