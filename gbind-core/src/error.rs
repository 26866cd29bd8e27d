//! Errors raised by the ownership layer itself

/// A foreign call broke its promise to return a resource
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    #[error("foreign call returned a null {kind} handle")]
    Null { kind: &'static str },
}
