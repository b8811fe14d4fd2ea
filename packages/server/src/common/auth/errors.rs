use thiserror::Error;

/// Authorization errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No valid session was presented.
    #[error("Unauthenticated: valid session required")]
    Unauthenticated,

    /// A valid session without the role the capability needs.
    #[error("Forbidden: admin access required")]
    Forbidden,

    /// The role store could not be consulted.
    #[error("Role lookup failed: {0}")]
    RoleLookup(#[source] anyhow::Error),
}
