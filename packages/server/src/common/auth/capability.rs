/// Capabilities checked at service entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Submit a new project for review
    SubmitProjects,

    /// List one's own submissions, whatever their status
    ViewOwnProjects,

    /// List pending projects, approve or reject them, read moderation stats
    ModerateProjects,
}

impl Capability {
    /// Whether this capability needs the admin role (rather than any login)
    pub fn requires_admin(&self) -> bool {
        matches!(self, Capability::ModerateProjects)
    }
}
