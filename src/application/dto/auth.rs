/// Identity of an admin whose bearer token was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub subject: String,
}

impl AdminUser {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}
