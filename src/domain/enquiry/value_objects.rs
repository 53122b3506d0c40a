use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnquiryId(pub i64);

impl EnquiryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("enquiry id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EnquiryId> for i64 {
    fn from(value: EnquiryId) -> Self {
        value.0
    }
}

/// Lifecycle of a customer enquiry as tracked by the admin team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnquiryStatus {
    #[default]
    Pending,
    Contacted,
    SaleDone,
    SaleFailed,
    Cancelled,
}

impl EnquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "pending",
            EnquiryStatus::Contacted => "contacted",
            EnquiryStatus::SaleDone => "sale_done",
            EnquiryStatus::SaleFailed => "sale_failed",
            EnquiryStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnquiryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(EnquiryStatus::Pending),
            "contacted" => Ok(EnquiryStatus::Contacted),
            "sale_done" => Ok(EnquiryStatus::SaleDone),
            "sale_failed" => Ok(EnquiryStatus::SaleFailed),
            "cancelled" => Ok(EnquiryStatus::Cancelled),
            other => Err(DomainError::Validation(format!(
                "unknown enquiry status '{other}'"
            ))),
        }
    }
}

/// Optional free-text contact detail; blank strings are stored as NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactField(String);

impl ContactField {
    pub fn parse(value: Option<String>) -> Option<Self> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
