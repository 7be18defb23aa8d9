//! Manual fallback: type the employee id and the code instead of scanning.

use crate::features::qr_auth::LoginCredential;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    EmployeeId,
    Code,
}

impl FormField {
    #[must_use]
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::EmployeeId => "Employee ID is required",
            Self::Code => "QR code is required",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.required_message())
    }
}

/// Fields that failed local validation; nothing was sent.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{}", messages(.fields))]
pub struct FormError {
    pub fields: Vec<FormField>,
}

fn messages(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.required_message())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Values survive a failed submit so the user can correct and retry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualLoginForm {
    pub employee_id: String,
    pub code: String,
    submitting: bool,
    error: Option<String>,
}

impl ManualLoginForm {
    #[must_use]
    pub fn new(employee_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    /// Trimmed credential, or the list of empty required fields.
    ///
    /// # Errors
    /// Returns `FormError` if either field is blank after trimming.
    pub fn credential(&self) -> Result<LoginCredential, FormError> {
        let employee_id = self.employee_id.trim();
        let code = self.code.trim();

        let mut fields = Vec::new();
        if employee_id.is_empty() {
            fields.push(FormField::EmployeeId);
        }
        if code.is_empty() {
            fields.push(FormField::Code);
        }
        if !fields.is_empty() {
            return Err(FormError { fields });
        }

        Ok(LoginCredential {
            employee_id: employee_id.to_string(),
            code: code.to_string(),
        })
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Message from the last failed submit, shown verbatim.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub(crate) fn finish_submit(&mut self, error: Option<String>) {
        self.submitting = false;
        self.error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_is_trimmed() {
        let form = ManualLoginForm::new("  E100 ", "\txyz789\n");
        let credential = form.credential().unwrap();
        assert_eq!(credential.employee_id, "E100");
        assert_eq!(credential.code, "xyz789");
    }

    #[test]
    fn blank_fields_are_reported_together() {
        let err = ManualLoginForm::new("   ", "").credential().unwrap_err();
        assert_eq!(err.fields, vec![FormField::EmployeeId, FormField::Code]);
        assert_eq!(
            err.to_string(),
            "Employee ID is required; QR code is required"
        );

        let err = ManualLoginForm::new("E100", " ").credential().unwrap_err();
        assert_eq!(err.fields, vec![FormField::Code]);
    }

    #[test]
    fn no_format_rules_beyond_presence() {
        assert!(ManualLoginForm::new("x", "1").credential().is_ok());
    }

    #[test]
    fn submit_lifecycle_clears_busy_flag() {
        let mut form = ManualLoginForm::new("E100", "xyz789");
        form.begin_submit();
        assert!(form.is_submitting());
        form.finish_submit(Some("Employee not found".to_string()));
        assert!(!form.is_submitting());
        assert_eq!(form.last_error(), Some("Employee not found"));
        assert_eq!(form.employee_id, "E100");
    }
}
