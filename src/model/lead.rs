use serde::{Deserialize, Serialize};

use super::qualification::Timeline;
use crate::error::ConfiguratorError;

/// Contact details collected under the cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timeline: Option<Timeline>,
}

impl LeadForm {
    /// Every problem with the form, in field order. Empty when it can be sent.
    pub fn validate(&self) -> Vec<ConfiguratorError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ConfiguratorError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            errors.push(ConfiguratorError::MissingField("email"));
        } else if let Err(e) = check_email(&self.email) {
            errors.push(e);
        }
        if self.phone.trim().is_empty() {
            errors.push(ConfiguratorError::MissingField("phone"));
        }
        errors
    }
}

/// Loose shape check: one `@` with something on both sides.
pub fn check_email(raw: &str) -> Result<&str, ConfiguratorError> {
    let email = raw.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(ConfiguratorError::InvalidEmail(email.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_reports_required_fields() {
        let errs = LeadForm::default().validate();
        assert_eq!(
            errs,
            vec![
                ConfiguratorError::MissingField("name"),
                ConfiguratorError::MissingField("email"),
                ConfiguratorError::MissingField("phone"),
            ]
        );
    }

    #[test]
    fn complete_form_passes_without_timeline() {
        let form = LeadForm {
            name: "Ana Pop".into(),
            email: "ana@example.ro".into(),
            phone: "0722 000 000".into(),
            timeline: None,
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn email_shape() {
        assert_eq!(check_email(" a@b.ro "), Ok("a@b.ro"));
        assert!(check_email("@b.ro").is_err());
        assert!(check_email("a@").is_err());
        assert!(check_email("a@b@c").is_err());
        assert!(check_email("plain").is_err());
    }
}
