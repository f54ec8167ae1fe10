//! Field status checks.
//!
//! Generated `validate_field_status` methods call into this module when a
//! field marked experimental, deprecated or not implemented differs from its
//! default.

use super::FieldPath;
use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
    NotImplemented,
    Deprecated,
}

impl FieldStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::NotImplemented => "not implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Report a non-default field with special status.
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    report(field_path.to_string(), "field", status, diag);
}

/// Report a non-default section with special status.
pub fn check_section_status(section: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    report(format!("[{section}]"), "section", status, diag);
}

fn report(path: String, what: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    // Paths are few and reported once per load.
    let path = FieldPath::new(Box::leak(path.into_boxed_str()));

    match status {
        FieldStatus::NotImplemented => diag.error_with_hint(
            path,
            format!("this {what} is {}", status.label()),
            format!("remove this {what} or wait for a future release"),
        ),
        FieldStatus::Deprecated => diag.warn(
            path,
            format!("this {what} is deprecated and will be removed in a future version"),
        ),
        FieldStatus::Experimental => diag.experimental_hint(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_is_error() {
        let mut diag = ConfigDiagnostics::new();
        check_field_status("site.x", FieldStatus::NotImplemented, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.x");
        assert!(diag.errors()[0].message.contains("not implemented"));
    }

    #[test]
    fn test_experimental_is_hint() {
        let mut diag = ConfigDiagnostics::new();
        check_section_status("site.y", FieldStatus::Experimental, &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.hints().len(), 1);
        assert_eq!(diag.hints()[0].as_str(), "[site.y]");
    }

    #[test]
    fn test_non_default_color_scheme_hints() {
        let config = crate::config::test_parse_config("[site.header]\ncolor_scheme = \"dark\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate_field_status(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.hints()[0].as_str(), "site.header.color_scheme");
    }
}
