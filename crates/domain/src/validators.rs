use crate::DomainError;

pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Lowercase a domain and drop a single trailing root dot.
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    trimmed.to_ascii_lowercase()
}

/// Validate hostname syntax (RFC 1123 labels, at least two of them).
///
/// A bare TLD such as `com` is rejected: listing it would block every name
/// under it. Expects an already normalized name (see [`normalize_domain`]).
pub fn validate_domain_name(domain: &str) -> Result<(), DomainError> {
    if domain.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain cannot be empty".to_string(),
        ));
    }
    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(DomainError::InvalidDomainName(format!(
            "{domain} exceeds {MAX_DOMAIN_LENGTH} characters"
        )));
    }

    if !domain.contains('.') {
        return Err(DomainError::InvalidDomainName(format!(
            "{domain} needs at least two labels"
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "{domain} contains an empty label"
            )));
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{label}' exceeds {MAX_LABEL_LENGTH} characters"
            )));
        }
        if !label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{label}' contains invalid characters"
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{label}' starts or ends with a hyphen"
            )));
        }
    }

    Ok(())
}
