use anyhow::{Result, bail};
use pkg_constants::rbac::{MAX_NAME_LEN, MAX_SUBDOMAIN_LEN};

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Validate a DNS-1123 label: namespaces and release names.
/// Rules: lowercase `[a-z0-9-]`, max 63 chars, alphanumeric at both ends.
pub fn validate_label(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("{} must not be empty", kind);
    }
    if name.len() > MAX_NAME_LEN {
        bail!(
            "{} '{}' exceeds {} characters (got {})",
            kind,
            name,
            MAX_NAME_LEN,
            name.len()
        );
    }
    if name.starts_with('-') || name.ends_with('-') {
        bail!("{} '{}' must not start or end with a hyphen", kind, name);
    }
    if !name.chars().all(is_name_char) {
        bail!(
            "{} '{}' must contain only lowercase letters, digits, and hyphens [a-z0-9-]",
            kind,
            name
        );
    }
    Ok(())
}

/// Validate a DNS-1123 subdomain: the `metadata.name` of RBAC objects and
/// service accounts. Dot-separated labels, max 253 chars overall.
pub fn validate_object_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("object name must not be empty");
    }
    if name.len() > MAX_SUBDOMAIN_LEN {
        bail!(
            "object name '{}' exceeds {} characters (got {})",
            name,
            MAX_SUBDOMAIN_LEN,
            name.len()
        );
    }
    for segment in name.split('.') {
        if segment.is_empty()
            || segment.starts_with('-')
            || segment.ends_with('-')
            || !segment.chars().all(is_name_char)
        {
            bail!(
                "object name '{}' is not a valid DNS-1123 subdomain (lowercase [a-z0-9-.], alphanumeric at each end)",
                name
            );
        }
    }
    Ok(())
}
