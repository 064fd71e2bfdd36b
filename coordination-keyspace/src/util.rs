use crate::error::{Error, Result};

/// Validate that an identifier is safe for use as a keyspace path segment.
///
/// Processor, version, and barrier identifiers are interpolated into
/// coordination-service keys. The key builders themselves accept any string
/// (uniqueness and well-formedness are the caller's responsibility), but a
/// caller minting identifiers can apply this check first: without it, a name
/// like `../../JobModelGeneration/jobModelVersion` could address arbitrary
/// nodes.
pub fn validate_identifier(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > 128 {
        return Err(Error::InvalidIdentifier(
            "identifier must be 1-128 characters".to_string(),
        ));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::InvalidIdentifier(
            "identifier contains invalid characters (only alphanumeric, dash, underscore allowed)"
                .to_string(),
        ));
    }
    Ok(())
}
