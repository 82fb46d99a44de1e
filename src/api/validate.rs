//
//  atlassian-client
//  api/validate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Required-argument checks run before any request is built.

use crate::api::common::{ApiError, Required};

/// Returns the first empty value of `fields`, in order, as
/// [`ApiError::Missing`].
///
/// Only the empty string counts as missing; whitespace is passed through
/// to the server as given.
///
/// # Example
///
/// ```rust
/// use atlassian_client::api::common::{ApiError, Required};
/// use atlassian_client::api::validate::require;
///
/// let err = require(&[(Required::WorkspaceId, "ws-1"), (Required::ObjectId, "")]).unwrap_err();
/// assert!(matches!(err, ApiError::Missing(Required::ObjectId)));
/// ```
pub fn require(fields: &[(Required, &str)]) -> Result<(), ApiError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((required, _)) => Err(ApiError::Missing(*required)),
        None => Ok(()),
    }
}

/// Unwraps an optional argument that is mandatory for this call.
pub fn require_some<T>(required: Required, value: Option<T>) -> Result<T, ApiError> {
    value.ok_or(ApiError::Missing(required))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        assert!(require(&[(Required::Workspace, "acme"), (Required::Repository, "api")]).is_ok());
        assert!(require(&[]).is_ok());
    }

    #[test]
    fn test_first_missing_wins() {
        let err = require(&[
            (Required::ContentId, ""),
            (Required::ContentType, ""),
        ])
        .unwrap_err();
        assert!(matches!(err, ApiError::Missing(Required::ContentId)));

        let err = require(&[
            (Required::ContentId, "100100101"),
            (Required::ContentType, ""),
        ])
        .unwrap_err();
        assert!(matches!(err, ApiError::Missing(Required::ContentType)));
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        assert!(require(&[(Required::ContentId, " "), (Required::Cql, "\t")]).is_ok());
    }

    #[test]
    fn test_require_some() {
        assert_eq!(require_some(Required::CustomFields, Some(3)).unwrap(), 3);
        assert!(matches!(
            require_some::<u8>(Required::CustomFields, None),
            Err(ApiError::Missing(Required::CustomFields))
        ));
    }
}
