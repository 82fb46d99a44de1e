//
//  atlassian-client
//  api/payload.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Body Encoding
//!
//! JSON bodies go through [`transform_struct_to_reader`], which rejects a
//! missing payload and payloads that are not JSON documents before
//! serializing them into a reusable [`PayloadReader`]. File uploads use
//! [`Multipart`] together with the form request variant of the client.

use std::io::Cursor;

use bytes::{BufMut, Bytes, BytesMut};
use serde::Serialize;
use serde_json::Value;

use crate::api::common::ApiError;

/// Content type used for every JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// An encoded request body.
///
/// Cloning is cheap; every clone and every [`reader`](Self::reader) starts
/// from the first byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadReader {
    bytes: Bytes,
}

impl PayloadReader {
    /// Wraps already encoded bytes.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// The encoded bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Consumes the reader, returning the encoded bytes.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// A fresh `std::io::Read` over the encoded bytes.
    pub fn reader(&self) -> Cursor<Bytes> {
        Cursor::new(self.bytes.clone())
    }

    /// Number of encoded bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the body is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serializes a JSON request body.
///
/// # Errors
///
/// - [`ApiError::NilPayload`] when `payload` is `None` or serializes to `null`
/// - [`ApiError::UnsupportedPayload`] when it serializes to a bare string,
///   number or boolean instead of an object or array
/// - [`ApiError::Encode`] when serialization itself fails
///
/// # Example
///
/// ```rust
/// use atlassian_client::api::payload::transform_struct_to_reader;
/// use serde_json::json;
///
/// let body = json!({"key": "key", "value": "value"});
/// let reader = transform_struct_to_reader(Some(&body))?;
/// assert_eq!(reader.bytes().as_ref(), br#"{"key":"key","value":"value"}"#);
/// # Ok::<(), atlassian_client::api::ApiError>(())
/// ```
pub fn transform_struct_to_reader<T>(payload: Option<&T>) -> Result<PayloadReader, ApiError>
where
    T: Serialize + ?Sized,
{
    let payload = payload.ok_or(ApiError::NilPayload)?;

    match serde_json::to_value(payload).map_err(ApiError::Encode)? {
        Value::Null => Err(ApiError::NilPayload),
        Value::Object(_) | Value::Array(_) => {
            let bytes = serde_json::to_vec(payload).map_err(ApiError::Encode)?;
            Ok(PayloadReader::from_bytes(bytes))
        }
        _ => Err(ApiError::UnsupportedPayload),
    }
}

/// A `multipart/form-data` body with a single file part.
#[derive(Debug, Clone)]
pub struct Multipart {
    boundary: String,
    body: Bytes,
}

impl Multipart {
    /// Builds a body containing `content` as the file `file_name` under the
    /// form field `field`.
    pub fn file(field: &str, file_name: &str, content: &[u8]) -> Self {
        let boundary = format!("------------------------{:016x}", rand::random::<u64>());

        let mut body = BytesMut::with_capacity(content.len() + 256);
        body.put_slice(format!("--{}\r\n", boundary).as_bytes());
        body.put_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                escape_quotes(field),
                escape_quotes(file_name)
            )
            .as_bytes(),
        );
        body.put_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.put_slice(content);
        body.put_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        Self {
            boundary,
            body: body.freeze(),
        }
    }

    /// The `Content-Type` header value, including the boundary.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// The boundary separating the parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Converts the body into a request payload.
    pub fn into_payload(self) -> PayloadReader {
        PayloadReader::from_bytes(self.body)
    }
}

fn escape_quotes(value: &str) -> String {
    value.replace('"', "%22")
}
