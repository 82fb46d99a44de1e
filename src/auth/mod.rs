//
//  atlassian-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The client does not store or rotate credentials. It asks an injected
//! [`Authentication`] provider what to attach to each request:
//!
//! - **Basic authentication**: account e-mail plus API token (Atlassian Cloud)
//! - **Bearer token**: personal access tokens and OAuth access tokens
//! - **User agent**: an optional custom `User-Agent` header
//!
//! [`Credentials`] is the provided implementation.
//!
//! ## Example
//!
//! ```rust
//! use atlassian_client::auth::{Authentication, Credentials};
//!
//! let credentials = Credentials::default()
//!     .with_basic_auth("mail@example.com", "api-token")
//!     .with_user_agent("curl/7.54.0");
//!
//! assert!(credentials.has_basic_auth());
//! assert_eq!(credentials.user_agent(), Some("curl/7.54.0"));
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Username and secret used for HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// Account e-mail or username.
    pub username: String,
    /// API token or password.
    pub password: String,
}

impl BasicAuth {
    /// The `Authorization` header value: `Basic base64(username:password)`.
    pub fn header_value(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", encoded)
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Supplies what the request factory attaches to each request.
///
/// Implementations are read-only after construction and shared between
/// concurrent calls.
pub trait Authentication: Send + Sync {
    /// Basic credentials, when configured.
    fn basic_auth(&self) -> Option<&BasicAuth>;

    /// Bearer token, when configured. Ignored when basic auth is set.
    fn bearer_token(&self) -> Option<&str> {
        None
    }

    /// Custom user agent, when configured.
    fn user_agent(&self) -> Option<&str>;

    /// Whether basic credentials are configured.
    fn has_basic_auth(&self) -> bool {
        self.basic_auth().is_some()
    }

    /// Whether a custom user agent is configured.
    fn has_user_agent(&self) -> bool {
        self.user_agent().is_some()
    }
}

/// In-memory [`Authentication`] provider built with a small builder API.
#[derive(Clone, Default)]
pub struct Credentials {
    basic: Option<BasicAuth>,
    bearer: Option<String>,
    user_agent: Option<String>,
}

impl Credentials {
    /// Sets basic credentials. Empty usernames leave them unset.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        let username = username.into();
        if !username.is_empty() {
            self.basic = Some(BasicAuth {
                username,
                password: password.into(),
            });
        }
        self
    }

    /// Sets a bearer token. Empty tokens leave it unset.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.bearer = Some(token);
        }
        self
    }

    /// Sets a custom user agent. Empty values leave it unset.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.is_empty() {
            self.user_agent = Some(user_agent);
        }
        self
    }
}

impl Authentication for Credentials {
    fn basic_auth(&self) -> Option<&BasicAuth> {
        self.basic.as_ref()
    }

    fn bearer_token(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("basic", &self.basic)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
