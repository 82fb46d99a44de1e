//
//  atlassian-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends one request through the same client the resource commands use, so
//! credentials, the site and the timeout apply. Useful for endpoints that
//! have no dedicated command.
//!
//! ## Examples
//!
//! ```bash
//! # Read an issue
//! atl api rest/api/3/issue/DUMMY-3
//!
//! # Create a Confluence content property
//! atl api -X POST wiki/rest/api/content/12345/property \
//!     -F key=reviewed -F value.state=done
//! ```

use std::fs;

use anyhow::{bail, Result};
use clap::Args;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::{Map, Value};

use crate::api::{ApiError, Connector, PayloadReader};

use super::{GlobalOptions, Session};

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Endpoint relative to the site (e.g. rest/api/3/myself)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Extra request headers as 'Name: Value' (repeatable)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Body fields as key=value with JSON value inference; dots nest keys
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Body fields whose values are always strings
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read the JSON body from a file (- for stdin)
    #[arg(long, short = 'f')]
    pub input: Option<String>,

    /// Print the status line and response headers
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Suppress the response body
    #[arg(long)]
    pub silent: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::connect(global)?;
        let method = parse_method(&self.method)?;
        let body = self.build_body()?;

        let payload = body
            .as_ref()
            .map(|value| serde_json::to_vec(value).map(PayloadReader::from_bytes))
            .transpose()?;

        let ctx = session.context();
        let mut request = session
            .client()
            .new_request(&ctx, method, self.endpoint.trim_start_matches('/'), None, payload)?;

        for header in &self.header {
            let (name, value) = parse_header(header)?;
            request.headers.insert(name, value);
        }

        let response = match session.client().call(request).await {
            Ok(response) => response,
            Err(ApiError::InvalidStatusCode(response)) => {
                if !self.silent {
                    print_body(&response.bytes, global.json)?;
                }
                return Err(ApiError::InvalidStatusCode(response).into());
            }
            Err(e) => return Err(e.into()),
        };

        if self.include {
            println!("HTTP {} {}", response.code, response.endpoint);
            for (name, value) in response.headers.iter() {
                println!("{}: {}", name, value.to_str().unwrap_or(""));
            }
            println!();
        }

        if !self.silent {
            print_body(&response.bytes, global.json)?;
        }

        Ok(())
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input)?
            };
            return Ok(Some(serde_json::from_str(&content)?));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = Map::new();
        for field in &self.field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut body, key, infer_value(value));
        }
        for field in &self.raw_field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut body, key, Value::String(value.to_string()));
        }

        Ok(Some(Value::Object(body)))
    }
}

fn parse_method(method: &str) -> Result<Method> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        "HEAD" => Ok(Method::HEAD),
        "OPTIONS" => Ok(Method::OPTIONS),
        _ => bail!("Unsupported HTTP method: {}", method),
    }
}

fn parse_header(header: &str) -> Result<(HeaderName, HeaderValue)> {
    let Some((name, value)) = header.split_once(':') else {
        bail!("Invalid header format: {}. Expected 'Name: Value'", header);
    };
    Ok((
        HeaderName::from_bytes(name.trim().as_bytes())?,
        HeaderValue::from_str(value.trim())?,
    ))
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// Booleans, null, numbers and JSON literals keep their type; anything else
/// is a string.
fn infer_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::Number(n.into())
            } else if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                Value::Number(n)
            } else if raw.starts_with('[') || raw.starts_with('{') {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

fn print_body(bytes: &[u8], compact: bool) -> Result<()> {
    if bytes.is_empty() {
        return Ok(());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(json) if compact => println!("{}", json),
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", String::from_utf8_lossy(bytes)),
    }
    Ok(())
}
