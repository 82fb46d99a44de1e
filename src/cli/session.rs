//
//  atlassian-client
//  cli/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared client construction for the CLI commands.
//!
//! Flags and `ATLASSIAN_*` variables win over the config file. The token is
//! only ever read from flags or the environment.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::api::{Client, Connector, ReqwestTransport, RequestContext};
use crate::auth::Credentials;
use crate::config::Config;

use super::GlobalOptions;

/// A configured client plus the settings commands fall back on.
pub struct Session {
    client: Arc<Client>,
    config: Config,
    timeout: Duration,
}

impl Session {
    /// Loads the config file and connects to the configured site.
    pub fn connect(global: &GlobalOptions) -> Result<Self> {
        Self::from_config(global, Config::load()?, None)
    }

    /// Like [`Session::connect`], but against `site` regardless of the
    /// configured one.
    pub fn connect_to(global: &GlobalOptions, site: &str) -> Result<Self> {
        Self::from_config(global, Config::load()?, Some(site))
    }

    pub fn from_config(global: &GlobalOptions, config: Config, site: Option<&str>) -> Result<Self> {
        let site = site
            .map(String::from)
            .or_else(|| global.site.clone())
            .or_else(|| config.site.url.clone())
            .ok_or_else(|| {
                anyhow!("No site configured. Pass --site, set ATLASSIAN_SITE or run 'atl config set site <url>'")
            })?;

        let credentials = credentials(global, &config);
        let timeout = Duration::from_secs(global.timeout.unwrap_or(config.site.timeout));

        let transport = Arc::new(ReqwestTransport::new()?);
        let client = Client::new(transport, &site, credentials)?;
        debug!(site = %client.site(), timeout = ?timeout, "session ready");

        Ok(Self {
            client: Arc::new(client),
            config,
            timeout,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The client as the connector the resource services are built on.
    pub fn connector(&self) -> Arc<dyn Connector> {
        self.client.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// A request context bounded by the session timeout and cancelled on
    /// Ctrl+C.
    pub fn context(&self) -> RequestContext {
        let ctx = RequestContext::background().with_timeout(self.timeout);

        let watcher = ctx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("interrupt received, cancelling request");
                watcher.cancel();
            }
        });

        ctx
    }
}

/// Basic auth when an e-mail is known, bearer token otherwise.
fn credentials(global: &GlobalOptions, config: &Config) -> Credentials {
    let token = global.token.clone().unwrap_or_default();
    let email = global
        .email
        .clone()
        .or_else(|| config.site.email.clone())
        .unwrap_or_default();

    let credentials = if email.is_empty() {
        Credentials::default().with_bearer_token(token)
    } else {
        Credentials::default().with_basic_auth(email, token)
    };

    match global.user_agent.as_ref().or(config.site.user_agent.as_ref()) {
        Some(user_agent) => credentials.with_user_agent(user_agent.clone()),
        None => credentials,
    }
}
