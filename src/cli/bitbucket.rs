//
//  atlassian-client
//  cli/bitbucket.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitbucket Cloud workspace permission commands
//!
//! These talk to `--api-url` (api.bitbucket.org by default) rather than the
//! configured Atlassian site.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use crate::api::bitbucket::{Page, RepositoryPermission, WorkspacePermissionService};

use super::{print_json, GlobalOptions, Session};

const BITBUCKET_API: &str = "https://api.bitbucket.org";

/// Inspect Bitbucket workspace permissions
#[derive(Args, Debug)]
pub struct BitbucketCommand {
    /// Workspace slug
    #[arg(long, short = 'w', global = true, env = "BB_WORKSPACE")]
    pub workspace: Option<String>,

    /// Bitbucket API base URL
    #[arg(long, global = true, default_value = BITBUCKET_API)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: BitbucketSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BitbucketSubcommand {
    /// List workspace members and their permission
    Members {
        /// Filter, e.g. 'permission="owner"'
        #[arg(long, short = 'q')]
        query: Option<String>,
    },

    /// List repository permissions in the workspace
    Permissions {
        /// Restrict to one repository slug
        repository: Option<String>,

        /// Filter, e.g. 'permission>"read"'
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Sort field, e.g. 'user.display_name'
        #[arg(long)]
        sort: Option<String>,
    },
}

impl BitbucketCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::connect_to(global, &self.api_url)?;
        let workspace = self
            .workspace
            .clone()
            .or_else(|| session.config().defaults.bitbucket_workspace.clone())
            .ok_or_else(|| {
                anyhow!("No workspace. Pass --workspace or run 'atl config set bitbucket_workspace <slug>'")
            })?;

        let service = WorkspacePermissionService::new(session.connector());
        let ctx = session.context();

        match &self.command {
            BitbucketSubcommand::Members { query } => {
                let (page, _) = service
                    .members(&ctx, &workspace, query.as_deref().unwrap_or_default())
                    .await?;
                if global.json {
                    return print_json(&page);
                }
                for membership in &page.values {
                    let name = membership.user.as_ref().map(|u| u.display_name.as_str()).unwrap_or("-");
                    println!("{:<14} {}", membership.permission, name);
                }
                Ok(())
            }

            BitbucketSubcommand::Permissions {
                repository,
                query,
                sort,
            } => {
                let query = query.as_deref().unwrap_or_default();
                let sort = sort.as_deref().unwrap_or_default();
                let (page, _) = match repository {
                    Some(repository) => service.repository(&ctx, &workspace, repository, query, sort).await?,
                    None => service.repositories(&ctx, &workspace, query, sort).await?,
                };
                if global.json {
                    return print_json(&page);
                }
                print_permissions(&page);
                Ok(())
            }
        }
    }
}

fn print_permissions(page: &Page<RepositoryPermission>) {
    for permission in &page.values {
        let repository = permission
            .repository
            .as_ref()
            .map(|r| r.full_name.as_str())
            .unwrap_or("-");
        let user = permission.user.as_ref().map(|u| u.display_name.as_str()).unwrap_or("-");
        println!("{:<8} {:<32} {}", permission.permission, repository, user);
    }
    if page.next.is_some() {
        eprintln!("More results available; narrow the query with --query");
    }
}
