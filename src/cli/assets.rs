//
//  atlassian-client
//  cli/assets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Assets object commands
//!
//! The workspace id comes from `--workspace`, falling back to the
//! `assets_workspace` config key.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use crate::api::assets::models::Object;
use crate::api::assets::ObjectService;
use crate::api::Paginated;

use super::{next_offset, print_json, GlobalOptions, Session};

/// Work with Assets objects
#[derive(Args, Debug)]
pub struct AssetsCommand {
    /// Assets workspace id
    #[arg(long, short = 'w', global = true, env = "ATLASSIAN_ASSETS_WORKSPACE")]
    pub workspace: Option<String>,

    #[command(subcommand)]
    pub command: AssetsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AssetsSubcommand {
    /// Manage objects
    Object {
        #[command(subcommand)]
        command: ObjectSubcommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ObjectSubcommand {
    /// Show an object
    Get { id: String },

    /// Find objects with an AQL query
    Filter(FilterArgs),

    /// Show the change history of an object
    History {
        id: String,

        /// Oldest entries first
        #[arg(long)]
        asc: bool,
    },

    /// Show the Jira issues linked to an object
    Tickets { id: String },

    /// Delete an object
    Delete { id: String },
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// AQL query, e.g. 'objectType = "Laptop"'
    pub aql: String,

    /// Include object attributes
    #[arg(long)]
    pub attributes: bool,

    /// Maximum results per page
    #[arg(long, short = 'L', default_value = "50")]
    pub limit: u64,

    /// Follow pagination until every page is read
    #[arg(long)]
    pub all: bool,
}

impl AssetsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::connect(global)?;
        let workspace = self
            .workspace
            .clone()
            .or_else(|| session.config().defaults.assets_workspace.clone())
            .ok_or_else(|| {
                anyhow!("No Assets workspace. Pass --workspace or run 'atl config set assets_workspace <id>'")
            })?;

        let service = ObjectService::new(session.connector());
        let ctx = session.context();

        let AssetsSubcommand::Object { command } = &self.command;
        match command {
            ObjectSubcommand::Get { id } => {
                let (object, _) = service.get(&ctx, &workspace, id).await?;
                if global.json {
                    return print_json(&object);
                }
                print_object(&object);
                for attribute in &object.attributes {
                    let values: Vec<String> = attribute
                        .object_attribute_values
                        .iter()
                        .filter_map(|v| v.display_value.as_ref().or(v.value.as_ref()))
                        .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                        .collect();
                    println!("  {:<12} {}", attribute.object_type_attribute_id, values.join(", "));
                }
                Ok(())
            }

            ObjectSubcommand::Filter(args) => {
                let mut objects = Vec::new();
                let mut start = 0;
                loop {
                    let (page, _) = service
                        .filter(&ctx, &workspace, &args.aql, args.attributes, start, args.limit)
                        .await?;
                    let next = page.continuation();
                    objects.extend(page.values);

                    match next_offset(args.all, next, start) {
                        Some(offset) => start = offset,
                        None => break,
                    }
                }

                if global.json {
                    return print_json(&objects);
                }
                objects.iter().for_each(print_object);
                Ok(())
            }

            ObjectSubcommand::History { id, asc } => {
                let (history, _) = service.history(&ctx, &workspace, id, *asc).await?;
                if global.json {
                    return print_json(&history);
                }
                for entry in &history {
                    let actor = entry.actor.as_ref().map(|a| a.display_name.as_str()).unwrap_or("-");
                    println!(
                        "{}  {}  {}: {} -> {}",
                        entry.created, actor, entry.affected_attribute, entry.old_value, entry.new_value
                    );
                }
                Ok(())
            }

            ObjectSubcommand::Tickets { id } => {
                let (tickets, _) = service.relation(&ctx, &workspace, id).await?;
                if global.json {
                    return print_json(&tickets);
                }
                for ticket in &tickets.tickets {
                    println!("{}  {}", ticket.key, ticket.title);
                }
                Ok(())
            }

            ObjectSubcommand::Delete { id } => {
                service.delete(&ctx, &workspace, id).await?;
                println!("Deleted object {}", id);
                Ok(())
            }
        }
    }
}

fn print_object(object: &Object) {
    let kind = object.object_type.as_ref().map(|t| t.name.as_str()).unwrap_or("-");
    println!("{:<12} {:<16} {}", object.object_key, kind, object.label);
}
