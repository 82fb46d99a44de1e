//
//  atlassian-client
//  cli/jira.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jira issue and attachment commands
//!
//! The REST API version comes from `--api-version`, falling back to the
//! `jira_version` config key.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::jira::models::{IssueFields, NamedRef, ProjectRef};
use crate::api::jira::{AttachmentService, CustomFields, IssueScheme, IssueService, UpdateOperations};

use super::{print_json, split_list, GlobalOptions, Session};

/// Work with Jira issues and attachments
#[derive(Args, Debug)]
pub struct JiraCommand {
    /// Jira REST API version (2 or 3)
    #[arg(long, global = true)]
    pub api_version: Option<String>,

    #[command(subcommand)]
    pub command: JiraSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JiraSubcommand {
    /// Manage issues
    Issue {
        #[command(subcommand)]
        command: IssueSubcommand,
    },

    /// Manage attachments
    Attachment {
        #[command(subcommand)]
        command: AttachmentSubcommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum IssueSubcommand {
    /// Show an issue
    #[command(visible_alias = "view")]
    Get(GetArgs),

    /// Create an issue
    Create(CreateArgs),

    /// Edit an issue
    Edit(EditArgs),

    /// Delete an issue
    Delete(DeleteArgs),

    /// Assign an issue to an account
    Assign(AssignArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Issue key or id
    pub key: String,

    /// Comma separated fields to return
    #[arg(long)]
    pub fields: Option<String>,

    /// Comma separated entities to expand
    #[arg(long)]
    pub expand: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project key
    #[arg(long, short = 'p')]
    pub project: String,

    /// Issue type name
    #[arg(long, short = 't', default_value = "Task")]
    pub issue_type: String,

    /// Summary line
    #[arg(long, short = 's')]
    pub summary: String,

    /// Labels (repeatable)
    #[arg(long, short = 'l', action = clap::ArgAction::Append)]
    pub label: Vec<String>,

    /// Custom field as id=value with JSON value inference (repeatable)
    #[arg(long = "custom", action = clap::ArgAction::Append)]
    pub custom: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Issue key or id
    pub key: String,

    /// Custom field as id=value (repeatable)
    #[arg(long = "custom", action = clap::ArgAction::Append)]
    pub custom: Vec<String>,

    /// Label to add (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub add_label: Vec<String>,

    /// Label to remove (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub remove_label: Vec<String>,

    /// Replace the summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Do not e-mail watchers about the change
    #[arg(long)]
    pub no_notify: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Issue key or id
    pub key: String,

    /// Also delete the issue's subtasks
    #[arg(long)]
    pub subtasks: bool,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Issue key or id
    pub key: String,

    /// Account id of the assignee
    pub account_id: String,
}

#[derive(Subcommand, Debug)]
pub enum AttachmentSubcommand {
    /// Upload a file to an issue
    Add {
        /// Issue key or id
        key: String,
        /// File to upload
        file: PathBuf,
    },

    /// Show attachment metadata
    Get {
        /// Attachment id
        id: String,
    },

    /// Delete an attachment
    Delete {
        /// Attachment id
        id: String,
    },
}

impl JiraCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::connect(global)?;
        let version = self
            .api_version
            .clone()
            .unwrap_or_else(|| session.config().defaults.jira_version.clone());

        match &self.command {
            JiraSubcommand::Issue { command } => {
                let service = IssueService::new(session.connector(), &version)?;
                run_issue(&service, &session, command, global).await
            }
            JiraSubcommand::Attachment { command } => {
                let service = AttachmentService::new(session.connector(), &version)?;
                run_attachment(&service, &session, command, global).await
            }
        }
    }
}

async fn run_issue(
    service: &IssueService,
    session: &Session,
    command: &IssueSubcommand,
    global: &GlobalOptions,
) -> Result<()> {
    let ctx = session.context();

    match command {
        IssueSubcommand::Get(args) => {
            let fields = split_list(args.fields.as_deref());
            let expand = split_list(args.expand.as_deref());
            let (issue, _) = service.get(&ctx, &args.key, &fields, &expand).await?;

            if global.json {
                return print_json(&issue);
            }

            let fields = issue.fields.unwrap_or_default();
            println!("{}  {}", issue.key, fields.summary);
            if let Some(name) = fields.status.and_then(|s| s.name) {
                println!("Status:   {}", name);
            }
            if let Some(name) = fields.issue_type.and_then(|t| t.name) {
                println!("Type:     {}", name);
            }
            if let Some(assignee) = fields.assignee {
                println!(
                    "Assignee: {}",
                    assignee.display_name.unwrap_or(assignee.account_id)
                );
            }
            if !fields.labels.is_empty() {
                println!("Labels:   {}", fields.labels.join(", "));
            }
            Ok(())
        }

        IssueSubcommand::Create(args) => {
            let payload = IssueScheme {
                fields: Some(IssueFields {
                    summary: args.summary.clone(),
                    project: Some(ProjectRef {
                        id: None,
                        key: Some(args.project.clone()),
                    }),
                    issue_type: Some(NamedRef {
                        id: None,
                        name: Some(args.issue_type.clone()),
                    }),
                    labels: args.label.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            };
            let custom = custom_fields(&args.custom)?;

            let (created, _) = service
                .create(&ctx, &payload, (!custom.is_empty()).then_some(&custom))
                .await?;

            if global.json {
                return print_json(&created);
            }
            println!("Created {}", created.key);
            Ok(())
        }

        IssueSubcommand::Edit(args) => {
            let custom = custom_fields(&args.custom)?;

            let mut operations = UpdateOperations::new();
            for label in &args.add_label {
                operations.add_array_operation("labels", &[("add", label.as_str())])?;
            }
            for label in &args.remove_label {
                operations.add_array_operation("labels", &[("remove", label.as_str())])?;
            }
            if let Some(summary) = &args.summary {
                operations.add_string_operation("summary", "set", summary)?;
            }

            if custom.is_empty() && operations.is_empty() {
                bail!("Nothing to change. Pass --custom, --summary, --add-label or --remove-label");
            }

            service
                .update(
                    &ctx,
                    &args.key,
                    !args.no_notify,
                    &IssueScheme::default(),
                    (!custom.is_empty()).then_some(&custom),
                    (!operations.is_empty()).then_some(&operations),
                )
                .await?;
            println!("Updated {}", args.key);
            Ok(())
        }

        IssueSubcommand::Delete(args) => {
            service.delete(&ctx, &args.key, args.subtasks).await?;
            println!("Deleted {}", args.key);
            Ok(())
        }

        IssueSubcommand::Assign(args) => {
            service.assign(&ctx, &args.key, &args.account_id).await?;
            println!("Assigned {} to {}", args.key, args.account_id);
            Ok(())
        }
    }
}

async fn run_attachment(
    service: &AttachmentService,
    session: &Session,
    command: &AttachmentSubcommand,
    global: &GlobalOptions,
) -> Result<()> {
    let ctx = session.context();

    match command {
        AttachmentSubcommand::Add { key, file } => {
            let content =
                std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow!("Invalid file name: {}", file.display()))?;

            let (attachments, _) = service.add(&ctx, key, file_name, &content).await?;
            if global.json {
                return print_json(&attachments);
            }
            for attachment in attachments {
                println!("Attached {} ({} bytes) as {}", attachment.filename, attachment.size, attachment.id);
            }
            Ok(())
        }

        AttachmentSubcommand::Get { id } => {
            let (metadata, _) = service.metadata(&ctx, id).await?;
            if global.json {
                return print_json(&metadata);
            }
            println!("{}  {}  {} bytes", metadata.id, metadata.filename, metadata.size);
            if !metadata.mime_type.is_empty() {
                println!("Type:    {}", metadata.mime_type);
            }
            if !metadata.created.is_empty() {
                println!("Created: {}", metadata.created);
            }
            Ok(())
        }

        AttachmentSubcommand::Delete { id } => {
            service.delete(&ctx, id).await?;
            println!("Deleted attachment {}", id);
            Ok(())
        }
    }
}

/// Parses `id=value` pairs into custom fields, inferring JSON values.
fn custom_fields(pairs: &[String]) -> Result<CustomFields> {
    let mut fields = CustomFields::new();
    for pair in pairs {
        let Some((id, raw)) = pair.split_once('=') else {
            bail!("Invalid custom field: {}. Expected id=value", pair);
        };
        let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        fields.raw(id, value)?;
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Required};

    #[test]
    fn test_custom_fields() {
        let fields = custom_fields(&[
            "customfield_10043=1000.3232".to_string(),
            "customfield_10050=Some text".to_string(),
        ])
        .unwrap();
        assert_eq!(fields.len(), 2);

        let merged = IssueScheme::default().merge_custom_fields(Some(&fields)).unwrap();
        assert_eq!(merged["fields"]["customfield_10043"], 1000.3232);
        assert_eq!(merged["fields"]["customfield_10050"], "Some text");
    }

    #[test]
    fn test_custom_fields_rejects_bad_pairs() {
        assert!(custom_fields(&["customfield_10043".to_string()]).is_err());

        let err = custom_fields(&["=1".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::Missing(Required::FieldId))
        ));
    }
}
