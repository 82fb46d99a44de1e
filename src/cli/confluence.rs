//
//  atlassian-client
//  cli/confluence.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Confluence search, content, children and property commands

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::api::confluence::{
    ChildrenDescendantsService, Content, ContentPage, ContentPropertyPayload, ContentPropertyService, ContentService,
    GetContentOptions, SearchContentOptions, SearchService,
};
use crate::api::Paginated;

use super::{next_offset, print_json, split_list, GlobalOptions, Session};

/// Search and browse Confluence content
#[derive(Args, Debug)]
pub struct ConfluenceCommand {
    #[command(subcommand)]
    pub command: ConfluenceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfluenceSubcommand {
    /// Search content with CQL
    Search(SearchArgs),

    /// List the children of a page
    Children(ChildrenArgs),

    /// List or show content
    Content {
        #[command(subcommand)]
        command: ContentSubcommand,
    },

    /// Manage content properties
    Property {
        #[command(subcommand)]
        command: PropertySubcommand,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// CQL query, e.g. "type=page AND space=DEV"
    pub cql: String,

    /// Maximum results per page
    #[arg(long, short = 'L', default_value = "25")]
    pub limit: u64,

    /// Cursor returned by a previous search
    #[arg(long)]
    pub cursor: Option<String>,

    /// Include archived spaces
    #[arg(long)]
    pub archived: bool,

    /// Search users instead of content
    #[arg(long)]
    pub users: bool,
}

#[derive(Args, Debug)]
pub struct ChildrenArgs {
    /// Content id
    pub id: String,

    /// Only children of this type (page, blogpost, comment, attachment)
    #[arg(long, short = 't')]
    pub r#type: Option<String>,

    /// Include all descendants, not just direct children
    #[arg(long)]
    pub descendants: bool,

    /// Maximum results
    #[arg(long, short = 'L', default_value = "25")]
    pub limit: u64,
}

#[derive(Subcommand, Debug)]
pub enum ContentSubcommand {
    /// List content
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one piece of content
    Get {
        /// Content id
        id: String,

        /// Historical version to load (0 for the latest)
        #[arg(long, default_value = "0")]
        revision: u64,

        /// Comma separated entities to expand
        #[arg(long)]
        expand: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Space key
    #[arg(long, short = 's')]
    pub space: Option<String>,

    /// Content type (page or blogpost)
    #[arg(long, short = 't')]
    pub r#type: Option<String>,

    /// Exact title
    #[arg(long)]
    pub title: Option<String>,

    /// Blog posts from this day (YYYY-MM-DD)
    #[arg(long)]
    pub posted: Option<String>,

    /// Maximum results per page
    #[arg(long, short = 'L', default_value = "25")]
    pub limit: u64,

    /// Follow pagination until every page is read
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum PropertySubcommand {
    /// List the properties of a content
    #[command(visible_alias = "ls")]
    List { id: String },

    /// Show one property
    Get { id: String, key: String },

    /// Create a property; VALUE is parsed as JSON when possible
    Set { id: String, key: String, value: String },

    /// Delete a property
    Delete { id: String, key: String },
}

impl ConfluenceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::connect(global)?;
        let ctx = session.context();

        match &self.command {
            ConfluenceSubcommand::Search(args) => {
                let service = SearchService::new(session.connector());
                let (page, _) = if args.users {
                    service.users(&ctx, &args.cql, 0, args.limit, &[]).await?
                } else {
                    let options = SearchContentOptions {
                        cursor: args.cursor.clone().unwrap_or_default(),
                        limit: args.limit,
                        include_archived_spaces: args.archived,
                        ..Default::default()
                    };
                    service.content(&ctx, &args.cql, &options).await?
                };

                if global.json {
                    return print_json(&page);
                }

                for result in &page.results {
                    match &result.user {
                        Some(user) if args.users => println!("{}  {}", user.account_id, user.display_name),
                        _ => println!("{}  {}", result.entity_type, result.title),
                    }
                }
                let next = page.continuation();
                if let Some(cursor) = next.next.filter(|_| next.has_more) {
                    eprintln!("More results: --cursor {}", cursor);
                }
                Ok(())
            }

            ConfluenceSubcommand::Children(args) => {
                let service = ChildrenDescendantsService::new(session.connector());
                match (&args.r#type, args.descendants) {
                    (Some(kind), false) => {
                        let (page, _) = service
                            .children_by_type(&ctx, &args.id, kind, 0, &[], 0, args.limit)
                            .await?;
                        print_pages(global, &[page])
                    }
                    (Some(kind), true) => {
                        let (page, _) = service
                            .descendants_by_type(&ctx, &args.id, kind, "all", &[], 0, args.limit)
                            .await?;
                        print_pages(global, &[page])
                    }
                    (None, descendants) => {
                        let expand = vec!["page".to_string()];
                        let (children, _) = if descendants {
                            service.descendants(&ctx, &args.id, &expand).await?
                        } else {
                            service.children(&ctx, &args.id, &expand, 0).await?
                        };
                        if global.json {
                            return print_json(&children);
                        }
                        let groups = [children.page, children.blogpost, children.comment, children.attachment];
                        print_pages(global, &groups.into_iter().flatten().collect::<Vec<_>>())
                    }
                }
            }

            ConfluenceSubcommand::Content { command } => {
                let service = ContentService::new(session.connector());
                match command {
                    ContentSubcommand::List(args) => {
                        let options = GetContentOptions {
                            space_key: args.space.clone().unwrap_or_default(),
                            context_type: args.r#type.clone().unwrap_or_default(),
                            title: args.title.clone().unwrap_or_default(),
                            posting_day: args
                                .posted
                                .as_deref()
                                .map(|day| {
                                    NaiveDate::parse_from_str(day, "%Y-%m-%d")
                                        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", day))
                                })
                                .transpose()?,
                            ..Default::default()
                        };

                        let mut pages = Vec::new();
                        let mut start = 0;
                        loop {
                            let (page, _) = service.gets(&ctx, &options, start, args.limit).await?;
                            let next = page.continuation();
                            pages.push(page);

                            match next_offset(args.all, next, start) {
                                Some(offset) => start = offset,
                                None => break,
                            }
                        }
                        print_pages(global, &pages)
                    }

                    ContentSubcommand::Get { id, revision, expand } => {
                        let expand = split_list(expand.as_deref());
                        let (content, _) = service.get(&ctx, id, &expand, *revision).await?;
                        if global.json {
                            return print_json(&content);
                        }
                        print_content(&content);
                        if let Some(version) = &content.version {
                            println!("Version: {} ({})", version.number, version.when);
                        }
                        Ok(())
                    }
                }
            }

            ConfluenceSubcommand::Property { command } => {
                let service = ContentPropertyService::new(session.connector());
                match command {
                    PropertySubcommand::List { id } => {
                        let (page, _) = service.gets(&ctx, id, &[], 0, 0).await?;
                        if global.json {
                            return print_json(&page);
                        }
                        for property in &page.results {
                            println!("{}  {}", property.key, property.value);
                        }
                        Ok(())
                    }
                    PropertySubcommand::Get { id, key } => {
                        let (property, _) = service.get(&ctx, id, key).await?;
                        print_json(&property.value)
                    }
                    PropertySubcommand::Set { id, key, value } => {
                        let payload = ContentPropertyPayload {
                            key: key.clone(),
                            value: serde_json::from_str(value)
                                .unwrap_or_else(|_| serde_json::Value::String(value.clone())),
                        };
                        let (property, _) = service.create(&ctx, id, &payload).await?;
                        if global.json {
                            return print_json(&property);
                        }
                        println!("Created property {} on {}", property.key, id);
                        Ok(())
                    }
                    PropertySubcommand::Delete { id, key } => {
                        service.delete(&ctx, id, key).await?;
                        println!("Deleted property {} from {}", key, id);
                        Ok(())
                    }
                }
            }
        }
    }
}

fn print_pages(global: &GlobalOptions, pages: &[ContentPage]) -> Result<()> {
    if global.json {
        let results: Vec<&Content> = pages.iter().flat_map(|p| &p.results).collect();
        return print_json(&results);
    }
    for content in pages.iter().flat_map(|p| &p.results) {
        print_content(content);
    }
    Ok(())
}

fn print_content(content: &Content) {
    let space = content.space.as_ref().map(|s| s.key.as_str()).unwrap_or("-");
    println!("{:<12} {:<10} {:<8} {}", content.id, content.kind, space, content.title);
}
