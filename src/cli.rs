use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use phmls_application::prelude as flows;
use phmls_boundary as json;
use phmls_core::{entities::*, gateways::notify::NotificationGateway, usecases};
use phmls_db_memory::Connections;
use phmls_gateways::{notify, psgc::PsgcClient};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    adapters,
    config::{self, Config},
};

#[derive(Parser)]
#[command(name = "phmls", version, about)]
struct Args {
    /// Configuration file (default: phmls.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Database snapshot file, overrides the configuration
    #[arg(long, value_name = "FILE")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load reference data and accounts from a JSON file
    Seed {
        /// JSON file or '-' for stdin
        file: PathBuf,
    },
    #[command(subcommand)]
    Listing(ListingCommand),
    #[command(subcommand)]
    Document(DocumentCommand),
    #[command(subcommand)]
    Share(ShareCommand),
    #[command(subcommand)]
    User(UserCommand),
    #[command(subcommand)]
    Notifications(NotificationCommand),
    #[command(subcommand)]
    Psgc(PsgcCommand),
}

#[derive(Subcommand)]
enum ListingCommand {
    /// Create a listing from a JSON file
    Create {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        file: PathBuf,
    },
    /// Apply a JSON patch to a listing
    Update {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        id: u64,
        file: PathBuf,
    },
    /// Move a listing to another status
    Status {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        id: u64,
        status: ListingStatus,
    },
    Delete {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        id: u64,
    },
    /// Show a listing and the statuses it may be moved to
    Show {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        id: u64,
    },
    List {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        #[arg(long)]
        status: Option<ListingStatus>,
        #[arg(long = "type")]
        listing_type: Option<ListingType>,
        #[arg(long)]
        created_by: Option<u64>,
        #[arg(long)]
        province: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
enum DocumentCommand {
    /// Attach a document to a listing
    Add {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        listing: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        file_name: String,
        #[arg(long, default_value = "private")]
        visibility: Visibility,
    },
    List {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        listing: u64,
    },
    Delete {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        id: u64,
    },
}

#[derive(Subcommand)]
enum ShareCommand {
    /// Create a public link to a listing
    Create {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        listing: u64,
        /// e.g. "12h" or "30d" (default: configured lifetime)
        #[arg(long, value_parser = parse_duration, conflicts_with = "no_expiry")]
        lifetime: Option<Duration>,
        /// The link never expires
        #[arg(long)]
        no_expiry: bool,
    },
    /// Resolve a token like an anonymous visitor
    Open { token: String },
    Deactivate {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        id: u64,
    },
    List {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
    },
}

#[derive(Subcommand)]
enum UserCommand {
    /// Create an account; the very first one needs no --as
    Create {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: Option<u64>,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "agent")]
        role: Role,
    },
    Role {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        id: u64,
        role: Role,
    },
    List {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
    },
}

#[derive(Subcommand)]
enum NotificationCommand {
    List {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        #[arg(long)]
        unread: bool,
    },
    Read {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        id: u64,
    },
}

#[derive(Subcommand)]
enum PsgcCommand {
    /// Import a province with its cities and barangays
    Import {
        #[arg(long = "as", value_name = "USER_ID")]
        actor: u64,
        code: String,
    },
}

fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    duration_str::parse(s).map_err(|err| err.to_string())
}

fn read_json<T: DeserializeOwned>(file: &Path) -> Result<T> {
    let input = if file == Path::new("-") {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        fs::read_to_string(file).with_context(|| format!("Unable to read {}", file.display()))?
    };
    serde_json::from_str(&input).with_context(|| format!("Invalid JSON in {}", file.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_all<F, T>(records: Vec<F>) -> Result<()>
where
    T: From<F> + Serialize,
{
    let records: Vec<T> = records.into_iter().map(T::from).collect();
    print_json(&records)
}

fn notification_gateway(
    gateway: &config::NotificationGateway,
) -> Result<Box<dyn NotificationGateway>> {
    Ok(match gateway {
        config::NotificationGateway::Log => Box::new(notify::LogOnly),
        config::NotificationGateway::JsonFile { dir } => {
            let gw = notify::SendToJsonFile::try_new(dir)
                .with_context(|| format!("Unable to use directory {}", dir.display()))?;
            Box::new(gw)
        }
    })
}

pub fn run() -> Result<()> {
    let Args {
        config,
        db,
        command,
    } = Args::parse();
    let Config {
        db: config::Db { snapshot_file },
        psgc,
        notifications,
        share_links,
    } = Config::try_load_from_file_or_default(config.as_deref())?;

    let snapshot_file = db.or(snapshot_file);
    match &snapshot_file {
        Some(file) => log::debug!("Use database snapshot {}", file.display()),
        None => log::warn!("No database snapshot configured: all changes will be lost"),
    }
    let connections = Connections::init(snapshot_file.as_deref())?;

    match command {
        Command::Seed { file } => {
            let data: json::ReferenceData = read_json(&file)?;
            let flows::SeedSummary {
                locations,
                classifications,
                users,
            } = flows::seed(&connections, adapters::reference_data(data))?;
            log::info!(
                "Seeded {locations} location(s), {classifications} classification(s) and {users} user(s)"
            );
            print_json(&serde_json::json!({
                "locations": locations,
                "classifications": classifications,
                "users": users,
            }))
        }
        Command::Listing(command) => {
            let notify = notification_gateway(&notifications.gateway)?;
            run_listing(&connections, &*notify, command)
        }
        Command::Document(command) => run_document(&connections, command),
        Command::Share(command) => {
            run_share(&connections, share_links.default_lifetime, command)
        }
        Command::User(command) => run_user(&connections, command),
        Command::Notifications(command) => run_notifications(&connections, command),
        Command::Psgc(PsgcCommand::Import { actor, code }) => {
            let client = PsgcClient::try_new(psgc)?;
            let code = PsgcCode::from(code);
            let imported = flows::import_province(&connections, &client, actor.into(), &code)?;
            print_json(&adapters::imported_locations(&code, imported))
        }
    }
}

fn run_listing(
    connections: &Connections,
    notify: &dyn NotificationGateway,
    command: ListingCommand,
) -> Result<()> {
    match command {
        ListingCommand::Create { actor, file } => {
            let new_listing: json::NewListing = read_json(&file)?;
            let listing = flows::create_listing(
                connections,
                actor.into(),
                adapters::new_listing(new_listing),
            )?;
            print_json(&json::Listing::from(listing))
        }
        ListingCommand::Update { actor, id, file } => {
            let patch: json::ListingPatch = read_json(&file)?;
            let listing = flows::update_listing(
                connections,
                notify,
                actor.into(),
                id.into(),
                adapters::listing_patch(patch),
            )?;
            print_json(&json::Listing::from(listing))
        }
        ListingCommand::Status { actor, id, status } => {
            let listing =
                flows::change_listing_status(connections, notify, actor.into(), id.into(), status)?;
            print_json(&json::Listing::from(listing))
        }
        ListingCommand::Delete { actor, id } => {
            flows::delete_listing(connections, actor.into(), id.into())?;
            log::info!("Deleted listing {id}");
            Ok(())
        }
        ListingCommand::Show { actor, id } => {
            let listing = flows::get_listing(connections, actor.into(), id.into())?;
            let transitions: Vec<json::ListingStatus> =
                flows::allowed_transitions(connections, actor.into(), id.into())?
                    .into_iter()
                    .map(Into::into)
                    .collect();
            print_json(&serde_json::json!({
                "listing": json::Listing::from(listing),
                "allowedTransitions": transitions,
            }))
        }
        ListingCommand::List {
            actor,
            status,
            listing_type,
            created_by,
            province,
            limit,
        } => {
            let query = usecases::ListingQuery {
                status,
                listing_type,
                created_by: created_by.map(Id::from),
                province: province.map(PsgcCode::from),
                limit,
            };
            let listings = flows::query_listings(connections, actor.into(), &query)?;
            print_all::<_, json::Listing>(listings)
        }
    }
}

fn run_document(connections: &Connections, command: DocumentCommand) -> Result<()> {
    match command {
        DocumentCommand::Add {
            actor,
            listing,
            title,
            file_name,
            visibility,
        } => {
            let new_document = usecases::NewDocument {
                title,
                file_name,
                visibility,
            };
            let document =
                flows::create_document(connections, actor.into(), listing.into(), new_document)?;
            print_json(&json::Document::from(document))
        }
        DocumentCommand::List { actor, listing } => {
            let documents = flows::list_documents(connections, actor.into(), listing.into())?;
            print_all::<_, json::Document>(documents)
        }
        DocumentCommand::Delete { actor, id } => {
            flows::delete_document(connections, actor.into(), id.into())?;
            log::info!("Deleted document {id}");
            Ok(())
        }
    }
}

fn run_share(
    connections: &Connections,
    default_lifetime: Option<Duration>,
    command: ShareCommand,
) -> Result<()> {
    match command {
        ShareCommand::Create {
            actor,
            listing,
            lifetime,
            no_expiry,
        } => {
            let lifetime = if no_expiry {
                None
            } else {
                lifetime.or(default_lifetime)
            };
            let link =
                flows::create_share_link(connections, actor.into(), listing.into(), lifetime)?;
            print_json(&json::ShareLink::from(link))
        }
        ShareCommand::Open { token } => {
            let listing = flows::open_share_link(connections, &Token::from(token))?;
            print_json(&json::Listing::from(listing))
        }
        ShareCommand::Deactivate { actor, id } => {
            let link = flows::deactivate_share_link(connections, actor.into(), id.into())?;
            print_json(&json::ShareLink::from(link))
        }
        ShareCommand::List { actor } => {
            let links = flows::list_share_links(connections, actor.into())?;
            print_all::<_, json::ShareLink>(links)
        }
    }
}

fn run_user(connections: &Connections, command: UserCommand) -> Result<()> {
    match command {
        UserCommand::Create {
            actor,
            email,
            name,
            role,
        } => {
            let new_user = usecases::NewUser { email, name, role };
            let user = flows::create_user(connections, actor.map(Id::from), new_user)?;
            print_json(&json::User::from(user))
        }
        UserCommand::Role { actor, id, role } => {
            let user = flows::change_user_role(connections, actor.into(), id.into(), role)?;
            print_json(&json::User::from(user))
        }
        UserCommand::List { actor } => {
            let users = flows::list_users(connections, actor.into())?;
            print_all::<_, json::User>(users)
        }
    }
}

fn run_notifications(connections: &Connections, command: NotificationCommand) -> Result<()> {
    match command {
        NotificationCommand::List { actor, unread } => {
            let notifications = flows::list_notifications(connections, actor.into(), unread)?;
            print_all::<_, json::Notification>(notifications)
        }
        NotificationCommand::Read { actor, id } => {
            let notification = flows::mark_notification_read(connections, actor.into(), id.into())?;
            print_json(&json::Notification::from(notification))
        }
    }
}
