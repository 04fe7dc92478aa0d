use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::dto::{FindRequest, OutputFormat, PartLookup, TemplateKind};
use crate::catalog::domain::{CatalogId, ProfileKind};

/// Usage examples printed by `ccli examples`
pub const EXAMPLES: &str = "\
    $ ccli add part openssl-1.1.1n.yml
    $ ccli add profile profile_openssl-1.1.1n.yml
    $ ccli query \"{part(id:\\\"aR25sd-V8dDvs2-p3Gfae\\\"){file_verification_code}}\"
    $ ccli export part id sdl3ga-naTs42g5-rbow2A -o file.yml
    $ ccli export template security -o file.yml
    $ ccli update openssl-1.1.1n.v4.yml
    $ ccli set openssl-1.1.1n.v4.yml
    $ ccli upload openssl-1.1.1n.tar.gz
    $ ccli find part busybox
    $ ccli find sha256 2493347f59c03...
    $ ccli find profile security werS12-da54FaSff-9U2aef
    $ ccli delete adjb23-A4D3faTa-d95Xufs
    $ ccli ping";

/// Command-line client for the Software Parts Catalog
#[derive(Parser, Debug)]
#[command(name = "ccli")]
#[command(version)]
#[command(about = "Interact with the Software Parts Catalog", long_about = None)]
pub struct Args {
    /// Path to the config file (defaults to ./ccli_config.yml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also print log events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a part or a part profile from a YAML record
    Add {
        #[command(subcommand)]
        target: AddTarget,
    },

    /// Update a part; empty fields in the record are left unchanged
    Update {
        /// Path to the part record
        file: PathBuf,
    },

    /// Set every field of a part, empty values included
    Set {
        /// Path to the part record
        file: PathBuf,
    },

    /// Delete a part
    Delete {
        /// Catalog id of the part
        catalog_id: String,

        /// Delete sub-parts as well
        #[arg(short, long)]
        recursive: bool,

        /// Delete even if other parts reference it
        #[arg(short, long)]
        force: bool,
    },

    /// Find parts by name, id, hash or verification code, or a part's profile
    Find {
        #[command(subcommand)]
        target: FindTarget,

        /// Output format: json or yaml
        #[arg(long, global = true, default_value = "json")]
        format: OutputFormat,
    },

    /// Export a part record or an empty template
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Run a GraphQL query against the catalog
    Query {
        /// Query text
        query: String,

        /// Output format: json or yaml
        #[arg(long, default_value = "json")]
        format: OutputFormat,
    },

    /// Upload an archive
    Upload {
        /// Path to the archive
        path: PathBuf,
    },

    /// Check that the catalog server answers
    Ping,

    /// Print usage examples
    Examples,
}

#[derive(Subcommand, Debug)]
pub enum AddTarget {
    /// Create a part, its aliases and its composite links
    Part { file: PathBuf },
    /// Attach a security, quality or licensing profile to a part
    Profile { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum FindTarget {
    /// Search parts by name
    Part { query: String },
    /// Retrieve a part by catalog id
    Id { id: String },
    /// Find the catalog id of the part with this archive hash
    Sha256 { sha256: String },
    /// Find the catalog id of the part with this file verification code
    Fvc { fvc: String },
    /// Retrieve a part's profile documents
    Profile { kind: String, id: String },
}

#[derive(Subcommand, Debug)]
pub enum ExportTarget {
    /// Export a part record
    Part {
        /// What the value identifies
        by: LookupKind,
        value: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export an empty record to fill in
    Template {
        kind: TemplateArg,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Id,
    Sha256,
    Fvc,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateArg {
    Part,
    Security,
    Quality,
    #[value(alias = "license")]
    Licensing,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl FindTarget {
    pub fn to_request(&self) -> FindRequest {
        match self {
            FindTarget::Part { query } => FindRequest::Text(query.clone()),
            FindTarget::Id { id } => FindRequest::Id(CatalogId::new(id.clone())),
            FindTarget::Sha256 { sha256 } => FindRequest::Sha256(sha256.clone()),
            FindTarget::Fvc { fvc } => FindRequest::Fvc(fvc.clone()),
            FindTarget::Profile { kind, id } => FindRequest::Profile {
                kind: ProfileKind::from(kind.as_str()),
                id: CatalogId::new(id.clone()),
            },
        }
    }
}

impl LookupKind {
    pub fn lookup(self, value: &str) -> PartLookup {
        match self {
            LookupKind::Id => PartLookup::Id(CatalogId::new(value)),
            LookupKind::Sha256 => PartLookup::Sha256(value.to_string()),
            LookupKind::Fvc => PartLookup::Fvc(value.to_string()),
        }
    }
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Part => TemplateKind::Part,
            TemplateArg::Security => TemplateKind::Profile(ProfileKind::Security),
            TemplateArg::Quality => TemplateKind::Profile(ProfileKind::Quality),
            TemplateArg::Licensing => TemplateKind::Profile(ProfileKind::Licensing),
        }
    }
}
