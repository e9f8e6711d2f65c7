//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "Resolve signed URLs and fetch the objects behind them")]
pub struct Cli {
    /// Base URL of the signing service.
    #[arg(long, env = "SIGNED_URL_API_BASE")]
    pub api_base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Storage objects resolved through the shared `getSignedURL` route.
    Object {
        #[command(subcommand)]
        action: ObjectAction,
    },
    /// 3D assets resolved through the authenticated per-asset route.
    Asset {
        /// Bearer token for the asset service.
        #[arg(long, env = "SIGNED_URL_TOKEN", hide_env_values = true)]
        token: String,

        #[command(subcommand)]
        action: AssetAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ObjectAction {
    /// Print the signed URL for an object.
    Url(ObjectArgs),
    /// Report whether an object exists.
    Exists(ObjectArgs),
    /// Download an object.
    Download {
        #[command(flatten)]
        object: ObjectArgs,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ObjectArgs {
    /// Bucket name.
    #[arg(long)]
    pub bucket: String,

    /// Object name.
    #[arg(long)]
    pub object: String,
}

#[derive(Subcommand, Debug)]
pub enum AssetAction {
    /// Print the signed URL for an asset.
    Url { asset_id: String },
    /// Report whether the object behind a signed URL exists.
    Exists { signed_url: String },
    /// Download an asset.
    Download {
        asset_id: String,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
