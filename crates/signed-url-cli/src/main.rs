//! Command-line access to objects and 3D assets behind signed URLs.
//!
//! Diagnostics go to stderr (filtered by `RUST_LOG`, default `info`) so that
//! downloads written to stdout stay clean.

mod args;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use signed_url::{ObjectRef, SignedUrlClient, TokenedAssetClient};
use tracing_subscriber::EnvFilter;

use crate::args::{AssetAction, Cli, Command, ObjectAction, ObjectArgs};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Object { action } => {
            run_object(&SignedUrlClient::new(cli.api_base_url), action).await
        }
        Command::Asset { token, action } => {
            run_asset(&TokenedAssetClient::new(cli.api_base_url, token), action).await
        }
    }
}

async fn run_object(client: &SignedUrlClient, action: ObjectAction) -> Result<ExitCode> {
    match action {
        ObjectAction::Url(args) => {
            let url = client
                .get_signed_url(&object_ref(args))
                .await
                .context("failed to get signed url")?;
            println!("{url}");
            Ok(ExitCode::SUCCESS)
        }
        ObjectAction::Exists(args) => {
            Ok(report_exists(client.file_exists(&object_ref(args)).await))
        }
        ObjectAction::Download { object, output } => {
            let object = object_ref(object);
            let data = client
                .download_file(&object)
                .await
                .with_context(|| format!("failed to download {object}"))?;
            write_output(&data, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_asset(client: &TokenedAssetClient, action: AssetAction) -> Result<ExitCode> {
    match action {
        AssetAction::Url { asset_id } => {
            let url = client
                .get_signed_url(&asset_id)
                .await
                .with_context(|| format!("failed to get signed url for asset {asset_id}"))?;
            println!("{url}");
            Ok(ExitCode::SUCCESS)
        }
        AssetAction::Exists { signed_url } => {
            Ok(report_exists(client.file_exists(&signed_url).await))
        }
        AssetAction::Download { asset_id, output } => {
            let data = client
                .download_file(&asset_id)
                .await
                .with_context(|| format!("failed to download asset {asset_id}"))?;
            write_output(&data, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn object_ref(args: ObjectArgs) -> ObjectRef {
    ObjectRef::new(args.bucket, args.object)
}

fn report_exists(exists: bool) -> ExitCode {
    println!("{exists}");
    if exists {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_output(data: &[u8], output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, data)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = data.len(), "download complete");
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(data).context("failed to write to stdout")?;
        stdout.flush().context("failed to flush stdout")?;
    }
    Ok(())
}
