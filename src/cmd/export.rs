use clap::Args;
use discomarkov::config::ExportParams;
use discomarkov::error::MkResult;
use discomarkov::{ingest, store};
use std::path::Path;
use tracing::info;

pub const USERS_FILE: &str = "users.json";

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub params: ExportParams,
}

pub fn run(args: ExportArgs) -> MkResult<()> {
    let params = args.params;
    info!(
        "📂 Exporting users from {} to {}...",
        params.input, params.output
    );

    let exports = ingest::parse_export_dir(&params.input)?;
    let users = ingest::collect_users(&exports);

    std::fs::create_dir_all(&params.output)?;
    let path = Path::new(&params.output).join(USERS_FILE);
    store::save_users(&users, &path)?;

    info!("Exported {} users to {}", users.len(), path.display());
    Ok(())
}
