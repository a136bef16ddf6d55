//! Mausritter Sheet Player - command line composition root.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mrsheet_domain::CharacterRecord;
use mrsheet_player::infrastructure::{
    config::PlayerConfig, content_api::HttpContentApi, file_storage::FileStorage,
};
use mrsheet_player::use_cases::share::build_share_url;
use mrsheet_player::App;
use mrsheet_shared::ContentCategory;

const USAGE: &str = "usage: mrsheet-player <command>

commands:
  test-connection            check the content service credentials
  sync                       pull every custom content category
  sync-category <category>   pull one category (armor, weapons, utility, spells, conditions)
  share [record.json]        print a share link for a record file or the stored character
  import <url-or-fragment>   replace the stored character with a shared one";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mrsheet_player=debug,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PlayerConfig::from_env();
    tracing::debug!(storage = %config.storage_path.display(), "Loaded configuration");

    let storage = Arc::new(FileStorage::open(config.storage_path.clone()));
    let app = App::new(&config, storage, Arc::new(HttpContentApi::new()));

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("test-connection") => {
            let connected = app.use_cases.content.sync.test_connection().await;
            app.custom_data.write().await.set_connected(connected);
            println!("{}", if connected { "connected" } else { "not connected" });
            if !connected {
                std::process::exit(1);
            }
        }
        Some("sync") => {
            let report = app.use_cases.content.sync.sync_from_backend().await;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.success {
                std::process::exit(1);
            }
        }
        Some("sync-category") => {
            let Some(category) = args.next() else {
                bail!("sync-category needs a category\n\n{USAGE}");
            };
            let category: ContentCategory = category.parse()?;
            let report = app.use_cases.content.sync.sync_category(category).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.success {
                std::process::exit(1);
            }
        }
        Some("share") => {
            let url = match args.next() {
                Some(path) => {
                    let json = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading {path}"))?;
                    let record: CharacterRecord =
                        serde_json::from_str(&json).with_context(|| format!("parsing {path}"))?;
                    build_share_url(&record, &config.share_base_url)?
                }
                None => app.use_cases.share.share_url().await?,
            };
            println!("{url}");
        }
        Some("import") => {
            let Some(link) = args.next() else {
                bail!("import needs a share link\n\n{USAGE}");
            };
            if !app.use_cases.share.import(&fragment_of(&link)).await? {
                bail!("no character found in the share link");
            }
            app.save_character().await?;
            println!("character imported");
        }
        Some("help") | Some("--help") | Some("-h") | None => println!("{USAGE}"),
        Some(other) => bail!("unknown command '{other}'\n\n{USAGE}"),
    }

    Ok(())
}

/// The `#...` part of a full link; a bare fragment is returned as is.
fn fragment_of(link: &str) -> String {
    match url::Url::parse(link) {
        Ok(url) => url
            .fragment()
            .map(|fragment| format!("#{fragment}"))
            .unwrap_or_default(),
        Err(_) => link.to_string(),
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
