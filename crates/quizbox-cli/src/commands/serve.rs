//! The `quizbox serve` command.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;

use crate::config::load_config_from;

pub async fn execute(
    port: Option<u16>,
    bind: Option<IpAddr>,
    assets: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut server = load_config_from(config_path.as_deref())?.server;

    if let Some(port) = port {
        server.port = port;
    }
    if let Some(bind) = bind {
        server.bind = bind;
    }
    if let Some(assets) = assets {
        server.assets_dir = assets;
    }

    quizbox_server::serve(server.addr(), server.assets_dir).await
}
