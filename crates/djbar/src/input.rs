//! Stdin command reader.  One-letter commands stand in for the menu item
//! actions; each maps straight onto an engine call.  The loop ends on `q`
//! or when stdin closes.

use djbar_proto::platform;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::Engine;

const HELP: &str = "\
commands: p play/pause  n next  u/+ volume up  d/- volume down\n\
          r refresh now  o open track  h help  q quit\n";

pub fn spawn(engine: Engine) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Ok(Some(line)) = lines.next_line().await {
            match line.trim() {
                "" => {}
                "p" => engine.play_or_pause().await,
                "n" => engine.next(),
                "u" | "+" => engine.volume_up(),
                "d" | "-" => engine.volume_down(),
                "r" => engine.refresh(),
                "o" => open_track(&engine).await,
                "h" | "?" => print!("{}", HELP),
                "q" => break,
                other => {
                    println!("unknown command: {:?} (h for help)", other);
                }
            }
        }
    })
}

/// Hand the cached track id to the desktop opener.  The id doubles as a URI
/// (the player reports e.g. spotify track URIs); nothing cached means
/// nothing to open.
async fn open_track(engine: &Engine) {
    let Some(id) = engine.snapshot().await.and_then(|s| {
        s.track_id().map(str::to_string)
    }) else {
        debug!("open: no track id cached");
        return;
    };

    let (program, args) = platform::opener_program();
    let spawned = tokio::process::Command::new(program)
        .args(args)
        .arg(&id)
        .spawn();
    match spawned {
        Ok(_) => debug!("opening {}", id),
        Err(e) => warn!("failed to launch {} for {}: {}", program, id, e),
    }
}
