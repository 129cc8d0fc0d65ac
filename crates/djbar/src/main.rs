use djbar::engine::Engine;
use djbar::scheduler::Scheduler;
use djbar::transport::HttpTransport;
use djbar::{input, menu};
use djbar_proto::config::Config;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = djbar_proto::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("djbar.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Stdout belongs to the menu renderer; logs go to a file.  Allow
    // RUST_LOG override and cap noisy HTTP client internals.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    eprintln!("djbar log: {}", log_path.display());
    info!("djbar starting");

    let config = Config::load()?;
    info!("config loaded from {:?}", Config::config_path());

    let (render_tx, render_rx) = mpsc::channel(16);
    let transport = HttpTransport::new(&config.endpoint, &config.poll)?;
    let engine = Engine::new(transport, render_tx, config.engine.serialize_fetches);

    let _renderer = menu::spawn(render_rx);
    let mut input = input::spawn(engine.clone());

    let mut scheduler = Scheduler::new(engine, config.poll.interval());
    scheduler.start();

    run_until_quit(&mut scheduler, &mut input).await?;

    info!("djbar exiting");
    Ok(())
}

/// Event loop over the process-level signals.  SIGUSR1/SIGUSR2 stand in for
/// the system's will-sleep / did-wake notifications; the scheduler itself
/// does not care where the signals come from.
#[cfg(unix)]
async fn run_until_quit(
    scheduler: &mut Scheduler,
    input: &mut JoinHandle<()>,
) -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut will_sleep = signal(SignalKind::user_defined1())?;
    let mut did_wake = signal(SignalKind::user_defined2())?;

    loop {
        tokio::select! {
            _ = will_sleep.recv() => scheduler.on_sleep(),
            _ = did_wake.recv() => scheduler.on_wake(),
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received");
                break;
            }
            _ = &mut *input => break,
        }
    }
    Ok(())
}

#[cfg(not(unix))]
async fn run_until_quit(
    _scheduler: &mut Scheduler,
    input: &mut JoinHandle<()>,
) -> anyhow::Result<()> {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("interrupt received"),
        _ = &mut *input => {}
    }
    Ok(())
}
