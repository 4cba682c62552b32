use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use soltraders::TradersError;
use soltraders::api::{ApiClient, DEFAULT_LIMIT, DataMode};
use soltraders::config::fetch_config;
use soltraders::tui::event::{self, Action};
use soltraders::tui::{App, Message, render, restore_terminal, setup_terminal};

#[tokio::main]
async fn main() -> Result<(), TradersError> {
    // Log to stderr so the alternate screen on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app_config = fetch_config()?;
    let client = Arc::new(ApiClient::new(&app_config.api));
    info!(mode = ?client.mode(), "starting dashboard");

    let mut terminal = setup_terminal()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx.clone(), 250);

    // One fetch per data set on startup; further fetches only on [r].
    spawn_fetches(Arc::clone(&client), tx.clone());

    let mut app = App::new(client.mode() == DataMode::Fixture);

    let result = run(&mut terminal, &mut app, &mut rx, &client, &tx).await;

    restore_terminal(&mut terminal)?;
    result
}

/// Main draw/update loop.
async fn run(
    terminal: &mut soltraders::tui::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
    client: &Arc<ApiClient>,
    tx: &mpsc::UnboundedSender<Message>,
) -> Result<(), TradersError> {
    while !app.should_quit {
        terminal.draw(|frame| render(frame, app))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(action) = event::update(app, message) {
            match action {
                Action::Reload => spawn_fetches(Arc::clone(client), tx.clone()),
            }
        }
    }
    Ok(())
}

/// Spawns one-shot fetch tasks for both data sets.
///
/// Each task's only effect is a message on the channel; when the receiver
/// is gone the result is discarded instead of touching defunct state.
fn spawn_fetches(client: Arc<ApiClient>, tx: mpsc::UnboundedSender<Message>) {
    let notifications_client = Arc::clone(&client);
    let notifications_tx = tx.clone();
    tokio::spawn(async move {
        let message = match notifications_client
            .fetch_whale_notifications(DEFAULT_LIMIT, None)
            .await
        {
            Ok(records) => Message::NotificationsLoaded(records),
            Err(e) => Message::NotificationsFailed(e.to_string()),
        };
        let _ = notifications_tx.send(message);
    });

    tokio::spawn(async move {
        let message = match client.fetch_token_stats().await {
            Ok(stats) => Message::StatsLoaded(stats),
            Err(e) => Message::StatsFailed(e.to_string()),
        };
        let _ = tx.send(message);
    });
}
