use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use next_train_server::config::Config;
use next_train_server::planner::{Calculator, SystemClock};
use next_train_server::profiles::ProfileStore;
use next_train_server::schedule::FileSource;
use next_train_server::scheduler::Scheduler;
use next_train_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Build the core collaborators
    let source = Arc::new(FileSource::new(&config.schedule_path));
    let calculator = Calculator::new(config.walk_minutes, config.prep_minutes);
    let scheduler = Scheduler::new(source, Arc::new(SystemClock), calculator);

    // Initial load. A failure is reported, not fatal: the server starts and
    // answers with the unloaded-timetable error until a reload succeeds.
    match scheduler.reload().await {
        Ok(count) => tracing::info!(departures = count, "loaded timetable"),
        Err(e) => tracing::error!("failed to load timetable: {e}"),
    }

    // Reload the timetable periodically so file edits and day-variant
    // changes are picked up without a restart.
    let scheduler_refresh = scheduler.clone();
    let refresh_interval = config.update_interval;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match scheduler_refresh.reload().await {
                Ok(count) => tracing::debug!(departures = count, "reloaded timetable"),
                Err(e) => tracing::warn!("failed to reload timetable: {e}"),
            }
        }
    });

    let profiles = ProfileStore::new(&config.profiles_dir);
    let addr = config.listen_addr;

    // Build app state and router
    let state = AppState::new(scheduler, profiles, config);
    let app = create_router(state);

    println!("Next-train server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /api/next-train      - Next catchable train");
    println!("  GET /api/trains          - All departures");
    println!("  GET /api/config          - Application settings");
    println!("  GET /api/profiles        - Commute profiles");
    println!("  GET /api/health          - Health check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));
    axum::serve(listener, app).await.expect("server error");
}
