use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::time::sleep_until;
use tracing::info;

use litetui::app::action::Action;
use litetui::app::dispatcher::Dispatcher;
use litetui::app::render_schedule::next_animation_deadline;
use litetui::app::session::Session;
use litetui::app::state::AppState;
use litetui::config::{Args, Config};
use litetui::infra::adapters::SqliteAdapter;
use litetui::ui::adapters::TuiRenderer;
use litetui::ui::event::handler::handle_event;
use litetui::ui::tui::TuiRunner;
use litetui::{error, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let config = Config::from_args(Args::parse())?;
    logging::init(config.log_file.as_deref())?;

    let adapter = SqliteAdapter::open(&config.database)
        .wrap_err_with(|| format!("failed to open '{}'", config.database.display()))?;

    let mut session = Session::new();
    session
        .load_table_names(&adapter)
        .wrap_err("failed to load table list")?;

    let dispatcher = Dispatcher::new(Box::new(adapter));
    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let size = tui.terminal().size()?;
    session.resize(size.width, size.height);
    let mut state = AppState::new(session);

    let result = run(&mut tui, &dispatcher, &mut state).await;
    tui.exit()?;
    info!("Exited");
    result
}

async fn run(tui: &mut TuiRunner, dispatcher: &Dispatcher, state: &mut AppState) -> Result<()> {
    loop {
        let deadline = next_animation_deadline(state, Instant::now());

        let action = tokio::select! {
            event = tui.next_event() => match event {
                Some(event) => handle_event(event, state),
                None => break,
            },
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => Action::Tick,
        };

        if action != Action::None {
            let mut renderer = TuiRenderer::new(tui);
            dispatcher.dispatch(action, state, &mut renderer, Instant::now())?;
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}
