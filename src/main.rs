mod app;
mod config;
mod controller;
mod definitions;
mod document;
mod event;
mod i18n;
mod logging;
mod screens;
mod tui;
mod ui;

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};
use app::App;
use config::Settings;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use event::Event;
use futures_util::StreamExt;
use log::{error, info};
use tui::Tui;
use ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    let root = env::current_dir().context("cannot determine working directory")?;
    let settings = Settings::load(&root)?;
    logging::init(&root, &settings)?;
    info!("Starting on {}", settings.start_page.document_name());

    let mut app = App::new(settings, Instant::now());
    let mut tui = tui::init().context("failed to set up terminal")?;
    let result = run(&mut tui, &mut app).await;
    tui::restore().context("failed to restore terminal")?;
    if let Err(err) = &result {
        error!("Exited with error: {err:#}");
    }
    result
}

async fn run(tui: &mut Tui, app: &mut App) -> Result<()> {
    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(app.tick_rate);

    while !app.should_quit {
        tui.draw(|frame| render(frame, app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    Some(Ok(CrosstermEvent::Paste(text))) => Event::Paste(text),
                    // Resizes are picked up by the next draw.
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => return Err(err).context("failed to read terminal event"),
                    None => break,
                }
            }
        };

        app.handle_event(event, Instant::now());
    }

    info!("Shutting down");
    Ok(())
}
