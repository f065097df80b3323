//! Terminal runner (default binary).
//!
//! Renders the "page not found" game screen with crossterm and drives a
//! [`Session`] from key events and wall-clock time.

use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::core::{Engine, GameSnapshot};
use blockfall::input::{should_quit, InputAdapter};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{Args, Config, Session};

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &Config) -> Result<()> {
    use env_logger::{Builder, Env, Target};

    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let engine = match config.seed {
        Some(seed) => Engine::new(seed),
        None => Engine::from_entropy(),
    };
    info!("starting session (seed: {:?})", engine.source().seed());

    let mut session = Session::new(
        engine,
        InputAdapter::with_window(config.debounce),
        Instant::now(),
    );
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut drawn: Option<(u64, Viewport)> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let revision = session.engine().revision();
        if drawn != Some((revision, viewport)) {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            term.draw(&fb)?;
            drawn = Some((revision, viewport));
        }

        let timeout = session.poll_timeout(Instant::now(), config.frame);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    session.handle_key(key, Instant::now());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        session.advance(Instant::now());
        if let Some(event) = session.take_last_event() {
            if event.game_over {
                info!("final score {}", session.engine().score());
            }
        }
    }
}
