//! Terminal event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::app::{App, SessionSummary};

/// Take over the terminal and run `app` until the user quits.
pub fn run(app: &mut App<'_>) -> Result<SessionSummary> {
	let mut terminal = ratatui::init();
	terminal.clear()?;

	app.mount();

	let (event_tx, event_rx) = mpsc::channel();
	let event_loop_running = Arc::new(AtomicBool::new(true));
	let event_loop_flag = Arc::clone(&event_loop_running);

	let event_thread = thread::spawn(move || -> Result<()> {
		while event_loop_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(50))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let mut pending_events = VecDeque::new();

	let result: Result<SessionSummary> = 'event_loop: loop {
		loop {
			match event_rx.try_recv() {
				Ok(Event::Resize(_, _)) => {}
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		let mut summary = None;
		while let Some(event) = pending_events.pop_front() {
			if let Event::Key(key) = event
				&& key.kind == KeyEventKind::Press
				&& let Some(done) = app.handle_key(key)
			{
				summary = Some(done);
				break;
			}
		}

		if let Some(summary) = summary {
			break Ok(summary);
		}

		app.tick();

		if let Err(err) = terminal.draw(|frame| app.draw(frame)) {
			break Err(err.into());
		}

		thread::sleep(Duration::from_millis(16));
	};

	ratatui::restore();

	event_loop_running.store(false, Ordering::Relaxed);
	match event_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	result
}
