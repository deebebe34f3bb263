use crate::{config::constants::FRAME_DURATION, models::Event};
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures::{FutureExt, StreamExt};
use tokio::time;
use tui_textarea::{Input, Key};

pub struct EventService {
    crossterm_events: EventStream,
}

impl EventService {
    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => Some(Event::KeyboardPaste(text)),
            CrosstermEvent::Key(key_event) => {
                let input: Input = key_event.into();

                if input.ctrl {
                    return match input.key {
                        Key::Char('c') => Some(Event::KeyboardCtrlC),
                        _ => None,
                    };
                }

                match input.key {
                    Key::Esc => Some(Event::KeyboardEsc),
                    Key::Enter => Some(Event::KeyboardEnter),
                    Key::Up => Some(Event::UiScrollUp),
                    Key::Down => Some(Event::UiScrollDown),
                    _ => Some(Event::KeyboardCharInput(input)),
                }
            }
            _ => None,
        }
    }

    pub async fn next(&mut self) -> Event {
        loop {
            let e = tokio::select! {
                event = self.crossterm_events.next().fuse() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(FRAME_DURATION) => Some(Event::UiTick)
            };

            if let Some(event) = e {
                return event;
            }
        }
    }
}

impl Default for EventService {
    fn default() -> Self {
        Self {
            crossterm_events: EventStream::new(),
        }
    }
}
