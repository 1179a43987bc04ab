use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use eyre::Result;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::{select, sync::mpsc, task::JoinHandle, time::interval};

use crate::device::{Device, report::StateReport};

mod draw;
pub mod keymap;

use keymap::Action;

const POLL_INTERVAL: Duration = Duration::from_millis(1000);

const PLACEHOLDER: &str = "--";
const ERROR_TEXT: &str = "error";
const DEGREE_F: char = '\u{2109}';

/// The four rendered display fields. Only [`Labels::update`] writes them.
#[derive(Debug)]
pub struct Labels {
    pub target: String,
    pub current: String,
    pub current_error: bool,
    pub pump: String,
    pub heater: String,
}

impl Labels {
    /// Renders one state report into the display fields.
    ///
    /// A missing target shows a blank placeholder while a missing current
    /// temperature shows an error indicator. The asymmetry is part of the
    /// firmware dashboard's contract and is kept as-is.
    pub fn update(&mut self, report: &StateReport) {
        self.target = match report.target_temp() {
            Some(value) => format!("{value}{DEGREE_F}"),
            None => PLACEHOLDER.to_owned(),
        };

        match report.current_temp() {
            Some(value) => {
                self.current = format!("{value}{DEGREE_F}");
                self.current_error = false;
            }
            None => {
                self.current = ERROR_TEXT.to_owned();
                self.current_error = true;
            }
        }

        self.pump = on_off(report.pump_on()).to_owned();
        self.heater = on_off(report.heater_on()).to_owned();
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            target: PLACEHOLDER.to_owned(),
            current: PLACEHOLDER.to_owned(),
            current_error: false,
            pump: on_off(false).to_owned(),
            heater: on_off(false).to_owned(),
        }
    }
}

fn on_off(on: bool) -> &'static str {
    match on {
        true => "On",
        false => "Off",
    }
}

/* == Panel == */

pub struct Panel {
    device: Device,
    labels: Labels,
    input: String,
    version: Option<String>,
}

pub enum Update {
    State(StateReport),
    Version(String),
}

/// Polls the device state on a fixed 1 s cadence, indefinitely.
///
/// Each tick spawns an independent fetch: successful reports go out over
/// the channel, failed polls send nothing. In-flight polls are never
/// cancelled or coalesced, so a slow response may overlap later ticks and
/// results apply in arrival order.
pub fn spawn_poller(device: Device, updates: mpsc::UnboundedSender<Update>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(POLL_INTERVAL);

        loop {
            ticker.tick().await;

            let device = device.clone();
            let updates = updates.clone();

            tokio::spawn(async move {
                if let Ok(report) = device.state().await {
                    let _ = updates.send(Update::State(report));
                }
            });
        }
    })
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

impl Panel {
    pub fn new(device: Device) -> Self {
        Panel {
            device,
            labels: Labels::default(),
            input: String::new(),
            version: None,
        }
    }

    /// Drives the dashboard until the user quits.
    ///
    /// A failed poll leaves the previous render in place until the next
    /// tick delivers a fresh report.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let (updates, mut update_rx) = mpsc::unbounded_channel();

        self.spawn_version_fetch(updates.clone());
        let poller = spawn_poller(self.device.clone(), updates);

        let mut events = EventStream::new();

        loop {
            terminal.draw(|frame| draw::render(frame, &self))?;

            select! {
                Some(update) = update_rx.recv() => self.apply(update),

                Some(Ok(event)) = events.next() => {
                    if self.handle_event(event) == Flow::Exit {
                        break;
                    }
                }
            }
        }

        poller.abort();

        Ok(())
    }

    fn spawn_version_fetch(&self, updates: mpsc::UnboundedSender<Update>) {
        let device = self.device.clone();

        tokio::spawn(async move {
            if let Ok(version) = device.version().await {
                let _ = updates.send(Update::Version(version));
            }
        });
    }

    fn apply(&mut self, update: Update) {
        match update {
            Update::State(report) => self.labels.update(&report),
            Update::Version(version) => self.version = Some(version),
        }
    }

    fn version_line(&self) -> Option<String> {
        self.version.as_ref().map(|v| format!("Version: {v}"))
    }

    /* == Input == */

    fn handle_event(&mut self, event: Event) -> Flow {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            return self.handle_key(key);
        }

        Flow::Continue
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => self.input.push(c),

            KeyCode::Backspace => {
                self.input.pop();
            }

            code => {
                if let Some(action) = keymap::action_for(code) {
                    return self.dispatch(action);
                }
            }
        }

        Flow::Continue
    }

    /// Commands are fire-and-forget: the task is spawned, its outcome
    /// ignored, and nothing is rendered on failure.
    fn dispatch(&mut self, action: Action) -> Flow {
        match action {
            Action::SetTemp => {
                let device = self.device.clone();
                let value = self.input.clone();

                tokio::spawn(async move {
                    let _ = device.set_temp(&value).await;
                });
            }

            // The firmware has no reset endpoint; the binding stays inert
            Action::Reset => {}

            Action::Reboot => {
                let device = self.device.clone();

                tokio::spawn(async move {
                    let _ = device.reboot().await;
                });
            }

            Action::Shutdown => {
                let device = self.device.clone();

                tokio::spawn(async move {
                    let _ = device.shutdown().await;
                });
            }

            Action::Quit => return Flow::Exit,
        }

        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    use super::*;

    fn report(value: serde_json::Value) -> StateReport {
        serde_json::from_value(value).unwrap()
    }

    fn panel() -> Panel {
        Panel::new(Device::new("127.0.0.1", 1).unwrap())
    }

    #[test]
    fn test_full_state_rendering() {
        let mut labels = Labels::default();
        labels.update(&report(
            json!({ "set_temp": 140, "cur_temp": 138, "pump": 1, "heater": 0 }),
        ));

        assert_eq!(labels.target, "140\u{2109}");
        assert_eq!(labels.current, "138\u{2109}");
        assert!(!labels.current_error);
        assert_eq!(labels.pump, "On");
        assert_eq!(labels.heater, "Off");
    }

    #[test]
    fn test_missing_target_shows_placeholder() {
        let mut labels = Labels::default();

        for value in [json!({}), json!({ "set_temp": 0 }), json!({ "set_temp": "" })] {
            labels.update(&report(value));
            assert_eq!(labels.target, "--");
        }
    }

    #[test]
    fn test_missing_current_shows_error() {
        let mut labels = Labels::default();

        for value in [json!({}), json!({ "cur_temp": 0 }), json!({ "cur_temp": "" })] {
            labels.update(&report(value));
            assert_eq!(labels.current, "error");
            assert!(labels.current_error);
        }
    }

    #[test]
    fn test_pump_heater_default_off() {
        let mut labels = Labels::default();
        labels.update(&report(json!({})));

        assert_eq!(labels.pump, "Off");
        assert_eq!(labels.heater, "Off");
    }

    #[test]
    fn test_version_line() {
        let mut panel = panel();
        assert_eq!(panel.version_line(), None);

        panel.apply(Update::Version("1.2.3".to_owned()));
        assert_eq!(panel.version_line().as_deref(), Some("Version: 1.2.3"));
    }

    #[test]
    fn test_input_editing() {
        let mut panel = panel();

        for code in [KeyCode::Char('7'), KeyCode::Char('5'), KeyCode::Char('.')] {
            panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        }

        panel.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));

        assert_eq!(panel.input, "75");
    }

    // The reset key is bound even though the device has no reset handler.
    // Dispatching it must be a no-op, never a crash.
    #[tokio::test]
    async fn test_reset_binding_is_inert() {
        let mut panel = panel();

        assert_eq!(keymap::action_for(KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(panel.dispatch(Action::Reset), Flow::Continue);
        assert!(panel.input.is_empty());
    }

    #[tokio::test]
    async fn test_quit_exits() {
        let mut panel = panel();

        let flow = panel.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(flow, Flow::Exit);
    }
}
