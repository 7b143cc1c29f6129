//! Topics and Markets, toggleable and reorderable within their sections.
//!
//! Run with `RUST_LOG=debug cargo run 2>settings.log` to watch the model
//! change while you use the list.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use lipgloss_extras::prelude::*;
use sectioned_list::prelude::*;
use sectioned_list::sectioned::sample;

struct App {
    settings: Settings,
    status: String,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut settings = Settings::new(sample::sections()).with_title("Settings");
        let cmd = settings.focus();
        let app = Self {
            settings,
            status: String::new(),
        };
        (app, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(toggled) = msg.downcast_ref::<ToggledMsg>() {
            let state = if toggled.enabled { "on" } else { "off" };
            self.status = format!("{} switched {}", toggled.path, state);
            log::info!("{}", self.status);
            return None;
        }
        if let Some(moved) = msg.downcast_ref::<MovedMsg>() {
            self.status = format!("moved {} to {}", moved.from, moved.to);
            log::info!("{}", self.status);
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let keys = self.settings.keymap();
            if keys.force_quit.matches(key_msg)
                || (!self.settings.is_dragging() && keys.quit.matches(key_msg))
            {
                return Some(quit());
            }
        }
        self.settings.update(msg)
    }

    fn view(&self) -> String {
        let status = Style::new()
            .foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            })
            .render(&self.status);
        format!("{}\n\n{}", self.settings.view(), status)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
