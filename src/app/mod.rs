// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single slider.
//!
//! The app owns the value, feeds it to the widget on every view and stores
//! what the widget reports back. Slider settings come from `slider.toml`
//! with command-line overrides applied on top.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Config, NumericProp};
use crate::slider::SliderSettings;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::slider::slider;
use iced::widget::{button, column, container, row, text};
use iced::{window, Element, Length, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 260.0;

/// Root state of the demo.
pub struct App {
    value: f64,
    settings: SliderSettings,
    config: Config,
    config_dir: Option<PathBuf>,
    /// Last problem worth showing to the user (bad config, failed save).
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("value", &self.value)
            .field("range", self.settings.range())
            .finish_non_exhaustive()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .run()
}

/// Applies command-line overrides to the persisted configuration.
#[must_use]
pub fn apply_overrides(mut config: Config, flags: &Flags) -> Config {
    if let Some(min) = flags.min {
        config.slider.min = NumericProp::from(min);
    }
    if let Some(max) = flags.max {
        config.slider.max = NumericProp::from(max);
    }
    if let Some(step) = flags.step {
        config.slider.step = Some(NumericProp::from(step));
    }
    if flags.snap {
        config.slider.snap = true;
    }
    if flags.value.is_some() {
        config.value = flags.value;
    }
    config
}

impl App {
    /// Builds the state from flags; invalid settings fall back to the
    /// defaults with a visible warning.
    #[must_use]
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (loaded, mut warning) = config::load_with_override(flags.config_dir.clone());
        let config = apply_overrides(loaded, &flags);

        let settings = match config.slider.resolve() {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("invalid slider settings: {err}");
                warning = Some(format!("Invalid slider settings: {err}"));
                SliderSettings::default()
            }
        };
        let value = config.value.unwrap_or(settings.range().min());
        log::info!(
            "starting with value {value} in {}..{}",
            settings.range().min(),
            settings.range().max()
        );

        let app = App {
            value,
            settings,
            config,
            config_dir: flags.config_dir,
            warning,
        };
        (app, Task::none())
    }

    #[must_use]
    pub fn title(&self) -> String {
        String::from("Iced Slider")
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn settings(&self) -> &SliderSettings {
        &self.settings
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ValueChanged(value) => {
                log::trace!("slider value changed to {value}");
                self.value = value;
            }
            Message::SaveRequested => {
                self.config.value = Some(self.value);
                match config::save_with_override(&self.config, self.config_dir.clone()) {
                    Ok(()) => {
                        log::info!("saved value {}", self.value);
                        self.warning = None;
                    }
                    Err(err) => {
                        log::error!("failed to save config: {err}");
                        self.warning = Some(format!("Could not save: {err}"));
                    }
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let range = self.settings.range();
        let caption = text(format!(
            "{} (range {} to {})",
            self.value,
            range.min(),
            range.max()
        ))
        .size(typography::BODY);

        let mut content = column![
            text("Slider").size(typography::TITLE_MD),
            slider(self.settings.clone(), self.value, Message::ValueChanged),
            caption,
            row![button("Save").on_press(Message::SaveRequested)].spacing(spacing::XS),
        ]
        .spacing(spacing::MD);

        if let Some(warning) = &self.warning {
            content = content.push(
                text(warning.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_700),
            );
        }

        container(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn flags_in(dir: &std::path::Path) -> Flags {
        Flags {
            config_dir: Some(dir.to_path_buf()),
            ..Flags::default()
        }
    }

    #[test]
    fn starts_at_range_minimum_without_config() {
        let dir = tempdir().expect("temp dir");
        let (app, _) = App::new(flags_in(dir.path()));
        assert_eq!(app.value(), 0.0);
        assert!(app.warning().is_none());
    }

    #[test]
    fn overrides_replace_persisted_range() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            min: Some(10.0),
            max: Some(20.0),
            step: Some(2.0),
            snap: true,
            ..flags_in(dir.path())
        };
        let (app, _) = App::new(flags);
        assert_eq!(app.settings().range().min(), 10.0);
        assert_eq!(app.settings().range().max(), 20.0);
        assert!(app.settings().is_snapping());
        assert_eq!(app.value(), 10.0);
    }

    #[test]
    fn invalid_range_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            min: Some(50.0),
            max: Some(10.0),
            ..flags_in(dir.path())
        };
        let (app, _) = App::new(flags);
        assert_eq!(app.settings(), &SliderSettings::default());
        assert!(app.warning().is_some());
    }

    #[test]
    fn value_changes_are_stored_and_saved() {
        let dir = tempdir().expect("temp dir");
        let (mut app, _) = App::new(flags_in(dir.path()));
        let _ = app.update(Message::ValueChanged(42.0));
        let _ = app.update(Message::SaveRequested);
        assert_eq!(app.value(), 42.0);

        let (reloaded, _) = App::new(flags_in(dir.path()));
        assert_eq!(reloaded.value(), 42.0);
    }
}
