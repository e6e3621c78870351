use iced::widget::{button, canvas, column, container, row, text, Column};
use iced::{alignment, keyboard, Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;

mod config;
mod error;
mod host;
mod state;
mod ui;

use config::Config;
use error::Result;
use host::{listing, loader, picker, EncodedImage, Thumbnail};
use state::gesture::PointerEvent;
use state::session::{Effect, Session};
use state::transform::WheelDirection;
use ui::canvas::ImageCanvas;

const HELP: &str = "\
photo-strip - browse the images next to the one you open

USAGE:
  photo-strip [OPTIONS] [IMAGE]

OPTIONS:
  --config <FILE>   Read settings from FILE instead of the default location
  -h, --help        Print this help

Set RUST_LOG=debug for verbose logging.
";

/// Main application state
struct Viewer {
    session: Session,
    config: Config,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User asked to open an image
    Open,
    /// File chooser closed
    Picked(Option<String>),
    ImageLoaded(u64, Result<EncodedImage>),
    DirectoryListed(u64, String, Result<Vec<String>>),
    ThumbnailLoaded(u64, usize, Result<Thumbnail>),
    Next,
    Previous,
    /// Thumbnail clicked
    Jump(usize),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Wheel(WheelDirection),
    Pointer(PointerEvent),
}

impl Viewer {
    /// Create a new instance of the application, optionally opening `image` right away
    fn new(config: Config, image: Option<String>) -> (Self, Task<Message>) {
        let session = Session::new(&config);
        let mut viewer = Viewer { session, config };

        let task = match image {
            Some(path) => viewer.update(Message::Picked(Some(path))),
            None => Task::none(),
        };

        log::info!("viewer ready");
        (viewer, task)
    }

    fn title(&self) -> String {
        match self.session.image() {
            Some(image) => format!("{} - Photo Strip", image.path),
            None => "Photo Strip".to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let effects = match message {
            Message::Open => self.session.select_new_image(),
            Message::Picked(path) => self.session.image_picked(path),
            Message::ImageLoaded(ticket, result) => {
                self.session.image_loaded(ticket, result);
                Vec::new()
            }
            Message::DirectoryListed(generation, selected, result) => {
                self.session.directory_listed(generation, &selected, result)
            }
            Message::ThumbnailLoaded(generation, index, result) => {
                self.session.thumbnail_loaded(generation, index, result);
                Vec::new()
            }
            Message::Next => self.session.go_next(),
            Message::Previous => self.session.go_previous(),
            Message::Jump(index) => self.session.go_to(index),
            Message::ZoomIn => {
                self.session.zoom_in();
                Vec::new()
            }
            Message::ZoomOut => {
                self.session.zoom_out();
                Vec::new()
            }
            Message::ResetZoom => {
                self.session.reset_transform();
                Vec::new()
            }
            Message::Wheel(direction) => {
                self.session.wheel(direction);
                Vec::new()
            }
            Message::Pointer(event) => {
                self.session.pointer(event);
                Vec::new()
            }
        };

        Task::batch(effects.into_iter().map(|effect| self.perform(effect)))
    }

    /// Turn a session request into a background task
    fn perform(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PickImage => Task::perform(
                picker::pick_image_file(self.config.extensions.clone()),
                Message::Picked,
            ),
            Effect::LoadImage { ticket, path } => Task::perform(
                loader::load_image_encoded(path),
                move |result| Message::ImageLoaded(ticket, result),
            ),
            Effect::ListDirectory {
                generation,
                directory,
                selected,
            } => Task::perform(
                listing::list_images_in_directory(directory, self.config.extensions.clone()),
                move |result| Message::DirectoryListed(generation, selected.clone(), result),
            ),
            // One task per thumbnail; they complete in any order
            Effect::LoadThumbnail {
                generation,
                index,
                path,
            } => Task::perform(
                loader::load_thumbnail(path, self.config.thumbnail_size),
                move |result| Message::ThumbnailLoaded(generation, index, result),
            ),
            Effect::RevealThumbnail { index, count } => ui::strip::reveal(index, count),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let frame = ui::sync::project(&self.session);
        let has_gallery = !self.session.gallery().is_empty();

        let toolbar = row![
            button("Open Image").on_press(Message::Open).padding(8),
            button("Previous")
                .on_press_maybe(has_gallery.then_some(Message::Previous))
                .padding(8),
            button("Next")
                .on_press_maybe(has_gallery.then_some(Message::Next))
                .padding(8),
            button("-").on_press(Message::ZoomOut).padding(8),
            text(frame.zoom_label.clone())
                .width(Length::Fixed(56.0))
                .align_x(alignment::Horizontal::Center),
            button("+").on_press(Message::ZoomIn).padding(8),
            button("Reset").on_press(Message::ResetZoom).padding(8),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let main: Element<'_, Message> = match frame.image {
            Some(image) => canvas(ImageCanvas {
                handle: image.handle.clone(),
                width: image.width,
                height: image.height,
                transform: frame.transform,
                dragging: frame.dragging,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => container(text("No image selected").size(20))
                .center(Length::Fill)
                .into(),
        };

        let mut content: Column<Message> = column![toolbar, main].spacing(10).padding(10);
        if has_gallery {
            content = content.push(ui::strip::view(&frame.strip, self.config.thumbnail_size));
        }
        content = content.push(text(frame.status.clone()).size(14));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(shortcut)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn shortcut(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;
    use keyboard::Key;

    match key.as_ref() {
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        Key::Character("o") if modifiers.command() => Some(Message::Open),
        Key::Character("+") | Key::Character("=") => Some(Message::ZoomIn),
        Key::Character("-") => Some(Message::ZoomOut),
        Key::Character("0") => Some(Message::ResetZoom),
        _ => None,
    }
}

/// Command line options
struct Args {
    config: Option<PathBuf>,
    image: Option<String>,
}

/// Returns `None` when only help was requested
fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }

    let config = args.opt_value_from_str("--config")?;
    let image = args
        .finish()
        .into_iter()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned());

    Ok(Some(Args { config, image }))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(e) => {
            log::error!("{}", e);
            eprint!("{}", HELP);
            std::process::exit(2);
        }
    };

    let config = Config::load_or_default(args.config.as_deref());
    let image = args.image;

    iced::application(Viewer::title, Viewer::update, Viewer::view)
        .subscription(Viewer::subscription)
        .theme(Viewer::theme)
        .centered()
        .run_with(move || Viewer::new(config, image))
}
