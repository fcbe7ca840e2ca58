//! Checkbox demo application
//!
//! Drives a single "Hello world" checkbox through a headless host: the
//! pointer walks onto the box, clicks twice, then leaves. Every frame's draw
//! calls are logged, as are toggles and any script errors.
//!
//! Usage: `checkbox_demo [config.toml|config.ron]`

use frame_ui::prelude::*;
use frame_ui::host::{DrawCommand, RecordingHost};
use thiserror::Error;

/// Scripted pointer path: (x, y, left button held)
const POINTER_PATH: [(f64, f64, bool); 8] = [
    (40.0, 40.0, false),
    (90.0, 95.0, false),
    (110.0, 108.0, false),
    (110.0, 108.0, true),
    (110.0, 108.0, true),
    (111.0, 109.0, false),
    (111.0, 109.0, true),
    (200.0, 200.0, false),
];

#[derive(Error, Debug)]
enum AppError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Everything the draw callback touches
struct CheckboxApp {
    host: RecordingHost,
    input: InputSystem,
    checkbox: SyncCheckbox,
    font: FontConfig,
    toggles: usize,
}

impl CheckboxApp {
    fn new(config: ToolkitConfig) -> Self {
        let window = Window::new(WindowOptions::at(100.0, 100.0));
        let checkbox = SyncCheckbox::new("Hello world", window).with_style(config.checkbox);

        Self {
            host: RecordingHost::new(),
            input: InputSystem::new(),
            checkbox,
            font: config.font,
            toggles: 0,
        }
    }

    /// Body of the `Draw` callback
    fn draw(&mut self) -> Result<(), HostError> {
        self.input.update(&self.host);

        self.checkbox.render_box(&mut self.host)?;
        let font = self.host.add_font(&self.font.name, self.font.size, self.font.weight)?;
        let options = TextOptions::from_style(font, self.checkbox.style());
        self.checkbox.render_text(&mut self.host, &options)?;

        if self.checkbox.handle_click(&self.input) {
            self.toggles += 1;
            log::info!(
                "'{}' is now {}",
                self.checkbox.name(),
                if self.checkbox.is_checked() { "on" } else { "off" }
            );
        }
        Ok(())
    }
}

fn describe(command: &DrawCommand) -> String {
    match command {
        DrawCommand::FilledRect { bounds, color } => format!(
            "fill  {:>6.1},{:>6.1} {:>5.1}x{:<5.1} {}",
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            color.to_hex(HexOptions { alpha_included: true, zero_pad: true })
        ),
        DrawCommand::Rect { bounds, color } => format!(
            "frame {:>6.1},{:>6.1} {:>5.1}x{:<5.1} {}",
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            color.to_hex(HexOptions { alpha_included: true, zero_pad: true })
        ),
        DrawCommand::Text { x, y, text, .. } => format!("text  {x:>6.1},{y:>6.1} {text:?}"),
    }
}

fn load_config() -> Result<ToolkitConfig, AppError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {path}");
            Ok(ToolkitConfig::load_from_file(&path)?)
        }
        None => Ok(ToolkitConfig::default()),
    }
}

fn run() -> Result<(), AppError> {
    let config = load_config()?;
    let accent = ColorHex::new("#8264ff").to_rgba();
    log::info!("Accent color {:?} (alpha defaulted to {})", accent.to_array(), accent.alpha());

    let mut app = CheckboxApp::new(config);
    let mut reporter = ConsoleReporter::new(RecordingHost::new());

    let mut callbacks: Callbacks<CheckboxApp> = Callbacks::new();
    callbacks.on(CallbackKind::Draw, CheckboxApp::draw);
    callbacks.on(CallbackKind::Unload, |app| {
        log::info!("Unloading after {} toggles", app.toggles);
        Ok(())
    });
    callbacks.register_callbacks(&mut app.host)?;

    for (frame, &(x, y, down)) in POINTER_PATH.iter().enumerate() {
        app.host.set_cursor(x, y);
        app.host.set_button(MouseButton::Left, down);

        if let Err(err) = callbacks.fire(CallbackKind::Draw, &mut app) {
            let err = reporter.observe(ScriptError::new(err.to_string(), None));
            log::warn!("Frame {frame} aborted: {err}");
        }

        for command in app.host.take_commands() {
            log::debug!("frame {frame}: {}", describe(&command));
        }
    }

    callbacks.fire(CallbackKind::Unload, &mut app)?;
    log::info!(
        "Finished: checked = {}, reported errors = {}",
        app.checkbox.is_checked(),
        reporter.reported()
    );
    Ok(())
}

fn main() {
    if !frame_ui::foundation::logging::init(log::LevelFilter::Info) {
        log::warn!("A logger was already installed; RUST_LOG filters from this demo are ignored");
    }

    log::info!("Starting checkbox demo");

    if let Err(e) = run() {
        log::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}
