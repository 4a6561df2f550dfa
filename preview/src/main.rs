//! Desktop preview for the totem LED matrix
//!
//! Simulates the 9x9 matrix and the four-button interface in a window.
//! Button presses go through the same `UiState` and command queue as on
//! the device, and frames are produced by the real `FrameScheduler`.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use totem_composer::{
    BrightnessFilterConfig, Button, Command, CommandQueue, CommandSender, Controller,
    ControllerConfig, FilterProcessorConfig, FrameScheduler, Instant, MatrixLayout, OutputDriver,
    PatternId, Press, Rgb, U8Adjuster, UiMode, UiState, filter::UNCORRECTED,
    frame_scheduler::DEFAULT_FPS, ws2812_lut,
};

const ROWS: usize = 9;
const COLS: usize = 9;
const LEDS: usize = ROWS * COLS;

/// Command queue size
const QUEUE_SIZE: usize = 16;

/// Size of each LED in pixels
const LED_SIZE: f32 = 28.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

/// A held button repeats this often
const LONG_PRESS_REPEAT: u64 = 100;

/// Static command queue between the simulated buttons and the controller
static COMMANDS: CommandQueue<QUEUE_SIZE> = CommandQueue::new();

const PATTERNS: [PatternId; 6] = [
    PatternId::Rainbow,
    PatternId::Confetti,
    PatternId::BpmBoogie,
    PatternId::ScrollRows,
    PatternId::RollingRows,
    PatternId::RollingRowsDiagonal,
];

/// Keeps the last written frame for painting
struct FrameCapture {
    frame: [Rgb; LEDS],
}

impl OutputDriver for FrameCapture {
    fn write(&mut self, colors: &[Rgb]) {
        for (out, color) in self.frame.iter_mut().zip(colors) {
            *out = *color;
        }
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_title("Totem Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "totem-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: FrameScheduler<'static, FrameCapture, ROWS, COLS, QUEUE_SIZE>,
    commands: CommandSender<'static, QUEUE_SIZE>,
    ui_state: UiState,
    /// Wall-clock reference for the simulated device clock
    started: StdInstant,
    /// Last time a held button fired, in device milliseconds
    last_repeat: u64,
    /// Press start of the held button
    held_since: Option<u64>,
    /// Show the raw pattern buffer instead of the filtered output
    raw: bool,
    apply_gamma: bool,
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            scheduler: Self::scheduler(false),
            commands: COMMANDS.sender(),
            ui_state: UiState::new(),
            started: StdInstant::now(),
            last_repeat: 0,
            held_since: None,
            raw: false,
            apply_gamma: false,
        }
    }

    fn scheduler(
        apply_gamma: bool,
    ) -> FrameScheduler<'static, FrameCapture, ROWS, COLS, QUEUE_SIZE> {
        let config = ControllerConfig {
            layout: MatrixLayout::serpentine(),
            filters: FilterProcessorConfig {
                brightness: BrightnessFilterConfig {
                    adjust: apply_gamma.then_some(ws2812_lut as U8Adjuster),
                },
                correction: UNCORRECTED,
                temperature: UNCORRECTED,
            },
            ..ControllerConfig::default()
        };
        let controller = Controller::new(COMMANDS.receiver(), &config);
        FrameScheduler::with_fps(
            controller,
            FrameCapture {
                frame: [Rgb::default(); LEDS],
            },
            DEFAULT_FPS,
        )
    }

    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn press(&mut self, button: Button, press: Press) {
        if let Some(command) = self.ui_state.handle(button, press) {
            let _ = self.commands.try_send(command);
        }
    }

    fn button(&mut self, ui: &mut egui::Ui, label: &str, button: Button, now: u64) {
        let response = ui.add(egui::Button::new(label).min_size(egui::vec2(90.0, 36.0)));
        if response.clicked() {
            self.press(button, Press::Short);
        }

        if response.is_pointer_button_down_on() {
            let since = *self.held_since.get_or_insert(now);
            let held = now.saturating_sub(since);
            if held >= 500 && now.saturating_sub(self.last_repeat) >= LONG_PRESS_REPEAT {
                self.last_repeat = now;
                self.press(
                    button,
                    Press::Long {
                        held: embassy_time::Duration::from_millis(held),
                    },
                );
            }
        }
    }

    fn paint_matrix(&self, ui: &mut egui::Ui) {
        let controller = self.scheduler.controller();
        let layout = controller.layout();
        let frame: &[Rgb] = if self.raw {
            controller.leds()
        } else {
            &self.scheduler.output().frame
        };

        let pitch = LED_SIZE + LED_GAP;
        #[allow(clippy::cast_precision_loss)]
        let size = egui::vec2(COLS as f32 * pitch, ROWS as f32 * pitch);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for row in 0..ROWS {
            for col in 0..COLS {
                let pixel = frame[layout.index(row, col)];
                // row 0 is the bottom of the totem
                let x = origin.x + col as f32 * pitch;
                let y = origin.y + (ROWS - 1 - row) as f32 * pitch;
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 4.0, color);
            }
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now_ms();
        self.scheduler.poll(Instant::from_millis(now));
        ctx.request_repaint();

        if !ctx.input(|input| input.pointer.any_down()) {
            self.held_since = None;
        }

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Buttons");
            ui.add_space(4.0);
            self.button(ui, "Toggle", Button::Toggle, now);
            ui.horizontal(|ui| {
                self.button(ui, "−", Button::Decrease, now);
                self.button(ui, "+", Button::Increase, now);
            });
            self.button(ui, "Tap", Button::Function, now);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                for mode in [UiMode::Pattern, UiMode::Brightness, UiMode::Speed] {
                    let lit = self.ui_state.mode() == mode;
                    ui.label(egui::RichText::new("●").color(if lit {
                        egui::Color32::LIGHT_GREEN
                    } else {
                        egui::Color32::DARK_GRAY
                    }));
                }
                ui.label(format!("{:?}", self.ui_state.mode()));
            });

            ui.separator();

            let controller = self.scheduler.controller();
            let current = controller.pattern();
            let tap_mode = controller.tap_mode();
            let mut selected = current;
            egui::ComboBox::from_id_salt("pattern_selector")
                .selected_text(selected.as_str())
                .show_ui(ui, |ui| {
                    for id in PATTERNS {
                        ui.selectable_value(&mut selected, id, id.as_str());
                    }
                });
            if selected != current {
                let _ = self.commands.try_send(Command::SetPattern(selected));
            }

            ui.label(format!(
                "Tap tempo {} (hold Tap for 4 s)",
                if tap_mode { "on" } else { "off" }
            ));

            ui.checkbox(&mut self.raw, "Raw pattern buffer");
            let old_gamma = self.apply_gamma;
            ui.checkbox(&mut self.apply_gamma, "WS2812 gamma");
            if old_gamma != self.apply_gamma {
                let controller = self.scheduler.controller();
                let (pattern, brightness) = (controller.pattern(), controller.brightness());
                self.scheduler = Self::scheduler(self.apply_gamma);
                let _ = self.commands.try_send(Command::SetPattern(pattern));
                let _ = self.commands.try_send(Command::SetBrightness(brightness));
                if !tap_mode {
                    let _ = self.commands.try_send(Command::ToggleTapMode);
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let controller = self.scheduler.controller();
            let indicator = controller.tempo_indicator(Instant::from_millis(now));
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("●").size(20.0).color(if indicator {
                    egui::Color32::RED
                } else {
                    egui::Color32::DARK_GRAY
                }));
                ui.label(format!(
                    "{} BPM | {} | brightness {} | hue speed {}",
                    controller.bpm(),
                    controller.pattern_name(),
                    controller.brightness(),
                    controller.hue_speed(),
                ));
            });
            ui.add_space(12.0);
            self.paint_matrix(ui);
        });
    }
}
