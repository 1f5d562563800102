//! Desktop preview app for pattern-composer patterns
//!
//! Renders LED patterns in a window with interactive controls.
//! Uses the Renderer + IntentChannel API for all state changes, plus a
//! synthetic audio source so the spectrum pattern has something to show.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use pattern_composer::{
    BrightnessFilterConfig, ComposerConfig, ComposerIntent, ComposerStateIntent,
    Duration, FilterProcessorConfig, Instant, IntentChannel, IntentSender, PatternId,
    PixelLayout, Renderer, SensorFrame, TransitionTimings, U8Adjuster,
    bounds::RenderingBounds, sensor::FREQUENCY_BINS, ws2812_lut,
};

/// Maximum number of LEDs the renderer supports
const MAX_LEDS: usize = 512;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 60;

/// Default matrix width
const DEFAULT_MATRIX_WIDTH: u16 = 16;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 16;

/// Static intent channel for communication between UI and renderer
static INTENTS_CHANNEL: IntentChannel<INTENT_CHANNEL_SIZE> =
    IntentChannel::<INTENT_CHANNEL_SIZE>::new();

/// Default transition timings for preview (faster than production for responsiveness)
const PREVIEW_TRANSITION_TIMINGS: TransitionTimings = TransitionTimings {
    fade_out: Duration::from_millis(200),
    fade_in: Duration::from_millis(150),
    brightness: Duration::from_millis(100),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreviewLayout {
    /// Render as a 1D strip, wrapped to available window width
    Strip,
    /// Render as a serpentine matrix
    Matrix,
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Pattern Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "pattern-composer-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The renderer instance
    renderer: Renderer<'static, MAX_LEDS, INTENT_CHANNEL_SIZE>,
    /// Intent sender for UI changes
    intent_sender: IntentSender<'static, INTENT_CHANNEL_SIZE>,

    // UI state (tracked to detect changes and send intents)
    /// Currently selected pattern ID
    pattern_id: PatternId,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Brightness (0-255)
    brightness: u8,
    /// Whether to apply WS2812 gamma correction (post-process)
    apply_gamma: bool,
    /// Whether to feed a synthetic audio spectrum to the renderer
    synthetic_audio: bool,
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs to display
    led_count: usize,
    /// Preview layout
    layout: PreviewLayout,
    /// Matrix width (used in `PreviewLayout::Matrix`)
    matrix_width: u16,
    /// Serpentine wiring for the matrix layout
    zigzag: bool,
}

impl PreviewApp {
    fn new() -> Self {
        let initial_pattern = PatternId::PaletteWaves;
        let initial_brightness: u8 = 255;

        let config = ComposerConfig {
            pattern: initial_pattern,
            layout: PixelLayout::Strip,
            bounds: RenderingBounds {
                start: 0,
                end: DEFAULT_LED_COUNT as u16,
            },
            filters: FilterProcessorConfig {
                brightness: BrightnessFilterConfig {
                    min_brightness: 0,
                    scale: 255,
                    adjust: None,
                },
            },
            timings: PREVIEW_TRANSITION_TIMINGS,
            brightness: initial_brightness,
        };

        let renderer = Renderer::<MAX_LEDS, INTENT_CHANNEL_SIZE>::new(
            INTENTS_CHANNEL.receiver(),
            &config,
        );
        let intent_sender = INTENTS_CHANNEL.sender();

        // The filter starts dark; ramp up to the initial brightness.
        let _ = intent_sender.try_send(ComposerIntent::State(ComposerStateIntent {
            brightness: Some(initial_brightness),
            ..Default::default()
        }));

        Self {
            renderer,
            intent_sender,
            pattern_id: initial_pattern,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            brightness: initial_brightness,
            apply_gamma: false,
            synthetic_audio: false,
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
            layout: PreviewLayout::Strip,
            matrix_width: DEFAULT_MATRIX_WIDTH,
            zigzag: true,
        }
    }

    /// Send a pattern change intent
    fn send_pattern_change(&self, pattern_id: PatternId) {
        let intent = ComposerIntent::State(ComposerStateIntent {
            pattern_id: Some(pattern_id),
            ..Default::default()
        });
        let _ = self.intent_sender.try_send(intent);
    }

    /// Send a brightness change intent
    fn send_brightness_change(&self, brightness: u8) {
        let intent = ComposerIntent::State(ComposerStateIntent {
            brightness: Some(brightness),
            ..Default::default()
        });
        let _ = self.intent_sender.try_send(intent);
    }

    /// Send a brightness adjuster change intent
    fn send_brightness_adjuster_change(&self, adjuster: Option<U8Adjuster>) {
        let intent = ComposerIntent::Adjuster(adjuster);
        let _ = self.intent_sender.try_send(intent);
    }

    /// Send a bounds change intent
    fn send_bounds_change(&self, led_count: u16) {
        let intent = ComposerIntent::Bounds(RenderingBounds {
            start: 0,
            end: led_count,
        });
        let _ = self.intent_sender.try_send(intent);
    }

    /// Send a layout change intent matching the preview layout
    fn send_layout_change(&self) {
        let layout = match self.layout {
            PreviewLayout::Strip => PixelLayout::Strip,
            PreviewLayout::Matrix => PixelLayout::Matrix {
                width: self.matrix_width,
                zigzag: self.zigzag,
            },
        };
        let _ = self.intent_sender.try_send(ComposerIntent::Layout(layout));
    }

    /// Feed the renderer a synthetic audio spectrum derived from the
    /// animation clock
    fn send_synthetic_audio(&self) {
        let mut frame = SensorFrame::default();
        let t = self.t_ms as f32 / 1000.0;
        for (bin, value) in frame.frequency_data.iter_mut().enumerate() {
            let f = bin as f32 / FREQUENCY_BINS as f32;
            // A couple of sweeping peaks over a low noise floor
            let sweep = (1.0 - (f - (0.5 + 0.5 * (t * 0.7).sin())).abs() * 6.0).max(0.0);
            let beat = if (t * 2.0).fract() < 0.1 && bin < 4 { 0.6 } else { 0.0 };
            *value = 0.01 + 0.2 * sweep + beat;
        }
        frame.energy_average = 0.1;
        frame.light = 100.0;
        let _ = self.intent_sender.try_send(ComposerIntent::Sensors(frame));
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 =
                delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update synthetic time
        self.update_time();

        if self.synthetic_audio {
            self.send_synthetic_audio();
        }

        // Render the frame using synthetic time
        let now = Instant::from_millis(self.t_ms);
        let frame = self.renderer.render(now).to_vec();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing {
                                "⏸ Pause"
                            } else {
                                "▶ Play"
                            })
                            .clicked()
                        {
                            self.toggle_playing();
                        }

                        ui.add_space(8.0);
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(
                            egui::Slider::new(&mut self.time_scale, 0.1..=5.0)
                                .logarithmic(true),
                        );
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <LayoutSelector>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Layout:");
                        let old_layout = self.layout;
                        ui.selectable_value(
                            &mut self.layout,
                            PreviewLayout::Strip,
                            "strip",
                        );
                        ui.selectable_value(
                            &mut self.layout,
                            PreviewLayout::Matrix,
                            "matrix",
                        );
                        if self.layout != old_layout {
                            self.send_layout_change();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(
                            &mut self.led_count,
                            1usize..=MAX_LEDS,
                        ));
                        if self.led_count != old_led_count {
                            #[allow(clippy::cast_possible_truncation)]
                            self.send_bounds_change(self.led_count as u16);
                        }

                        if self.layout == PreviewLayout::Matrix {
                            ui.add_space(8.0);

                            ui.label("Width:");
                            let old_width = self.matrix_width;
                            ui.add(egui::Slider::new(
                                &mut self.matrix_width,
                                1u16..=64u16,
                            ));
                            let old_zigzag = self.zigzag;
                            ui.checkbox(&mut self.zigzag, "zigzag");
                            if self.matrix_width != old_width
                                || self.zigzag != old_zigzag
                            {
                                self.send_layout_change();
                            }
                        }
                    });
                });
                // </LayoutSelector>
            });

            ui.add_space(16.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Pattern:");
                    let mut selected_pattern = self.pattern_id;
                    egui::ComboBox::from_id_salt("pattern_selector")
                        .selected_text(self.pattern_id.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut selected_pattern,
                                PatternId::PaletteWaves,
                                "palette_waves",
                            );
                            ui.selectable_value(
                                &mut selected_pattern,
                                PatternId::PerlinFire,
                                "perlin_fire",
                            );
                            ui.selectable_value(
                                &mut selected_pattern,
                                PatternId::PlanePulse,
                                "plane_pulse",
                            );
                            ui.selectable_value(
                                &mut selected_pattern,
                                PatternId::Spectrum,
                                "spectrum",
                            );
                            ui.selectable_value(
                                &mut selected_pattern,
                                PatternId::SpinWheel,
                                "spin_wheel",
                            );
                            ui.selectable_value(
                                &mut selected_pattern,
                                PatternId::Sparks,
                                "sparks",
                            );
                        });
                    if selected_pattern != self.pattern_id {
                        self.pattern_id = selected_pattern;
                        self.send_pattern_change(selected_pattern);
                    }
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label("Brightness:");
                    let old_brightness = self.brightness;
                    ui.add(
                        egui::DragValue::new(&mut self.brightness)
                            .range(0u8..=255u8),
                    );
                    if self.brightness != old_brightness {
                        self.send_brightness_change(self.brightness);
                    }

                    ui.add_space(8.0);

                    let old_apply_gamma = self.apply_gamma;
                    ui.horizontal(|ui| {
                        ui.checkbox(&mut self.apply_gamma, "WS2812 Gamma");
                    });
                    if self.apply_gamma != old_apply_gamma {
                        let adjuster: Option<U8Adjuster> = if self.apply_gamma {
                            Some(ws2812_lut)
                        } else {
                            None
                        };
                        self.send_brightness_adjuster_change(adjuster);
                    }

                    ui.add_space(8.0);

                    ui.checkbox(&mut self.synthetic_audio, "Synthetic audio");
                });
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            match self.layout {
                PreviewLayout::Strip => {
                    #[allow(
                        clippy::cast_possible_truncation,
                        clippy::cast_sign_loss
                    )]
                    let leds_per_row =
                        (available_width / led_pitch).floor().max(1.0) as usize;
                    let rows = self.led_count.div_ceil(leds_per_row);
                    #[allow(clippy::cast_precision_loss)]
                    let height = rows as f32 * led_pitch;

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(available_width, height),
                        egui::Sense::hover(),
                    );
                    let origin = response.rect.min;

                    #[allow(clippy::cast_precision_loss)]
                    for (i, pixel) in frame.iter().enumerate() {
                        let row = i / leds_per_row;
                        let col = i % leds_per_row;
                        let x = origin.x + col as f32 * led_pitch;
                        let y = origin.y + row as f32 * led_pitch;

                        let rect = egui::Rect::from_min_size(
                            egui::pos2(x, y),
                            egui::vec2(self.led_size, self.led_size),
                        );
                        let color =
                            egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                        painter.rect_filled(rect, 3.0, color);
                    }
                }
                PreviewLayout::Matrix => {
                    let width = usize::from(self.matrix_width.max(1));
                    let rows = frame.len().div_ceil(width);
                    #[allow(clippy::cast_precision_loss)]
                    let height = rows as f32 * led_pitch;

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(available_width, height),
                        egui::Sense::hover(),
                    );
                    let origin = response.rect.min;

                    // Undo the serpentine wiring so the window shows the
                    // matrix as the eye would see it
                    #[allow(clippy::cast_precision_loss)]
                    for (i, pixel) in frame.iter().enumerate() {
                        let row = i / width;
                        let mut col = i % width;
                        if self.zigzag && row % 2 == 1 {
                            col = width - 1 - col;
                        }
                        let x = origin.x + col as f32 * led_pitch;
                        let y = origin.y + row as f32 * led_pitch;

                        let rect = egui::Rect::from_min_size(
                            egui::pos2(x, y),
                            egui::vec2(self.led_size, self.led_size),
                        );
                        let color =
                            egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                        painter.rect_filled(rect, 2.0, color);
                    }
                }
            }
        });
    }
}
