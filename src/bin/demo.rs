//! Demo screen embedding the segmented strip.
//!
//! A single window with the strip along the top edge and a content panel
//! that swaps color with the selection. Mouse input maps to pointer phases,
//! change events update the window title, and the chosen index persists
//! through the RON config.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, OwnedDisplayHandle};
use winit::window::{Window, WindowId};

use tabline::config::DemoConfig;
use tabline::core::measure::{CellMeasure, TextMeasure};
use tabline::render::{self, primitives, FontStore, PixelRect, RenderTarget};
use tabline::{Color, ControlEvent, Point, PointerPhase, Rect, SegmentedControl};

/// Content panel colors cycled by selection index.
const PANEL_COLORS: &[Color] = &[
    Color {
        r: 222,
        g: 235,
        b: 247,
    },
    Color {
        r: 247,
        g: 235,
        b: 222,
    },
    Color {
        r: 228,
        g: 247,
        b: 222,
    },
    Color {
        r: 240,
        g: 224,
        b: 245,
    },
];

struct DemoWindow {
    window: Arc<Window>,
    surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    control: SegmentedControl,
    font: Option<Arc<FontStore>>,
    mouse_pos: (f64, f64),
    mouse_down: bool,
}

impl DemoWindow {
    fn new(
        window: Arc<Window>,
        context: &Context<OwnedDisplayHandle>,
        config: &DemoConfig,
    ) -> Result<Self> {
        let surface = Surface::new(context, window.clone())
            .map_err(|err| anyhow::anyhow!("failed to create surface: {err}"))?;

        let font = match FontStore::load_system() {
            Ok(store) => Some(Arc::new(store)),
            Err(err) => {
                eprintln!("No system font, titles will not render: {err:#}");
                None
            }
        };
        let measure: Box<dyn TextMeasure> = match &font {
            Some(store) => Box::new(Arc::clone(store)),
            None => Box::new(CellMeasure::default()),
        };

        let scale = window.scale_factor();
        let size = window.inner_size();
        let logical_width = size.width as f32 / scale as f32;

        let mut control = config.build_control(measure);
        control.set_frame(Rect::new(0.0, 0.0, logical_width, config.strip_height));
        control.set_attached(true);

        Ok(Self {
            window,
            surface,
            control,
            font,
            mouse_pos: (0.0, 0.0),
            mouse_down: false,
        })
    }

    fn scale(&self) -> f32 {
        self.window.scale_factor() as f32
    }

    fn pointer_point(&self) -> Point {
        let scale = self.scale() as f64;
        Point::new(
            (self.mouse_pos.0 / scale) as f32,
            (self.mouse_pos.1 / scale) as f32,
        )
    }

    fn on_resized(&mut self) {
        let size = self.window.inner_size();
        let logical_width = size.width as f32 / self.scale();
        let height = self.control.frame().height;
        self.control
            .set_frame(Rect::new(0.0, 0.0, logical_width, height));
        self.window.request_redraw();
    }

    fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let point = self.pointer_point();
        match state {
            ElementState::Pressed => {
                self.mouse_down = true;
                self.control.handle_pointer(PointerPhase::Down, point);
            }
            ElementState::Released => {
                self.mouse_down = false;
                self.control.handle_pointer(PointerPhase::Up, point);
            }
        }
    }

    fn on_cursor_moved(&mut self, position: winit::dpi::PhysicalPosition<f64>) {
        self.mouse_pos = (position.x, position.y);
        if self.mouse_down {
            let point = self.pointer_point();
            self.control.handle_pointer(PointerPhase::Moved, point);
        }
    }

    fn on_redraw_requested(&mut self) {
        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        if self.surface.resize(w, h).is_err() {
            return;
        }
        let Ok(mut buffer) = self.surface.buffer_mut() else {
            return;
        };

        let now = Instant::now();
        self.control.tick(now);

        let scale = self.window.scale_factor() as f32;
        let frame: &mut [u32] = &mut buffer;
        let mut target = RenderTarget {
            buffer: frame,
            width: w.get() as usize,
            height: h.get() as usize,
        };

        // Content panel under the strip, colored by selection.
        let selected = self.control.selected_index();
        let panel_color = if selected >= 0 {
            PANEL_COLORS[selected as usize % PANEL_COLORS.len()]
        } else {
            Color::WHITE
        };
        primitives::fill_rect(
            &mut target,
            PixelRect {
                x: 0,
                y: 0,
                w: w.get() as i32,
                h: h.get() as i32,
            },
            panel_color,
        );

        // Drop shadow just below the strip.
        let strip = self.control.frame();
        primitives::fill_rect(
            &mut target,
            render::to_physical(
                Rect::new(0.0, strip.height, strip.width, 1.0),
                scale,
            ),
            self.control.style().shadow_color,
        );

        let layers = self.control.rebuild_layers();
        let indicator = self
            .control
            .is_animating()
            .then(|| self.control.indicator_display_frame(now));
        render::render_control(
            &mut target,
            self.font.as_deref(),
            &layers,
            Point::new(strip.x, strip.y),
            self.control.scroll().offset_x(),
            indicator,
            scale,
        );

        let _ = buffer.present();
    }
}

struct App {
    context: Option<Context<OwnedDisplayHandle>>,
    win: Option<DemoWindow>,
    config: DemoConfig,
}

impl App {
    fn new(config: DemoConfig) -> Self {
        Self {
            context: None,
            win: None,
            config,
        }
    }

    /// Drains control notifications: title + persisted selection.
    fn drain_control_events(&mut self) {
        let Some(win) = self.win.as_mut() else {
            return;
        };
        for event in win.control.drain_events() {
            match event {
                ControlEvent::SelectionChanged => {
                    let index = win.control.selected_index();
                    win.window
                        .set_title(&format!("tabline demo — segment {index}"));
                    self.config.selected_index = index;
                    self.config.save();
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.win.is_some() {
            return;
        }

        let context = match Context::new(event_loop.owned_display_handle()) {
            Ok(ctx) => ctx,
            Err(err) => {
                eprintln!("Failed to create rendering context: {err}");
                event_loop.exit();
                return;
            }
        };

        let attrs = Window::default_attributes()
            .with_title("tabline demo")
            .with_inner_size(LogicalSize::new(640.0, 360.0));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(err) => {
                eprintln!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let demo = match DemoWindow::new(window, &context, &self.config) {
            Ok(demo) => demo,
            Err(err) => {
                eprintln!("Failed to set up rendering: {err:#}");
                event_loop.exit();
                return;
            }
        };
        demo.window.request_redraw();
        self.context = Some(context);
        self.win = Some(demo);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.win.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                win.on_cursor_moved(position);
                if win.mouse_down {
                    win.window.request_redraw();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                win.on_mouse_input(state, button);
                win.window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } | WindowEvent::Resized(_) => {
                win.on_resized();
            }
            WindowEvent::RedrawRequested => {
                win.on_redraw_requested();
            }
            _ => (),
        }
        self.drain_control_events();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let mut next_wakeup: Option<Instant> = None;
        if let Some(win) = self.win.as_ref() {
            if let Some(deadline) = win.control.animation_schedule(now) {
                win.window.request_redraw();
                next_wakeup = Some(deadline);
            }
        }
        match next_wakeup {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn main() {
    let config = DemoConfig::load();
    let event_loop = match EventLoop::new() {
        Ok(loop_) => loop_,
        Err(err) => {
            eprintln!("Failed to create event loop: {err}");
            return;
        }
    };
    let mut app = App::new(config);
    if let Err(err) = event_loop.run_app(&mut app) {
        eprintln!("Application error: {err}");
    }
}
