//! Platform layer
//!
//! Owns the winit event loop and the softbuffer surface. Window events are
//! mapped to `AppEvent`s for the demo. Frames are paced at a fixed 60 Hz:
//! each due frame runs exactly one `Demo::on_frame` into a playfield-sized
//! framebuffer, which is then scaled onto the window surface.

mod pacing;

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::app::{AppEvent, AppResult, Demo};
use crate::error::{Error, Result};
use crate::renderer::Framebuffer;
use crate::settings::Settings;
pub use pacing::{FRAME_INTERVAL, FramePacer};

/// Map a key transition to a demo event. Auto-repeat presses count as key
/// downs; releases and unidentified keys are dropped.
fn key_event(key: PhysicalKey, state: ElementState) -> Option<AppEvent> {
    match (key, state) {
        (PhysicalKey::Code(code), ElementState::Pressed) => Some(AppEvent::KeyDown(code)),
        _ => None,
    }
}

/// Window, its presentation surface and the framebuffer the demo draws into
struct Display {
    window: Rc<Window>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    surface_size: (u32, u32),
    framebuffer: Framebuffer,
}

impl Display {
    fn create(event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(LogicalSize::new(settings.width, settings.height))
            .with_resizable(settings.resizable);

        let window = Rc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| Error::Window(e.to_string()))?,
        );
        let context =
            softbuffer::Context::new(Rc::clone(&window)).map_err(|e| Error::Window(e.to_string()))?;
        let surface = softbuffer::Surface::new(&context, Rc::clone(&window))
            .map_err(|e| Error::Window(e.to_string()))?;

        Ok(Self {
            window,
            surface,
            surface_size: (0, 0),
            framebuffer: Framebuffer::new(settings.width, settings.height),
        })
    }

    /// Scale the framebuffer onto the window surface and show it
    fn present(&mut self) -> std::result::Result<(), softbuffer::SoftBufferError> {
        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            // Minimized
            return Ok(());
        };

        if self.surface_size != (w.get(), h.get()) {
            self.surface.resize(w, h)?;
            self.surface_size = (w.get(), h.get());
        }
        let mut buffer = self.surface.buffer_mut()?;
        self.framebuffer.blit_scaled(&mut buffer, w.get(), h.get());
        buffer.present()
    }
}

/// winit application driving the demo hooks
pub struct App {
    settings: Settings,
    fallback_seed: u64,
    display: Option<Display>,
    demo: Option<Demo>,
    pacer: FramePacer,
    result: AppResult,
}

impl App {
    pub fn new(settings: Settings, fallback_seed: u64) -> Self {
        Self {
            settings,
            fallback_seed,
            display: None,
            demo: None,
            pacer: FramePacer::new(Instant::now(), FRAME_INTERVAL),
            result: AppResult::Continue,
        }
    }

    /// Outcome once the loop has stopped
    pub fn result(&self) -> AppResult {
        self.result
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop, result: AppResult) {
        self.result = result;
        event_loop.exit();
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: AppEvent) {
        if let Some(demo) = self.demo.as_mut() {
            let result = demo.on_event(&event);
            if result != AppResult::Continue {
                self.stop(event_loop, result);
            }
        } else if event == AppEvent::Quit {
            self.stop(event_loop, AppResult::Success);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(display), Some(demo)) = (self.display.as_mut(), self.demo.as_mut()) else {
            return;
        };

        // Redraws between due frames only re-present the last image
        let result = if self.pacer.take_due() {
            demo.on_frame(&mut display.framebuffer)
        } else {
            AppResult::Continue
        };
        if let Err(e) = display.present() {
            log::warn!("Present failed, frame dropped: {}", e);
        }
        if result != AppResult::Continue {
            self.stop(event_loop, result);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }

        let display = match Display::create(event_loop, &self.settings) {
            Ok(display) => display,
            Err(e) => {
                log::error!("{}", e);
                self.stop(event_loop, AppResult::Failure);
                return;
            }
        };

        match Demo::on_init(&self.settings, self.fallback_seed) {
            Ok(demo) => self.demo = Some(demo),
            Err(e) => {
                log::error!("{}", e);
                self.stop(event_loop, AppResult::Failure);
                return;
            }
        }

        self.pacer = FramePacer::new(Instant::now(), FRAME_INTERVAL);
        display.window.request_redraw();
        self.display = Some(display);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.dispatch(event_loop, AppEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(event) = key_event(physical_key, state) {
                    self.dispatch(event_loop, event);
                }
            }
            WindowEvent::Resized(size) => self.dispatch(
                event_loop,
                AppEvent::Resized {
                    width: size.width,
                    height: size.height,
                },
            ),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(display) = self.display.as_ref() else {
            return;
        };

        if self.pacer.poll(Instant::now()) {
            display.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_frame()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        match self.demo.as_ref() {
            Some(demo) => demo.on_quit(),
            None => log::info!("Quitting"),
        }
    }
}

/// Run the demo until the window closes
pub fn run(settings: Settings, fallback_seed: u64) -> Result<AppResult> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, fallback_seed);
    event_loop.run_app(&mut app)?;
    Ok(app.result())
}
