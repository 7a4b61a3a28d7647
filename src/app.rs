//! Demo lifecycle
//!
//! The platform loop owns a `Demo` and calls its hooks: `on_init` once the
//! window exists, `on_event` per input event, `on_frame` once per display
//! refresh, and `on_quit` on the way out.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use winit::keyboard::KeyCode;

use crate::consts::SIM_DT;
use crate::error::Result;
use crate::renderer::Canvas;
use crate::settings::Settings;
use crate::sim::{SimState, Tone, tick};

/// What the platform loop should do after a hook returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    Continue,
    /// Stop and exit with a success status
    Success,
    /// Stop and exit with a failure status
    Failure,
}

/// Input delivered to the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    KeyDown(KeyCode),
    /// Window resized to the given physical size
    Resized { width: u32, height: u32 },
}

/// Running demo: simulation state plus its jitter source
pub struct Demo {
    state: SimState,
    rng: Pcg32,
    seed: u64,
}

impl Demo {
    /// Build the block grid and balls.
    ///
    /// Uses `settings.seed` when present, otherwise `fallback_seed`.
    pub fn on_init(settings: &Settings, fallback_seed: u64) -> Result<Self> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or(fallback_seed);
        let state = SimState::new(settings);
        log::info!(
            "Initialized {}x{} playfield: {} blocks, {} balls, seed {}",
            settings.width,
            settings.height,
            state.blocks.len(),
            state.balls.len(),
            seed
        );

        Ok(Self {
            state,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        })
    }

    pub fn on_event(&mut self, event: &AppEvent) -> AppResult {
        match event {
            AppEvent::Quit => AppResult::Success,
            AppEvent::KeyDown(code) => {
                log::info!("Key pressed: {:?}", code);
                AppResult::Continue
            }
            AppEvent::Resized { width, height } => {
                log::warn!(
                    "Window resized to {}x{}; playfield stays {}x{}",
                    width,
                    height,
                    self.state.width,
                    self.state.height
                );
                AppResult::Continue
            }
        }
    }

    /// Step the simulation one frame and draw it into `canvas`
    pub fn on_frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> AppResult {
        tick(&mut self.state, &mut self.rng, canvas, SIM_DT);
        AppResult::Continue
    }

    pub fn on_quit(&self) {
        log::info!(
            "Quitting after {} frames ({} white / {} black blocks)",
            self.state.frame,
            self.state.count_tone(Tone::White),
            self.state.count_tone(Tone::Black)
        );
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::renderer::Framebuffer;

    fn demo(seed: u64) -> Demo {
        Demo::on_init(&Settings::default(), seed).unwrap()
    }

    #[test]
    fn test_quit_stops_with_success() {
        let mut d = demo(1);
        assert_eq!(d.on_event(&AppEvent::Quit), AppResult::Success);
    }

    #[test]
    fn test_key_and_resize_continue() {
        let mut d = demo(1);
        assert_eq!(d.on_event(&AppEvent::KeyDown(KeyCode::Space)), AppResult::Continue);
        let resized = AppEvent::Resized {
            width: 1200,
            height: 900,
        };
        assert_eq!(d.on_event(&resized), AppResult::Continue);
        // Playfield does not follow the window
        assert_eq!(d.state().width, 780.0);
        assert_eq!(d.state().height, 600.0);
    }

    #[test]
    fn test_frame_draws_and_continues() {
        let mut d = demo(3);
        let mut fb = Framebuffer::new(780, 600);

        assert_eq!(d.on_frame(&mut fb), AppResult::Continue);
        assert_eq!(d.state().frame, 1);

        // Ball centres are painted in their own tone
        for ball in &d.state().balls {
            let px = fb.get(ball.pos.x as u32, ball.pos.y as u32);
            assert_eq!(px, Some(ball.tone.rgba().to_xrgb()));
        }
        d.on_quit();
    }

    #[test]
    fn test_settings_seed_wins() {
        let settings = Settings {
            seed: Some(42),
            ..Default::default()
        };
        let d = Demo::on_init(&settings, 7).unwrap();
        assert_eq!(d.seed(), 42);
        assert_eq!(demo(7).seed(), 7);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = demo(1234);
        let mut b = demo(1234);
        let mut fb_a = Framebuffer::new(780, 600);
        let mut fb_b = Framebuffer::new(780, 600);

        for _ in 0..240 {
            a.on_frame(&mut fb_a);
            b.on_frame(&mut fb_b);
        }

        assert_eq!(a.state(), b.state());
        assert_eq!(fb_a.pixels(), fb_b.pixels());
    }

    #[test]
    fn test_invalid_settings_fail_init() {
        let settings = Settings {
            block_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Demo::on_init(&settings, 0),
            Err(Error::InvalidSettings(_))
        ));
    }
}
