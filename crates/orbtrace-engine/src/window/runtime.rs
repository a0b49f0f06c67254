use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::coords::PixelSize;
use crate::device::GpuInit;
use crate::scene::{self, Sphere};
use crate::tracer::Renderer;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "orbtrace: sphere ray tracer".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and ticks the renderer once per redraw until the
    /// window closes.
    ///
    /// Renderer construction failures end the loop and are returned here.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        Self::run_scene(config, gpu_init, scene::build())
    }

    /// Like [`Runtime::run`] with an explicit scene.
    pub fn run_scene(config: RuntimeConfig, gpu_init: GpuInit, spheres: Vec<Sphere>) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, spheres);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.fatal.take() {
            return Err(err);
        }

        if let Some(entry) = state.window.as_ref() {
            let stats = entry.borrow_renderer().stats();
            log::info!(
                "exiting after {} ticks ({} presented, {} skipped)",
                stats.ticks,
                stats.presented,
                stats.skipped
            );
        }

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    renderer: Renderer<'this>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    spheres: Vec<Sphere>,

    window: Option<WindowEntry>,
    fatal: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, spheres: Vec<Sphere>) -> Self {
        Self {
            config,
            gpu_init,
            spheres,
            window: None,
            fatal: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = &self.gpu_init;
        let spheres = &self.spheres;

        let entry = WindowEntryTryBuilder {
            window,
            renderer_builder: |w: &Window| pollster::block_on(Renderer::new(w, gpu_init, spheres)),
        }
        .try_build()
        .context("renderer construction failed")?;

        Ok(entry)
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(e) => {
                log::error!("{e:#}");
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous animation: every loop iteration asks for the next tick.
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(new_size) => {
                entry.with_renderer_mut(|r| r.resize(PixelSize::from(new_size)));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_renderer_mut(|r| r.resize(PixelSize::from(new_size)));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                if let Err(skipped) = entry.with_renderer_mut(|r| r.render_frame()) {
                    log::debug!("{skipped}");
                }
            }

            _ => {}
        }
    }
}
