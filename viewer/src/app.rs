use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::{Display, DisplayApiPreference, GetGlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};

use raw_window_handle::{HasRawDisplayHandle, HasRawWindowHandle};

use std::ffi::CString;
use std::num::NonZeroU32;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{Event, WindowEvent};
use winit::error::OsError;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use gl_wrapper::geometry::GBError;
use gl_wrapper::program::PBError;
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::shader::ShaderSourceError;

use linedraw::RasterError;
use linedraw_common::scene_loader::LoaderError;

use crate::demo::Demo;

pub struct App<D: Demo> {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    demo: D,
}

impl<D: Demo + 'static> App<D> {
    pub fn new(demo: D, width: u32, height: u32) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(width, height)))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title(demo.title());

        // WGL needs a window before it can pick a config
        #[cfg(windows)]
        let early_window = Some(window_builder.clone().build(&event_loop)?);
        #[cfg(not(windows))]
        let early_window: Option<Window> = None;

        let preference = display_preference(early_window.as_ref());
        let gl_display = unsafe { Display::new(event_loop.raw_display_handle(), preference) }
            .map_err(|e| AppError::Display(e.to_string()))?;

        let mut template = ConfigTemplateBuilder::new();
        if let Some(window) = &early_window {
            template = template.compatible_with_native_window(window.raw_window_handle());
        }

        let configs = unsafe { gl_display.find_configs(template.build()) }
            .map_err(|e| AppError::Display(e.to_string()))?;
        let gl_config = first_config(configs)?;

        let window = match early_window {
            Some(window) => window,
            None => glutin_winit::finalize_window(&event_loop, window_builder, &gl_config)?,
        };

        let handle = Some(window.raw_window_handle());

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 5))))
            .build(handle);

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        log::info!("Created GL 4.5 context for \"{}\"", demo.title());

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            demo,
        })
    }

    /// Only returns when loading the demo fails.
    pub fn run(self) -> Result<(), AppError> {
        let App {
            event_loop,
            gl_context,
            gl_window,
            demo,
        } = self;

        let mut resources = Some(demo.load()?);

        let mut gl_renderer = GlRenderer::new();
        let [r, g, b] = demo.clear_color();

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if let (Some(width), Some(height)) =
                            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                        {
                            gl_window.surface.resize(&gl_context, width, height);
                            gl_renderer.resize(size.width, size.height);
                            gl_window.window.request_redraw();
                        }
                    }
                    WindowEvent::CloseRequested => control_flow.set_exit(),
                    _ => (),
                },
                Event::RedrawRequested(_) => {
                    gl_renderer.clear_color(r, g, b);

                    if let Some(resources) = &resources {
                        demo.draw(resources, &mut gl_renderer);
                    }

                    if let Err(e) = gl_window.surface.swap_buffers(&gl_context) {
                        log::error!("Could not present frame: {e}");
                        control_flow.set_exit_with_code(1);
                    }
                }
                Event::LoopDestroyed => {
                    // GL objects go away while the context is still current
                    resources.take();
                }
                _ => (),
            }
        })
    }
}

#[cfg(windows)]
fn display_preference(window: Option<&Window>) -> DisplayApiPreference {
    DisplayApiPreference::WglThenEgl(window.map(|w| w.raw_window_handle()))
}

#[cfg(target_os = "macos")]
fn display_preference(_window: Option<&Window>) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_preference(_window: Option<&Window>) -> DisplayApiPreference {
    DisplayApiPreference::EglThenGlx(Box::new(winit::platform::unix::register_xlib_error_hook))
}

/// Displays may offer no config at all for the template.
fn first_config<C>(mut configs: impl Iterator<Item = C>) -> Result<C, AppError> {
    configs.next().ok_or(AppError::NoConfig)
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::WindowSize(width, height))?,
            NonZeroU32::new(height).ok_or(AppError::WindowSize(width, height))?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { surface, window })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create display: {0}")]
    Display(String),
    #[error("display offers no GL config")]
    NoConfig,
    #[error("could not create window: {0}")]
    Window(#[from] OsError),
    #[error("invalid window size {0}x{1}")]
    WindowSize(u32, u32),
    #[error(transparent)]
    Gl(#[from] glutin::error::Error),
    #[error(transparent)]
    Geometry(#[from] GBError),
    #[error(transparent)]
    Program(#[from] PBError),
    #[error(transparent)]
    ShaderSource(#[from] ShaderSourceError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    Scene(#[from] LoaderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_config_is_an_error() {
        assert!(matches!(
            first_config(std::iter::empty::<u8>()),
            Err(AppError::NoConfig)
        ));
        assert_eq!(first_config([3_u8, 4].into_iter()).unwrap(), 3);
    }
}
