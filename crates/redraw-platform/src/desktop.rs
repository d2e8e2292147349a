use std::sync::Arc;

use redraw_core::{Engine, Error, PointerButton, RenderBackend, Size, vec2};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{CursorIcon, Window, WindowAttributes, WindowId};

use crate::{App, CursorHint, Host, HostEvent};

/// Pixels scrolled per wheel line.
const LINE_SCROLL_PX: f32 = 40.0;

#[derive(Clone, Debug)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "redraw".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

/// Open a window and drive `app` from its events until it is closed.
///
/// `make_backend` is called once the window exists; an error from it (or from
/// window creation) stops the event loop and is returned here.
pub fn run_desktop_app<A, B, F>(
    options: WindowOptions,
    engine: Engine,
    app: A,
    make_backend: F,
) -> anyhow::Result<()>
where
    A: App,
    B: RenderBackend,
    F: FnOnce(Arc<Window>) -> anyhow::Result<B>,
{
    let event_loop = EventLoop::new()?;
    let mut runner = Runner {
        options,
        pending: Some((engine, app, make_backend)),
        window: None,
        host: None,
        cursor: CursorHint::Default,
        error: None,
    };
    event_loop.run_app(&mut runner)?;

    match runner.error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

struct Runner<A, B, F> {
    options: WindowOptions,
    pending: Option<(Engine, A, F)>,
    window: Option<Arc<Window>>,
    host: Option<Host<A, B>>,
    cursor: CursorHint,
    error: Option<Error>,
}

impl<A, B, F> Runner<A, B, F>
where
    A: App,
    B: RenderBackend,
    F: FnOnce(Arc<Window>) -> anyhow::Result<B>,
{
    fn fail(&mut self, el: &ActiveEventLoop, reason: String) {
        log::error!("{reason}");
        self.error = Some(Error::SurfaceUnavailable(reason));
        el.exit();
    }

    fn sync_cursor(&mut self) {
        let (Some(host), Some(window)) = (&self.host, &self.window) else {
            return;
        };
        let hint = host.cursor();
        if hint != self.cursor {
            window.set_cursor(match hint {
                CursorHint::Default => CursorIcon::Default,
                CursorHint::Pointer => CursorIcon::Pointer,
            });
            self.cursor = hint;
        }
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Tertiary),
        _ => None,
    }
}

impl<A, B, F> ApplicationHandler for Runner<A, B, F>
where
    A: App,
    B: RenderBackend,
    F: FnOnce(Arc<Window>) -> anyhow::Result<B>,
{
    fn resumed(&mut self, el: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }
        let Some((engine, app, make_backend)) = self.pending.take() else {
            return;
        };

        let attrs = WindowAttributes::default()
            .with_title(self.options.title.clone())
            .with_inner_size(PhysicalSize::new(self.options.width, self.options.height));
        let window = match el.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => return self.fail(el, format!("failed to create window: {e}")),
        };

        let backend = match make_backend(window.clone()) {
            Ok(b) => b,
            Err(e) => return self.fail(el, format!("failed to create render backend: {e:#}")),
        };

        let size = window.inner_size();
        let viewport = Size::new(size.width as f32, size.height as f32);
        log::info!("window ready at {}x{}", size.width, size.height);

        self.host = Some(Host::new(engine, app, backend, viewport));
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, el: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(host) = self.host.as_mut() else {
            return;
        };

        let host_event = match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                el.exit();
                return;
            }
            WindowEvent::RedrawRequested => {
                host.redraw();
                self.sync_cursor();
                return;
            }
            WindowEvent::Resized(size) => {
                HostEvent::Resized(Size::new(size.width as f32, size.height as f32))
            }
            WindowEvent::CursorMoved { position, .. } => {
                HostEvent::PointerMoved(vec2(position.x as f32, position.y as f32))
            }
            // winit carries no button state on enter. A release we did see
            // already cleared the press, so a held press here was let go
            // outside the window.
            WindowEvent::CursorEntered { .. } => HostEvent::PointerEntered {
                buttons_down: false,
            },
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = pointer_button(button) else {
                    return;
                };
                match state {
                    ElementState::Pressed => HostEvent::PointerDown(button),
                    ElementState::Released => HostEvent::PointerUp(button),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => vec2(x * LINE_SCROLL_PX, y * LINE_SCROLL_PX),
                    MouseScrollDelta::PixelDelta(p) => vec2(p.x as f32, p.y as f32),
                };
                log::trace!("wheel {delta:?}");
                HostEvent::Wheel(delta)
            }
            _ => return,
        };

        host.handle(host_event);
        self.sync_cursor();
    }
}
