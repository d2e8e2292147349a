//! Host loop and platform runners (desktop via winit).
//!
//! A [`Host`] owns the engine, the application's declaration and a render
//! backend. Each [`HostEvent`] updates the engine's input, then frames are run
//! until the engine stops asking for another one (bounded by
//! `EngineConfig::max_reruns`) and the last frame is presented.

use redraw_core::*;

#[cfg(feature = "desktop")]
mod desktop;
#[cfg(feature = "desktop")]
pub use desktop::{WindowOptions, run_desktop_app};

/// The application's per-frame declaration.
pub trait App {
    fn frame(&mut self, ui: &mut Ui<'_>, size: Size);
}

impl<F> App for F
where
    F: FnMut(&mut Ui<'_>, Size),
{
    fn frame(&mut self, ui: &mut Ui<'_>, size: Size) {
        self(ui, size)
    }
}

/// Input as delivered by the windowing layer, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Resized(Size),
    PointerMoved(Vec2),
    PointerDown(PointerButton),
    PointerUp(PointerButton),
    /// Wheel delta; positive `y` scrolls towards the start of the content.
    Wheel(Vec2),
    /// Pointer re-entered the viewport. `buttons_down` is what the platform
    /// reports for the primary button at that moment.
    PointerEntered { buttons_down: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorHint {
    #[default]
    Default,
    /// Something interactive is under the pointer.
    Pointer,
}

pub struct Host<A, B> {
    engine: Engine,
    app: A,
    backend: B,
    viewport: Size,
    cursor: CursorHint,
    last_frame: Option<Frame>,
    frames_run: u64,
}

impl<A: App, B: RenderBackend> Host<A, B> {
    pub fn new(engine: Engine, app: A, mut backend: B, viewport: Size) -> Self {
        backend.configure_surface(viewport.width as u32, viewport.height as u32);
        Self {
            engine,
            app,
            backend,
            viewport,
            cursor: CursorHint::Default,
            last_frame: None,
            frames_run: 0,
        }
    }

    /// Apply one input event and redraw.
    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Resized(size) => {
                self.viewport = size;
                self.backend
                    .configure_surface(size.width as u32, size.height as u32);
            }
            HostEvent::PointerMoved(pos) => self.engine.set_pointer(pos),
            HostEvent::PointerDown(button) => {
                if !self.engine.input_mut().set_button(button, true) {
                    return;
                }
            }
            HostEvent::PointerUp(button) => {
                if !self.engine.input_mut().set_button(button, false) {
                    return;
                }
            }
            HostEvent::Wheel(delta) => self.engine.add_wheel(delta),
            HostEvent::PointerEntered { buttons_down } => {
                if !(self.engine.input().pointer_down && !buttons_down) {
                    return;
                }
                // Released outside the viewport; we never saw the up event.
                log::debug!("pointer re-entered with button released");
                self.engine.set_pointer_down(false);
            }
        }
        self.run_frames();
    }

    /// Redraw without new input, e.g. when the window system asks for it.
    pub fn redraw(&mut self) {
        self.run_frames();
    }

    /// Run frames until one no longer asks for a re-run, or the cap is hit,
    /// then present the last one. Returns the number of frames run.
    pub fn run_frames(&mut self) -> u32 {
        let max_reruns = self.engine.config().max_reruns;
        let viewport = self.viewport;
        let app = &mut self.app;

        let mut runs = 0;
        let frame = loop {
            let frame = self.engine.run_frame(viewport, |ui, size| app.frame(ui, size));
            runs += 1;
            if !frame.wants_another_frame {
                break frame;
            }
            if runs > max_reruns {
                log::warn!(
                    "frame {} still wants another frame after {max_reruns} re-runs; presenting",
                    frame.index
                );
                break frame;
            }
            log::debug!("frame {} asked for another frame", frame.index);
        };
        self.frames_run += u64::from(runs);

        self.backend.present(&frame);
        self.cursor = if frame.is_hovering() {
            CursorHint::Pointer
        } else {
            CursorHint::Default
        };
        self.last_frame = Some(frame);
        runs
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    /// Last presented frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        surfaces: Vec<(u32, u32)>,
        presented: Vec<usize>,
    }

    impl RenderBackend for Recorder {
        fn configure_surface(&mut self, width: u32, height: u32) {
            self.surfaces.push((width, height));
        }

        fn present(&mut self, frame: &Frame) {
            self.presented.push(frame.commands.len());
        }
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const SCREEN: Size = Size::new(400.0, 300.0);

    fn button_app(clicks: Rc<Cell<u32>>) -> impl FnMut(&mut Ui<'_>, Size) {
        move |ui, _| {
            let state = ui.button_behavior("ok", vec2(10.0, 10.0), vec2(110.0, 40.0));
            if state.clicked {
                clicks.set(clicks.get() + 1);
            }
            ui.push_command(DrawCommand::FillRect {
                rect: Rect::from_xywh(10.0, 10.0, 100.0, 30.0),
                color: Color::gray(221),
            });
        }
    }

    #[test]
    fn new_host_configures_surface() {
        init_logger();
        let host = Host::new(Engine::default(), |_: &mut Ui<'_>, _: Size| {}, Recorder::default(), SCREEN);
        assert_eq!(host.backend().surfaces, vec![(400, 300)]);
        assert!(host.last_frame().is_none());
    }

    #[test]
    fn click_runs_an_extra_frame_then_presents_once() {
        init_logger();
        let clicks = Rc::new(Cell::new(0));
        let mut host = Host::new(Engine::default(), button_app(clicks.clone()), Recorder::default(), SCREEN);

        host.handle(HostEvent::PointerMoved(vec2(50.0, 20.0)));
        host.handle(HostEvent::PointerDown(PointerButton::Primary));
        assert_eq!(host.frames_run(), 2);

        host.handle(HostEvent::PointerUp(PointerButton::Primary));
        assert_eq!(clicks.get(), 1);
        // The click frame asks for a re-run so handlers' changes show up.
        assert_eq!(host.frames_run(), 4);
        assert_eq!(host.backend().presented.len(), 3);
    }

    #[test]
    fn secondary_button_is_ignored() {
        init_logger();
        let clicks = Rc::new(Cell::new(0));
        let mut host = Host::new(Engine::default(), button_app(clicks.clone()), Recorder::default(), SCREEN);
        host.handle(HostEvent::PointerMoved(vec2(50.0, 20.0)));
        host.handle(HostEvent::PointerDown(PointerButton::Secondary));
        host.handle(HostEvent::PointerUp(PointerButton::Secondary));
        assert_eq!(clicks.get(), 0);
        assert_eq!(host.frames_run(), 1);
        assert!(host.engine().pressed().is_none());
    }

    #[test]
    fn reruns_are_capped() {
        init_logger();
        let mut config = EngineConfig::default();
        config.max_reruns = 3;
        let mut host = Host::new(
            Engine::new(config),
            |ui: &mut Ui<'_>, _: Size| ui.request_another_frame(),
            Recorder::default(),
            SCREEN,
        );
        assert_eq!(host.run_frames(), 4);
        assert_eq!(host.backend().presented.len(), 1);
        assert!(host.last_frame().is_some_and(|f| f.wants_another_frame));
    }

    #[test]
    fn entering_with_button_up_releases_press() {
        init_logger();
        let clicks = Rc::new(Cell::new(0));
        let mut host = Host::new(Engine::default(), button_app(clicks.clone()), Recorder::default(), SCREEN);

        host.handle(HostEvent::PointerMoved(vec2(50.0, 20.0)));
        host.handle(HostEvent::PointerDown(PointerButton::Primary));
        assert_eq!(host.engine().pressed().map(|id| id.as_str()), Some("ok"));

        // Dragged out, released outside, came back.
        host.handle(HostEvent::PointerMoved(vec2(-5.0, 20.0)));
        let before = host.frames_run();
        host.handle(HostEvent::PointerEntered { buttons_down: false });
        assert!(!host.engine().input().pointer_down);
        assert!(host.engine().pressed().is_none());
        assert_eq!(clicks.get(), 0);
        assert!(host.frames_run() > before);
    }

    #[test]
    fn entering_while_still_held_changes_nothing() {
        init_logger();
        let mut host = Host::new(
            Engine::default(),
            |_: &mut Ui<'_>, _: Size| {},
            Recorder::default(),
            SCREEN,
        );
        host.handle(HostEvent::PointerDown(PointerButton::Primary));
        let before = host.frames_run();
        host.handle(HostEvent::PointerEntered { buttons_down: true });
        assert!(host.engine().input().pointer_down);
        assert_eq!(host.frames_run(), before);
    }

    #[test]
    fn cursor_follows_hover() {
        init_logger();
        let clicks = Rc::new(Cell::new(0));
        let mut host = Host::new(Engine::default(), button_app(clicks), Recorder::default(), SCREEN);
        host.handle(HostEvent::PointerMoved(vec2(50.0, 20.0)));
        assert_eq!(host.cursor(), CursorHint::Pointer);
        host.handle(HostEvent::PointerMoved(vec2(300.0, 200.0)));
        assert_eq!(host.cursor(), CursorHint::Default);
    }

    #[test]
    fn resize_reconfigures_and_moves_root() {
        init_logger();
        let mut host = Host::new(
            Engine::default(),
            |_: &mut Ui<'_>, _: Size| {},
            Recorder::default(),
            SCREEN,
        );
        host.handle(HostEvent::Resized(Size::new(800.0, 600.0)));
        assert_eq!(host.backend().surfaces, vec![(400, 300), (800, 600)]);
        let frame = host.last_frame().unwrap();
        assert_eq!(frame.viewport, Size::new(800.0, 600.0));
        assert_eq!(frame.ranges[0].clip, Rect::from_xywh(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn thumb_drag_move_settles_in_two_frames() {
        init_logger();
        let mut host = Host::new(
            Engine::default(),
            |ui: &mut Ui<'_>, _: Size| {
                ui.push_container("list", vec2(0.0, 0.0), vec2(300.0, 200.0));
                ui.scrollbar(1000.0);
                ui.pop_container();
            },
            Recorder::default(),
            SCREEN,
        );
        host.handle(HostEvent::PointerMoved(vec2(292.0, 10.0)));
        host.handle(HostEvent::PointerDown(PointerButton::Primary));

        let before = host.frames_run();
        host.handle(HostEvent::PointerMoved(vec2(292.0, 50.0)));
        assert_eq!(host.frames_run() - before, 2);
        assert!(host.last_frame().is_some_and(|f| !f.wants_another_frame));
        let scroll = host.engine().container("list").map(|c| c.scroll_position.y);
        assert_eq!(scroll, Some(250.0));
    }

    #[test]
    fn wheel_scrolls_and_settles() {
        init_logger();
        let mut host = Host::new(
            Engine::default(),
            |ui: &mut Ui<'_>, _: Size| {
                ui.push_container("list", vec2(0.0, 0.0), vec2(200.0, 100.0));
                ui.scrollbar(500.0);
                ui.pop_container();
            },
            Recorder::default(),
            SCREEN,
        );
        host.handle(HostEvent::PointerMoved(vec2(50.0, 50.0)));
        let before = host.frames_run();
        host.handle(HostEvent::Wheel(vec2(0.0, -120.0)));
        assert_eq!(host.frames_run() - before, 2);
        let scroll = host.engine().container("list").map(|c| c.scroll_position.y);
        assert_eq!(scroll, Some(120.0));
    }
}
