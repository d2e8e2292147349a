use smallvec::SmallVec;

use crate::command_list::CommandList;
use crate::container::{Container, ContainerKey, ContainerStore};
use crate::frame::Frame;
use crate::interaction::Ownership;
use crate::{DrawCommand, EngineConfig, InputState, ItemId, Rect, Size, TextMeasure, TextParams, Vec2};

/// Declaration handle for one frame.
///
/// Borrowed from the [`Engine`](crate::Engine) for the duration of a single
/// `run_frame` call. Everything the declaration does (pushing containers,
/// querying interaction, emitting commands) goes through it.
pub struct Ui<'a> {
    pub(crate) config: &'a EngineConfig,
    pub(crate) input: &'a InputState,
    pub(crate) owner: &'a mut Ownership,
    pub(crate) containers: &'a mut ContainerStore,
    measure: &'a dyn TextMeasure,
    root: ContainerKey,
    stack: SmallVec<[ContainerKey; 8]>,
    commands: CommandList,
    frame: u64,
    viewport: Size,
    /// Wheel delta still available to scroll regions this frame.
    pub(crate) wheel: Vec2,
    /// A press that started this frame may still be claimed by a hovered item.
    pub(crate) press_claimable: bool,
    wants_another_frame: bool,
}

impl<'a> Ui<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn begin(
        config: &'a EngineConfig,
        input: &'a InputState,
        owner: &'a mut Ownership,
        containers: &'a mut ContainerStore,
        measure: &'a dyn TextMeasure,
        root: ContainerKey,
        frame: u64,
        viewport: Size,
        capacity: (usize, usize),
    ) -> Self {
        owner.hovered = None;
        let press_claimable = owner.press_is_released();

        containers[root].rect = Rect::from_corners(Vec2::ZERO, viewport.into());
        containers.touch(root, frame);

        let mut ui = Ui {
            config,
            input,
            owner,
            containers,
            measure,
            root,
            stack: SmallVec::new(),
            commands: CommandList::with_capacity(capacity.0, capacity.1),
            frame,
            viewport,
            wheel: input.wheel,
            press_claimable,
            wants_another_frame: false,
        };
        ui.stack.push(root);
        ui.open_range_for_current();
        ui
    }

    pub(crate) fn finish(mut self) -> Frame {
        if self.stack.len() > 1 {
            log::warn!(
                "{} container(s) still pushed at end of frame; popping",
                self.stack.len() - 1
            );
        }
        self.stack.clear();
        self.commands.close_range();

        self.owner.resolve_press(self.input.pointer_down);

        let (commands, ranges) = self.commands.finish();
        Frame {
            commands,
            ranges,
            wants_another_frame: self.wants_another_frame,
            hovered: self.owner.hovered.clone(),
            viewport: self.viewport,
            index: self.frame,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn pointer(&self) -> Vec2 {
        self.input.pointer
    }

    pub fn pointer_down(&self) -> bool {
        self.input.pointer_down
    }

    /// Wheel delta not yet consumed by a scroll region this frame.
    pub fn wheel(&self) -> Vec2 {
        self.wheel
    }

    pub(crate) fn current_key(&self) -> ContainerKey {
        self.stack.last().copied().unwrap_or(self.root)
    }

    pub fn current_container(&self) -> &Container {
        &self.containers[self.current_key()]
    }

    pub(crate) fn current_container_mut(&mut self) -> &mut Container {
        let key = self.current_key();
        &mut self.containers[key]
    }

    /// Screen position that relative coordinates in the current container are
    /// measured from. Scrolling moves this, not the declared coordinates.
    pub fn element_origin(&self) -> Vec2 {
        self.current_container().origin()
    }

    /// Push a clip/scroll region. Corners are relative to the current
    /// container's content origin.
    pub fn push_container(&mut self, id: impl Into<ItemId>, top_left: Vec2, bot_right: Vec2) {
        let id = id.into();
        let origin = self.element_origin();
        let rect = Rect::from_corners(origin + top_left, origin + bot_right);
        let key = self.containers.upsert(&id, rect, self.frame);
        self.stack.push(key);
        self.open_range_for_current();
    }

    pub fn pop_container(&mut self) {
        if self.stack.len() <= 1 {
            log::error!("pop_container called with no pushed container");
            debug_assert!(false, "unbalanced pop_container");
            return;
        }
        self.stack.pop();
        self.open_range_for_current();
    }

    /// Number of containers pushed by the declaration (the root excluded).
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    fn open_range_for_current(&mut self) {
        let clip = self.current_container().rect;
        self.commands.open_range(clip);
    }

    pub fn push_command(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    /// Commands pushed so far this frame.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn text_width(&self, text: &str, params: &TextParams) -> f32 {
        self.measure.text_width(text, params)
    }

    pub fn hovered(&self) -> Option<&ItemId> {
        self.owner.hovered.as_ref()
    }

    pub fn pressed(&self) -> Option<&ItemId> {
        self.owner.held()
    }

    /// Ask the host to run another frame before presenting this one.
    pub fn request_another_frame(&mut self) {
        self.wants_another_frame = true;
    }

    pub fn wants_another_frame(&self) -> bool {
        self.wants_another_frame
    }
}
