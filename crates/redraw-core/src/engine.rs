use crate::container::{Container, ContainerKey, ContainerStore};
use crate::interaction::Ownership;
use crate::{
    EngineConfig, Frame, InputState, ItemId, MonospaceMeasure, PointerButton, Rect, Size,
    TextMeasure, Ui, Vec2,
};

/// Owns everything that survives between frames: input, hover/press
/// ownership, and the retained container store.
pub struct Engine {
    config: EngineConfig,
    input: InputState,
    owner: Ownership,
    containers: ContainerStore,
    root: ContainerKey,
    measure: Box<dyn TextMeasure>,
    frame_index: u64,
    last_len: (usize, usize),
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let mut containers = ContainerStore::new();
        let root = containers.insert_anonymous(Container::new(ItemId::new(""), Rect::default()));
        Self {
            config,
            input: InputState::default(),
            owner: Ownership::default(),
            containers,
            root,
            measure: Box::new(MonospaceMeasure::default()),
            frame_index: 0,
            last_len: (0, 0),
        }
    }

    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    pub fn set_text_measure(&mut self, measure: Box<dyn TextMeasure>) {
        self.measure = measure;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.input.move_pointer(pos);
    }

    pub fn set_pointer_down(&mut self, down: bool) {
        self.input.set_button(PointerButton::Primary, down);
    }

    pub fn add_wheel(&mut self, delta: Vec2) {
        self.input.add_wheel(delta);
    }

    pub fn container(&self, id: impl Into<ItemId>) -> Option<&Container> {
        self.containers.lookup(id)
    }

    pub fn container_mut(&mut self, id: impl Into<ItemId>) -> Option<&mut Container> {
        self.containers.lookup_mut(id)
    }

    pub fn containers(&self) -> &ContainerStore {
        &self.containers
    }

    pub fn hovered(&self) -> Option<&ItemId> {
        self.owner.hovered.as_ref()
    }

    pub fn pressed(&self) -> Option<&ItemId> {
        self.owner.held()
    }

    /// Frames run so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Run one frame: reset per-frame state, push the root container sized to
    /// `viewport`, run `declare` once, then pop the root and settle press
    /// ownership. The wheel delta is spent whether or not anything used it.
    pub fn run_frame<F>(&mut self, viewport: Size, declare: F) -> Frame
    where
        F: FnOnce(&mut Ui<'_>, Size),
    {
        self.frame_index += 1;
        let frame_index = self.frame_index;

        let mut ui = Ui::begin(
            &self.config,
            &self.input,
            &mut self.owner,
            &mut self.containers,
            self.measure.as_ref(),
            self.root,
            frame_index,
            viewport,
            self.last_len,
        );
        declare(&mut ui, viewport);
        let frame = ui.finish();

        self.input.wheel = Vec2::ZERO;
        self.last_len = (frame.commands.len(), frame.ranges.len());

        if let Some(max_idle) = self.config.retention.evict_after_frames {
            let evicted = self.containers.sweep(frame_index, max_idle);
            if evicted > 0 {
                log::debug!("frame {frame_index}: evicted {evicted} idle container(s)");
            }
        }

        log::trace!(
            "frame {}: {} commands in {} ranges, hovered={:?}, again={}",
            frame_index,
            frame.commands.len(),
            frame.ranges.len(),
            frame.hovered,
            frame.wants_another_frame
        );
        frame
    }
}
