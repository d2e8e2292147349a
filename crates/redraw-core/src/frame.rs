use crate::{CommandRange, DrawCommand, ItemId, Size};

/// Output of one frame: the command buffer, its clip ranges, and whether the
/// host should run another frame before presenting.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub ranges: Vec<CommandRange>,
    pub wants_another_frame: bool,
    pub hovered: Option<ItemId>,
    pub viewport: Size,
    pub index: u64,
}

impl Frame {
    /// Ranges in draw order, each with its slice of commands.
    pub fn lists(&self) -> impl Iterator<Item = (&CommandRange, &[DrawCommand])> + '_ {
        self.ranges
            .iter()
            .map(|r| (r, self.commands.get(r.span()).unwrap_or(&[])))
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }
}
