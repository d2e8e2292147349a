//! Flat command buffer partitioned into clip ranges.
//!
//! Every container owns one or more *ranges*: a clip rectangle plus a
//! contiguous span of the shared buffer. Pushing a container opens a range
//! clipped to it; popping opens a fresh range clipped to the parent, so a
//! parent's drawing after a child lands in its own span. Drawing the ranges in
//! order, each clipped to its rect, reproduces nesting without per-container
//! buffers.

use std::ops::Range;

use crate::{DrawCommand, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommandRange {
    pub clip: Rect,
    pub start: usize,
    pub end: usize,
}

impl CommandRange {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Per-frame builder for commands and their clip ranges.
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
    ranges: Vec<CommandRange>,
    open: bool,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(commands: usize, ranges: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
            ranges: Vec::with_capacity(ranges),
            open: false,
        }
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        debug_assert!(self.open, "command pushed with no open range");
        self.commands.push(cmd);
    }

    /// Close the open range (if any) and start a new one at the current end of
    /// the buffer.
    pub fn open_range(&mut self, clip: Rect) {
        self.close_range();
        let start = self.commands.len();
        self.ranges.push(CommandRange {
            clip,
            start,
            end: start,
        });
        self.open = true;
    }

    pub fn close_range(&mut self) {
        if self.open {
            if let Some(last) = self.ranges.last_mut() {
                last.end = self.commands.len();
            }
            self.open = false;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn ranges(&self) -> &[CommandRange] {
        &self.ranges
    }

    pub fn finish(mut self) -> (Vec<DrawCommand>, Vec<CommandRange>) {
        self.close_range();
        (self.commands, self.ranges)
    }
}
