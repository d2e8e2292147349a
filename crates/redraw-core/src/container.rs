use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use slotmap::{SlotMap, new_key_type};

use crate::{ItemId, Rect, Vec2};

new_key_type! {
    pub struct ContainerKey;
}

/// Retained state of a clip/scroll region.
///
/// `rect` is rewritten from the declaration every frame; the scroll fields
/// survive between frames.
#[derive(Clone, Debug)]
pub struct Container {
    pub id: ItemId,
    pub rect: Rect,
    pub scroll_position: Vec2,
    /// Pointer-to-thumb offset captured when a scrollbar drag starts.
    pub scroll_drag_offset: Vec2,
    last_seen: u64,
}

impl Container {
    pub fn new(id: ItemId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            scroll_position: Vec2::ZERO,
            scroll_drag_offset: Vec2::ZERO,
            last_seen: 0,
        }
    }

    /// Screen position of content-space (0, 0).
    pub fn origin(&self) -> Vec2 {
        self.rect.top_left - self.scroll_position
    }

    pub fn last_seen(&self) -> u64 {
        self.last_seen
    }
}

/// Identity-keyed container records.
#[derive(Default)]
pub struct ContainerStore {
    slots: SlotMap<ContainerKey, Container>,
    by_id: HashMap<ItemId, ContainerKey>,
}

impl ContainerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record that is not reachable by identity (the root).
    pub(crate) fn insert_anonymous(&mut self, container: Container) -> ContainerKey {
        self.slots.insert(container)
    }

    /// Find the record for `id` and overwrite its bounds, or create it with
    /// zero scroll state.
    pub fn upsert(&mut self, id: &ItemId, rect: Rect, frame: u64) -> ContainerKey {
        if let Some(&key) = self.by_id.get(id) {
            if let Some(c) = self.slots.get_mut(key) {
                c.rect = rect;
                c.last_seen = frame;
                return key;
            }
        }

        log::debug!("container '{}' created at {:?}", id, rect);
        let mut container = Container::new(id.clone(), rect);
        container.last_seen = frame;
        let key = self.slots.insert(container);
        self.by_id.insert(id.clone(), key);
        key
    }

    pub fn get(&self, key: ContainerKey) -> Option<&Container> {
        self.slots.get(key)
    }

    pub fn get_mut(&mut self, key: ContainerKey) -> Option<&mut Container> {
        self.slots.get_mut(key)
    }

    pub(crate) fn touch(&mut self, key: ContainerKey, frame: u64) {
        if let Some(c) = self.slots.get_mut(key) {
            c.last_seen = frame;
        }
    }

    pub fn lookup(&self, id: impl Into<ItemId>) -> Option<&Container> {
        let id = id.into();
        self.by_id.get(&id).and_then(|k| self.slots.get(*k))
    }

    pub fn lookup_mut(&mut self, id: impl Into<ItemId>) -> Option<&mut Container> {
        let id = id.into();
        match self.by_id.get(&id) {
            Some(k) => self.slots.get_mut(*k),
            None => None,
        }
    }

    /// Number of identity-keyed records.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Drop records not declared during the last `max_idle` frames.
    /// Returns how many were evicted.
    pub fn sweep(&mut self, frame: u64, max_idle: u64) -> usize {
        let stale: Vec<(ItemId, ContainerKey)> = self
            .by_id
            .iter()
            .filter(|(_, k)| {
                self.slots
                    .get(**k)
                    .is_some_and(|c| frame.saturating_sub(c.last_seen) > max_idle)
            })
            .map(|(id, k)| (id.clone(), *k))
            .collect();

        for (id, key) in &stale {
            log::debug!("container '{}' evicted", id);
            self.by_id.remove(id);
            self.slots.remove(*key);
        }
        stale.len()
    }
}

impl Index<ContainerKey> for ContainerStore {
    type Output = Container;

    fn index(&self, key: ContainerKey) -> &Container {
        &self.slots[key]
    }
}

impl IndexMut<ContainerKey> for ContainerStore {
    fn index_mut(&mut self, key: ContainerKey) -> &mut Container {
        &mut self.slots[key]
    }
}
