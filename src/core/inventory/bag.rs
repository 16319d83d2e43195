//=========================================================================
// Inventory Bag
//=========================================================================
//
// Per-scene slot layout. A bag is an ordered list of slots, each anchored
// at a named point in its scene and holding at most one item.
//
// Item bookkeeping (assigned / removed / times present) lives on the
// items themselves, which the owning `Inventory` passes in when a bag is
// rebuilt.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Identifiers =========================================================

/// Scene that owns a bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub u32);

/// Game object shown as an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Named screen position a slot is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedPointId(pub u32);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene {:#010x}", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object {:#010x}", self.0)
    }
}

//=== InventoryItem =======================================================

/// A registered item and its global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub object_id: ObjectId,
    /// Animation sequence shown while the item sits in a slot.
    pub sequence_id: u32,
    /// The player owns the item.
    pub assigned: bool,
    /// The item was used up and never comes back.
    pub removed: bool,
    /// Slots holding the item, counted during a rebuild.
    pub times_present: u32,
}

impl InventoryItem {
    pub fn new(object_id: ObjectId, sequence_id: u32) -> Self {
        Self { object_id, sequence_id, assigned: false, removed: false, times_present: 0 }
    }

    fn is_carried(&self) -> bool {
        self.assigned && !self.removed
    }
}

//=== InventorySlot =======================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySlot {
    pub named_point: NamedPointId,
    pub item: Option<ObjectId>,
}

impl InventorySlot {
    pub fn new(named_point: NamedPointId) -> Self {
        Self { named_point, item: None }
    }
}

//=== InventoryBag ========================================================

#[derive(Debug, Clone)]
pub struct InventoryBag {
    scene_id: SceneId,
    slots: Vec<InventorySlot>,
    active: bool,
}

impl InventoryBag {
    pub fn new(scene_id: SceneId) -> Self {
        Self { scene_id, slots: Vec::new(), active: false }
    }

    pub fn scene_id(&self) -> SceneId {
        self.scene_id
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn register_slot(&mut self, named_point: NamedPointId) {
        self.slots.push(InventorySlot::new(named_point));
    }

    /// Puts `item` into slot `slot`, or into the first free slot when
    /// `slot` is `None`. An explicit slot is overwritten. Returns `false`
    /// when no slot was available.
    pub fn add_item(&mut self, item: ObjectId, slot: Option<usize>) -> bool {
        let index = match slot {
            Some(index) => Some(index),
            None => self.free_slot(),
        };
        match index.and_then(|i| self.slots.get_mut(i)) {
            Some(target) => {
                target.item = Some(item);
                true
            }
            None => false,
        }
    }

    /// Empties every slot holding `item`.
    pub fn remove_item(&mut self, item: ObjectId) {
        for slot in self.slots.iter_mut().filter(|s| s.item == Some(item)) {
            slot.item = None;
        }
    }

    pub fn find_slot_by_item(&self, item: ObjectId) -> Option<usize> {
        self.slots.iter().position(|s| s.item == Some(item))
    }

    pub fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.item.is_none())
    }

    /// Counts each slotted item and empties slots whose item is no
    /// longer carried, unknown, or already seen in an earlier slot.
    pub(crate) fn build_items(&mut self, items: &mut [InventoryItem]) {
        for slot in &mut self.slots {
            let Some(id) = slot.item else { continue };
            let keep = match items.iter_mut().find(|it| it.object_id == id) {
                Some(item) => {
                    item.times_present += 1;
                    item.is_carried() && item.times_present == 1
                }
                None => false,
            };
            if !keep {
                slot.item = None;
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
