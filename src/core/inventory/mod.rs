//=========================================================================
// Inventory
//=========================================================================
//
// Item ownership and per-scene bags for the point-and-click inventory.
//
// Responsibilities:
// - Register bags, their slots and the item catalogue at startup
// - Track which items the player carries or has used up
// - Place carried items into bags and rebuild a bag when it opens
// - Report the visible slot layout of the open bag
//
// Lifecycle:
// ```text
//   register_bag(scene) ─► register_slot(point)*   (slots go to the last bag)
//   register_item(object, sequence)*
//
//   add_item / remove_item ──► refresh() if a bag is open
//   open(scene) ─► build_items(bag) ─► refresh()
//   close()
// ```
//
//=========================================================================

pub mod bag;

pub use bag::{InventoryBag, InventoryItem, InventorySlot, NamedPointId, ObjectId, SceneId};

//=== External Crates =====================================================

use log::{debug, info, trace};
use thiserror::Error;

//=== InventoryError ======================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no inventory bag for {0}")]
    UnknownBag(SceneId),

    #[error("{0} is not a registered inventory item")]
    UnknownItem(ObjectId),

    #[error("inventory bag for {0} registered twice")]
    DuplicateBag(SceneId),

    #[error("{0} registered twice as an inventory item")]
    DuplicateItem(ObjectId),

    #[error("slot {0:#010x} registered before any bag")]
    NoBagRegistered(u32),
}

//=== SlotView ============================================================

/// One slot of the open bag as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView {
    pub named_point: NamedPointId,
    /// Item and its animation sequence, if the slot is filled.
    pub item: Option<(ObjectId, u32)>,
}

//=== Inventory ===========================================================

#[derive(Debug, Default)]
pub struct Inventory {
    bags: Vec<InventoryBag>,
    items: Vec<InventoryItem>,
    registering: Option<SceneId>,
    open: Option<SceneId>,
    held: Option<ObjectId>,
    layout: Vec<SlotView>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    //=====================================================================
    // Registration
    //=====================================================================

    /// Creates the bag for `scene_id`. Slots registered afterwards are
    /// added to it.
    pub fn register_bag(&mut self, scene_id: SceneId) -> Result<(), InventoryError> {
        if self.bag(scene_id).is_some() {
            return Err(InventoryError::DuplicateBag(scene_id));
        }
        debug!(target: "inventory", "Registered bag for {}", scene_id);
        self.bags.push(InventoryBag::new(scene_id));
        self.registering = Some(scene_id);
        Ok(())
    }

    pub fn register_item(&mut self, object_id: ObjectId, sequence_id: u32) -> Result<(), InventoryError> {
        if self.item(object_id).is_some() {
            return Err(InventoryError::DuplicateItem(object_id));
        }
        self.items.push(InventoryItem::new(object_id, sequence_id));
        Ok(())
    }

    pub fn register_slot(&mut self, named_point: NamedPointId) -> Result<(), InventoryError> {
        let scene_id = self.registering.ok_or(InventoryError::NoBagRegistered(named_point.0))?;
        self.bag_mut(scene_id)?.register_slot(named_point);
        Ok(())
    }

    //=====================================================================
    // Ownership
    //=====================================================================

    /// Gives the player `object_id`.
    ///
    /// A newly assigned item goes into the first free slot of every bag.
    /// If any bag has no room the item stays unassigned.
    pub fn add_item(&mut self, object_id: ObjectId) -> Result<(), InventoryError> {
        let index = self.item_index(object_id)?;
        let item = &mut self.items[index];
        let was_assigned = std::mem::replace(&mut item.assigned, true);

        if !was_assigned && !item.removed {
            let mut placed_everywhere = true;
            for bag in &mut self.bags {
                if !bag.add_item(object_id, None) {
                    debug!(target: "inventory", "No free slot for {} in {}", object_id, bag.scene_id());
                    placed_everywhere = false;
                }
            }
            self.items[index].assigned = placed_everywhere;
        }

        info!(target: "inventory", "Added {}", object_id);
        if self.open.is_some() {
            self.refresh();
        }
        Ok(())
    }

    /// Marks `object_id` as used up and takes it out of the open bag.
    pub fn remove_item(&mut self, object_id: ObjectId) -> Result<(), InventoryError> {
        let index = self.item_index(object_id)?;
        let item = &mut self.items[index];
        let was_removed = std::mem::replace(&mut item.removed, true);

        if !was_removed && item.assigned {
            if let Some(scene_id) = self.open {
                self.bag_mut(scene_id)?.remove_item(object_id);
            }
            info!(target: "inventory", "Removed {}", object_id);
            self.refresh();
        }
        Ok(())
    }

    /// Item currently held by the pointer. A held item is kept out of
    /// the bag when it is rebuilt.
    pub fn set_held_item(&mut self, object_id: Option<ObjectId>) {
        self.held = object_id;
    }

    //=====================================================================
    // Open / Close
    //=====================================================================

    /// Activates the bag for `scene_id`, rebuilds it and returns its
    /// layout.
    pub fn open(&mut self, scene_id: SceneId) -> Result<Vec<SlotView>, InventoryError> {
        if let Some(previous) = self.open.take() {
            if let Some(bag) = self.bags.iter_mut().find(|b| b.scene_id() == previous) {
                bag.set_active(false);
            }
        }

        self.bag_mut(scene_id)?.set_active(true);
        self.open = Some(scene_id);
        self.build_items(scene_id)?;

        debug!(target: "inventory", "Opened bag for {}", scene_id);
        Ok(self.refresh().to_vec())
    }

    pub fn close(&mut self) {
        if let Some(scene_id) = self.open.take() {
            if let Some(bag) = self.bags.iter_mut().find(|b| b.scene_id() == scene_id) {
                bag.set_active(false);
            }
            debug!(target: "inventory", "Closed bag for {}", scene_id);
        }
        self.layout.clear();
    }

    pub fn open_scene(&self) -> Option<SceneId> {
        self.open
    }

    /// Recomputes the layout of the open bag. Empty if no bag is open.
    pub fn refresh(&mut self) -> &[SlotView] {
        self.layout = self.compute_layout();
        trace!(target: "inventory", "Refresh: {} slots", self.layout.len());
        &self.layout
    }

    /// Layout as of the last refresh.
    pub fn layout(&self) -> &[SlotView] {
        &self.layout
    }

    fn compute_layout(&self) -> Vec<SlotView> {
        let Some(bag) = self.open.and_then(|id| self.bag(id)) else {
            return Vec::new();
        };

        bag.slots()
            .iter()
            .map(|slot| SlotView {
                named_point: slot.named_point,
                item: slot
                    .item
                    .and_then(|id| self.item(id))
                    .map(|item| (item.object_id, item.sequence_id)),
            })
            .collect()
    }

    /// Rebuilds the bag for `scene_id`: drops stale slot contents, then
    /// adds every carried item not already present.
    pub fn build_items(&mut self, scene_id: SceneId) -> Result<(), InventoryError> {
        let index = self
            .bags
            .iter()
            .position(|b| b.scene_id() == scene_id)
            .ok_or(InventoryError::UnknownBag(scene_id))?;
        let bag = &mut self.bags[index];

        for item in &mut self.items {
            item.times_present = 0;
        }
        bag.build_items(&mut self.items);

        for item in &self.items {
            if item.assigned && !item.removed && item.times_present == 0 && Some(item.object_id) != self.held {
                bag.add_item(item.object_id, None);
            }
        }
        Ok(())
    }

    //=====================================================================
    // Lookup
    //=====================================================================

    pub fn bag(&self, scene_id: SceneId) -> Option<&InventoryBag> {
        self.bags.iter().find(|b| b.scene_id() == scene_id)
    }

    pub fn item(&self, object_id: ObjectId) -> Option<&InventoryItem> {
        self.items.iter().find(|it| it.object_id == object_id)
    }

    fn bag_mut(&mut self, scene_id: SceneId) -> Result<&mut InventoryBag, InventoryError> {
        self.bags
            .iter_mut()
            .find(|b| b.scene_id() == scene_id)
            .ok_or(InventoryError::UnknownBag(scene_id))
    }

    fn item_index(&self, object_id: ObjectId) -> Result<usize, InventoryError> {
        self.items
            .iter()
            .position(|it| it.object_id == object_id)
            .ok_or(InventoryError::UnknownItem(object_id))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: SceneId = SceneId(0x10001);
    const CAVE: SceneId = SceneId(0x10002);

    //--- Test Helpers -----------------------------------------------------

    fn inventory(field_slots: u32, cave_slots: u32) -> Inventory {
        let mut inv = Inventory::new();
        inv.register_bag(FIELD).unwrap();
        for i in 0..field_slots {
            inv.register_slot(NamedPointId(0x70000 + i)).unwrap();
        }
        inv.register_bag(CAVE).unwrap();
        for i in 0..cave_slots {
            inv.register_slot(NamedPointId(0x70100 + i)).unwrap();
        }
        for id in 1..=4 {
            inv.register_item(ObjectId(id), 0x60000 + id).unwrap();
        }
        inv
    }

    fn held_items(view: &[SlotView]) -> Vec<Option<u32>> {
        view.iter().map(|s| s.item.map(|(id, _)| id.0)).collect()
    }

    //=====================================================================
    // Registration
    //=====================================================================

    #[test]
    fn slots_go_to_last_registered_bag() {
        let inv = inventory(2, 3);
        assert_eq!(inv.bag(FIELD).unwrap().slots().len(), 2);
        assert_eq!(inv.bag(CAVE).unwrap().slots().len(), 3);
    }

    #[test]
    fn registration_errors() {
        let mut inv = Inventory::new();
        assert_eq!(
            inv.register_slot(NamedPointId(5)),
            Err(InventoryError::NoBagRegistered(5))
        );

        inv.register_bag(FIELD).unwrap();
        assert_eq!(inv.register_bag(FIELD), Err(InventoryError::DuplicateBag(FIELD)));

        inv.register_item(ObjectId(1), 0).unwrap();
        assert_eq!(inv.register_item(ObjectId(1), 0), Err(InventoryError::DuplicateItem(ObjectId(1))));
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut inv = inventory(1, 1);
        assert_eq!(inv.add_item(ObjectId(99)), Err(InventoryError::UnknownItem(ObjectId(99))));
        assert_eq!(inv.remove_item(ObjectId(99)), Err(InventoryError::UnknownItem(ObjectId(99))));
        assert_eq!(inv.open(SceneId(7)).unwrap_err(), InventoryError::UnknownBag(SceneId(7)));
    }

    //=====================================================================
    // Ownership
    //=====================================================================

    #[test]
    fn added_item_lands_in_every_bag() {
        let mut inv = inventory(2, 2);
        inv.add_item(ObjectId(1)).unwrap();

        assert!(inv.item(ObjectId(1)).unwrap().assigned);
        assert_eq!(inv.bag(FIELD).unwrap().find_slot_by_item(ObjectId(1)), Some(0));
        assert_eq!(inv.bag(CAVE).unwrap().find_slot_by_item(ObjectId(1)), Some(0));
    }

    #[test]
    fn item_without_room_stays_unassigned() {
        let mut inv = inventory(2, 1);
        inv.add_item(ObjectId(1)).unwrap();
        inv.add_item(ObjectId(2)).unwrap();

        assert!(!inv.item(ObjectId(2)).unwrap().assigned);
        assert_eq!(inv.bag(FIELD).unwrap().find_slot_by_item(ObjectId(2)), Some(1));
    }

    #[test]
    fn adding_twice_does_not_duplicate() {
        let mut inv = inventory(3, 3);
        inv.add_item(ObjectId(1)).unwrap();
        inv.add_item(ObjectId(1)).unwrap();
        assert_eq!(inv.bag(FIELD).unwrap().free_slot(), Some(1));
    }

    #[test]
    fn removed_items_never_return() {
        let mut inv = inventory(2, 2);
        inv.add_item(ObjectId(1)).unwrap();
        inv.open(FIELD).unwrap();

        inv.remove_item(ObjectId(1)).unwrap();
        assert_eq!(held_items(inv.layout()), vec![None, None]);

        inv.add_item(ObjectId(1)).unwrap();
        assert_eq!(held_items(&inv.open(FIELD).unwrap()), vec![None, None]);
    }

    //=====================================================================
    // Open / Rebuild
    //=====================================================================

    #[test]
    fn open_reports_layout_with_sequences() {
        let mut inv = inventory(2, 1);
        inv.add_item(ObjectId(3)).unwrap();

        let view = inv.open(FIELD).unwrap();

        assert_eq!(
            view,
            vec![
                SlotView { named_point: NamedPointId(0x70000), item: Some((ObjectId(3), 0x60003)) },
                SlotView { named_point: NamedPointId(0x70001), item: None },
            ]
        );
        assert!(inv.bag(FIELD).unwrap().is_active());
    }

    #[test]
    fn rebuild_drops_items_removed_while_closed() {
        let mut inv = inventory(2, 2);
        inv.add_item(ObjectId(1)).unwrap();
        inv.add_item(ObjectId(2)).unwrap();

        inv.remove_item(ObjectId(1)).unwrap();
        assert_eq!(inv.bag(FIELD).unwrap().find_slot_by_item(ObjectId(1)), Some(0), "closed bag untouched");

        let view = inv.open(FIELD).unwrap();
        assert_eq!(held_items(&view), vec![None, Some(2)]);
    }

    #[test]
    fn held_item_is_kept_out_of_rebuild() {
        let mut inv = inventory(2, 2);
        inv.add_item(ObjectId(1)).unwrap();
        inv.bag_mut(FIELD).unwrap().remove_item(ObjectId(1));
        inv.set_held_item(Some(ObjectId(1)));

        assert_eq!(held_items(&inv.open(FIELD).unwrap()), vec![None, None]);

        inv.set_held_item(None);
        assert_eq!(held_items(&inv.open(FIELD).unwrap()), vec![Some(1), None]);
    }

    #[test]
    fn close_deactivates() {
        let mut inv = inventory(1, 1);
        inv.open(FIELD).unwrap();
        inv.open(CAVE).unwrap();
        assert!(!inv.bag(FIELD).unwrap().is_active());

        inv.close();
        assert_eq!(inv.open_scene(), None);
        assert!(!inv.bag(CAVE).unwrap().is_active());
        assert!(inv.layout().is_empty());
        assert!(inv.refresh().is_empty());
    }
}
