//! Fixed-size grid of drake slots

use crate::error::{Error, Result};
use drakeforge_core::{Drake, DrakeId};

/// The board: a fixed number of slots, each empty or holding one drake
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    slots: Vec<Option<Drake>>,
}

impl Grid {
    /// Create an empty grid with `size` slots
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Restore a grid from saved slots
    ///
    /// Saved slots of the wrong length are discarded and the grid starts
    /// empty.
    pub fn from_slots(slots: Vec<Option<Drake>>, size: usize) -> Self {
        if slots.len() != size {
            tracing::warn!(
                found = slots.len(),
                expected = size,
                "saved grid has the wrong size, starting with an empty grid"
            );
            return Self::new(size);
        }
        Self { slots }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<Drake>] {
        &self.slots
    }

    pub fn drake_at(&self, index: usize) -> Option<&Drake> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Put a drake into an empty slot
    pub fn place(&mut self, drake: Drake, index: usize) -> Result<()> {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(drake);
                Ok(())
            }
            _ => {
                tracing::warn!(index, id = %drake.id, "failed to place drake");
                Err(Error::SlotUnavailable(index))
            }
        }
    }

    /// Take the drake out of a slot
    pub fn remove(&mut self, index: usize) -> Option<Drake> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Move a drake into an empty slot
    pub fn move_drake(&mut self, from: usize, to: usize) -> Result<()> {
        if from == to {
            return Err(Error::SameSlot(from));
        }
        if self.drake_at(from).is_none() {
            return Err(Error::EmptySlot(from));
        }
        if !matches!(self.slots.get(to), Some(None)) {
            return Err(Error::SlotUnavailable(to));
        }

        self.slots.swap(from, to);
        Ok(())
    }

    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.find_empty_slot().is_none()
    }

    /// Occupied slots with their indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Drake)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|d| (i, d)))
    }

    pub fn occupied(&self) -> usize {
        self.iter().count()
    }

    pub fn highest_level(&self) -> Option<u32> {
        self.iter().map(|(_, d)| d.level).max()
    }

    /// Highest drake id on the board, used to reseed the id allocator
    pub fn highest_id(&self) -> Option<DrakeId> {
        self.iter().map(|(_, d)| d.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drakeforge_core::Forge;

    fn drakes(n: usize) -> Vec<Drake> {
        let mut forge = Forge::with_seed(3);
        (0..n).map(|_| forge.create_drake(0).unwrap()).collect()
    }

    #[test]
    fn test_place_and_remove() {
        let mut grid = Grid::new(4);
        let [a, b] = <[Drake; 2]>::try_from(drakes(2)).unwrap();

        grid.place(a.clone(), 1).unwrap();
        assert!(matches!(grid.place(b.clone(), 1), Err(Error::SlotUnavailable(1))));
        assert!(matches!(grid.place(b, 4), Err(Error::SlotUnavailable(4))));

        assert_eq!(grid.drake_at(1), Some(&a));
        assert_eq!(grid.find_empty_slot(), Some(0));
        assert_eq!(grid.remove(1), Some(a));
        assert_eq!(grid.remove(1), None);
        assert_eq!(grid.remove(10), None);
    }

    #[test]
    fn test_move() {
        let mut grid = Grid::new(3);
        let list = drakes(2);
        grid.place(list[0].clone(), 0).unwrap();
        grid.place(list[1].clone(), 1).unwrap();

        assert!(matches!(grid.move_drake(0, 1), Err(Error::SlotUnavailable(1))));
        assert!(matches!(grid.move_drake(2, 1), Err(Error::EmptySlot(2))));
        assert!(matches!(grid.move_drake(0, 0), Err(Error::SameSlot(0))));
        assert!(matches!(grid.move_drake(0, 7), Err(Error::SlotUnavailable(7))));

        grid.move_drake(0, 2).unwrap();
        assert!(grid.drake_at(0).is_none());
        assert_eq!(grid.drake_at(2), Some(&list[0]));
        assert!(!grid.is_full());
    }

    #[test]
    fn test_full_and_highest() {
        let mut grid = Grid::new(2);
        assert_eq!(grid.highest_level(), None);
        assert_eq!(grid.highest_id(), None);

        for (i, drake) in drakes(2).into_iter().enumerate() {
            grid.place(drake, i).unwrap();
        }
        assert!(grid.is_full());
        assert_eq!(grid.occupied(), 2);
        assert_eq!(grid.highest_level(), Some(0));
        assert_eq!(grid.highest_id(), Some(DrakeId(1)));
    }

    #[test]
    fn test_from_slots_shape_check() {
        let slots = vec![None, None, None];
        assert_eq!(Grid::from_slots(slots.clone(), 3).size(), 3);

        let grid = Grid::from_slots(vec![Some(drakes(1).remove(0))], 4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.occupied(), 0);
    }
}
