//! Reorder buffer: the in-flight instruction window.
//!
//! A circular buffer tracking instructions from issue through retirement.
//! It provides:
//! 1. **Allocation:** Assigns a tag to each instruction entering the window.
//! 2. **State ownership:** Every [`InsState`] read/write in the machine goes
//!    through this structure, under the ROB mutex in [`crate::core::Cpu`].
//! 3. **In-order retirement:** Retires `WaitingRetirement` instructions from
//!    the head in program order and drops `Aborted` ones.
//! 4. **Squash:** Marks instructions younger than a given tag `Aborted` after
//!    a misprediction, without unlinking them from the issue queues — the
//!    execution workers observe the state and discard the queue entries.

use crate::common::error::Exception;
use crate::isa::instruction::{InsState, Instruction};

/// Tag identifying an in-flight instruction in the reorder buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RobTag(pub u32);

/// One occupied window slot.
#[derive(Clone, Debug)]
struct Slot {
    tag: RobTag,
    ins: Instruction,
}

/// Reorder buffer — circular in-flight window with in-order retirement.
#[derive(Debug)]
pub struct Rob {
    /// Fixed-size slot array; `None` is a free slot.
    slots: Vec<Option<Slot>>,
    /// Index of the oldest instruction (retirement point).
    head: usize,
    /// Index where the next instruction will be allocated.
    tail: usize,
    /// Number of occupied slots.
    count: usize,
    /// Monotonically increasing tag counter (0 is never assigned).
    next_tag: u32,
    /// Monotonically increasing issue identifier.
    next_uniq: u64,
}

impl Rob {
    /// Creates a window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            head: 0,
            tail: 0,
            count: 0,
            next_tag: 1,
            next_uniq: 1,
        }
    }

    /// Returns the window capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of in-flight instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no instructions are in flight.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the window is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Allocates a slot for a freshly issued instruction in the `Queued`
    /// state. Returns `None` if the window is full.
    pub fn allocate(&mut self, pc: u64, opcode: u32, dest: u8) -> Option<RobTag> {
        if self.is_full() {
            return None;
        }

        let tag = RobTag(self.next_tag);
        self.next_tag = self.next_tag.wrapping_add(1);
        if self.next_tag == 0 {
            self.next_tag = 1; // skip 0
        }

        let uniq = self.next_uniq;
        self.next_uniq += 1;

        self.slots[self.tail] = Some(Slot {
            tag,
            ins: Instruction::new(uniq, pc, opcode, dest),
        });
        self.tail = (self.tail + 1) % self.slots.len();
        self.count += 1;
        Some(tag)
    }

    /// Returns the lifecycle state of an in-flight instruction, or `None`
    /// if the tag's slot has already been reclaimed.
    pub fn state(&self, tag: RobTag) -> Option<InsState> {
        self.find(tag).map(|slot| slot.ins.state)
    }

    /// Sets the lifecycle state of an in-flight instruction.
    pub fn set_state(&mut self, tag: RobTag, state: InsState) {
        if let Some(slot) = self.find_mut(tag) {
            slot.ins.state = state;
        }
    }

    /// Records an exception summary on an in-flight instruction.
    pub fn record_exception(&mut self, tag: RobTag, exc: Exception) {
        if let Some(slot) = self.find_mut(tag) {
            slot.ins.exc = Some(exc);
        }
    }

    /// Returns the instruction record for a tag, if still in flight.
    pub fn instruction(&self, tag: RobTag) -> Option<&Instruction> {
        self.find(tag).map(|slot| &slot.ins)
    }

    /// Marks a single instruction `Aborted`. Queue entries referencing it
    /// stay linked until a worker observes the state and discards them.
    pub fn abort(&mut self, tag: RobTag) {
        self.set_state(tag, InsState::Aborted);
    }

    /// Marks every instruction younger than `tag` as `Aborted`; the
    /// instruction with `tag` itself is kept.
    pub fn squash_after(&mut self, tag: RobTag) {
        if self.count == 0 {
            return;
        }

        let mut idx = self.head;
        let mut seen_boundary = false;
        for _ in 0..self.count {
            if let Some(slot) = &mut self.slots[idx] {
                if seen_boundary {
                    slot.ins.state = InsState::Aborted;
                } else if slot.tag == tag {
                    seen_boundary = true;
                }
            }
            idx = (idx + 1) % self.slots.len();
        }
    }

    /// Retires the head instruction if it has finished or was squashed.
    ///
    /// A `WaitingRetirement` head is marked `Retired` and returned; an
    /// `Aborted` head is dropped and returned as-is. A head still `Queued`
    /// or `Executing` blocks retirement and `None` is returned.
    pub fn retire_head(&mut self) -> Option<Instruction> {
        let slot = self.slots.get(self.head)?.as_ref()?;
        let mut ins = match slot.ins.state {
            InsState::WaitingRetirement | InsState::Aborted => slot.ins.clone(),
            InsState::Queued | InsState::Executing | InsState::Retired => return None,
        };
        if ins.state == InsState::WaitingRetirement {
            ins.state = InsState::Retired;
        }

        self.slots[self.head] = None;
        self.head = (self.head + 1) % self.slots.len();
        self.count -= 1;
        Some(ins)
    }

    fn find(&self, tag: RobTag) -> Option<&Slot> {
        let mut idx = self.head;
        for _ in 0..self.count {
            if let Some(slot) = &self.slots[idx] {
                if slot.tag == tag {
                    return Some(slot);
                }
            }
            idx = (idx + 1) % self.slots.len();
        }
        None
    }

    fn find_mut(&mut self, tag: RobTag) -> Option<&mut Slot> {
        let mut idx = self.head;
        for _ in 0..self.count {
            if self.slots[idx].as_ref().is_some_and(|s| s.tag == tag) {
                return self.slots[idx].as_mut();
            }
            idx = (idx + 1) % self.slots.len();
        }
        None
    }
}
