//! # Counted Queue Model Properties
//!
//! Drives the counted queue with random allocate/enqueue/remove sequences
//! against a `VecDeque` reference model, checking the count and the FIFO
//! iteration order after every step.

use std::collections::VecDeque;

use axpsim_core::core::iq::InstructionQueue;
use axpsim_core::core::pipeline::PipelineTag;
use axpsim_core::core::rob::RobTag;
use proptest::prelude::*;

const CAPACITY: usize = 8;

proptest! {
    #[test]
    fn queue_matches_fifo_model(ops in proptest::collection::vec(0u8..=2, 1..96)) {
        let mut iq = InstructionQueue::new(CAPACITY);
        let mut model = VecDeque::new();
        let mut next_tag = 1u32;

        for op in ops {
            match op {
                // Issue: allocate from the pool and link at the tail.
                0 => match iq.allocate(RobTag(next_tag), PipelineTag::L0L1U0U1) {
                    Some(id) => {
                        iq.enqueue(id);
                        model.push_back((id, next_tag));
                        next_tag += 1;
                    }
                    None => prop_assert_eq!(model.len(), CAPACITY),
                },
                // Dequeue the head, as a worker taking the oldest entry.
                1 => {
                    if let Some(id) = iq.first() {
                        iq.remove(id);
                        iq.release(id);
                        let (model_id, _) = model.pop_front().unwrap();
                        prop_assert_eq!(model_id, id);
                    }
                }
                // Remove from the middle, as a worker skipping an
                // ineligible head and claiming the second entry.
                _ => {
                    if model.len() >= 2 {
                        let (id, _) = model.remove(1).unwrap();
                        iq.remove(id);
                        iq.release(id);
                    }
                }
            }

            prop_assert_eq!(iq.len(), model.len());
            prop_assert_eq!(iq.is_empty(), model.is_empty());
            prop_assert_eq!(iq.free_entries(), CAPACITY - model.len());

            let mut cursor = iq.first();
            for (id, tag) in &model {
                let cur = cursor.unwrap();
                prop_assert_eq!(cur, *id);
                prop_assert_eq!(iq.rob_tag(cur), RobTag(*tag));
                cursor = iq.next(cur);
            }
            prop_assert!(cursor.is_none());
        }
    }
}
