//! Proofs for queue-level operation sequences

#[cfg(kani)]
use rust_priority_heaps::heap_core::is_heap;
#[cfg(kani)]
use rust_priority_heaps::{HeapError, PriorityQueue};

/// Proof: insert always increments the length and never loses the best element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_len() {
    let mut heap: PriorityQueue<u8> = PriorityQueue::min();
    for _ in 0..4 {
        let before = heap.len();
        let value: u8 = kani::any();
        let old_best = heap.peek().copied();
        heap.insert(value);

        assert!(heap.len() == before + 1);
        let best = *heap.peek().unwrap();
        assert!(best <= value);
        if let Some(old) = old_best {
            assert!(best <= old);
        }
    }
}

/// Proof: extract returns elements in non-decreasing order and then errors
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_order() {
    let values: [u8; 4] = kani::any();
    let mut heap = PriorityQueue::min();
    for value in values {
        heap.insert(value);
    }

    let mut previous = heap.extract().unwrap();
    while let Ok(next) = heap.extract() {
        assert!(previous <= next);
        previous = next;
    }
    assert!(heap.extract() == Err(HeapError::EmptyHeap));
}

/// Proof: an arbitrary insert/extract sequence keeps the invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_mixed_operations_keep_invariant() {
    let mut heap: PriorityQueue<u8> = PriorityQueue::min();
    for _ in 0..5 {
        if kani::any::<bool>() {
            heap.insert(kani::any());
        } else {
            let len = heap.len();
            let result = heap.extract();
            assert!(result.is_ok() == (len > 0));
        }
        assert!(is_heap(heap.as_slice(), heap.policy()));
    }
}
