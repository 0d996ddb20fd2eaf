//! Integration test: the timed search phase must not touch the heap, so
//! strategies are compared on lookup cost alone.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use phonebook_benchmark_rs::strategy::StrategyKind;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record_allocation() {
    let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record_allocation();
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

/// Allocations made by the current thread while running `operation`.
fn allocations_during<R>(operation: impl FnOnce() -> R) -> (R, usize) {
    let before = ALLOCATIONS.with(Cell::get);
    let outcome = operation();
    let after = ALLOCATIONS.with(Cell::get);
    (outcome, after - before)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn search_phase_does_not_allocate() {
    let entries: Vec<String> = (0..1_000)
        .map(|i| format!("{} Person{:04}", 5_000 + i, i))
        .collect();
    let queries: Vec<String> = (0..1_000)
        .map(|i| format!("Person{:04}", i * 2))
        .collect();

    for kind in StrategyKind::ALL {
        let mut strategy = kind.create();
        strategy.build(&entries).unwrap();

        let (found, allocations) = allocations_during(|| {
            queries
                .iter()
                .filter(|query| strategy.contains(&entries, query))
                .count()
        });

        assert_eq!(found, 500, "{}", strategy.name());
        assert_eq!(allocations, 0, "{} allocated while searching", strategy.name());
    }
}
