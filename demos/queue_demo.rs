//! Walks both containers through the same short script
//!
//! ```bash
//! cargo run --example queue_demo
//! ```

use indexed_heap::{ArrayQueue, HeapError, IndexedMinHeap};

fn main() -> Result<(), HeapError> {
    let mut names = ArrayQueue::new();

    names.enqueue("Charles");
    names.enqueue("Erick");
    println!("dequeued {:?}", names.dequeue());
    println!("dequeued {:?}", names.dequeue());
    // Third dequeue finds the queue empty
    println!("dequeued {:?}", names.dequeue());
    names.enqueue("Alexander");
    names.enqueue("Kane");

    println!("front of queue: {}", names.try_peek()?);

    let mut heap = IndexedMinHeap::new();
    for x in [5, 3, 8, 1, 9, 2] {
        heap.push(x);
    }
    println!("min: {}", heap.try_peek()?);

    println!("removed 8: {}", heap.remove(&8));
    println!("contains 8 after remove: {}", heap.contains(&8));

    let mut drained = Vec::with_capacity(heap.len());
    while let Ok(x) = heap.try_pop() {
        drained.push(x);
    }
    println!("drained in order: {:?}", drained);

    match heap.try_pop() {
        Err(HeapError::Empty) => println!("heap is empty"),
        other => println!("unexpected: {:?}", other),
    }

    Ok(())
}
