use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    resequence_bench::bench_heap_throughput,
    resequence_bench::bench_allocator,
    resequence_bench::bench_reorder_end_to_end
);
criterion_main!(benches);
