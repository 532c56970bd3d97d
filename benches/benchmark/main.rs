use criterion::criterion_main;


mod collect;

#[cfg(feature = "std")]
mod capture;


#[cfg(feature = "std")]
criterion_main!(
    collect::collect_benches,
    capture::capture_benches,
    async_ops::async_ops_benches,
    tower::tower_benches,
);

#[cfg(not(feature = "std"))]
criterion_main!(collect::collect_benches, async_ops::async_ops_benches, tower::tower_benches,);
