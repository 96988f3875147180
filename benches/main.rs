#[macro_use]
extern crate criterion;

mod skiplist;

criterion_group!(
    benches,
    crate::skiplist::insert,
    crate::skiplist::contains,
    crate::skiplist::iter,
    crate::skiplist::cursor_remove
);
criterion_main!(benches);
