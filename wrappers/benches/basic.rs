#![allow(warnings)]

mod units;

criterion::criterion_main! {
    units::sequence::benches,
    units::map::benches,
    units::registry::benches,
}
