#![allow(dead_code)]

#[c3p::slope_subset]
struct Point {
    x: i32,
}

fn main() {}
