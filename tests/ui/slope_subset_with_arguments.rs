#![allow(dead_code)]

#[c3p::slope_subset(Slope)]
enum EasySlope {
    PracticeRun,
}

fn main() {}
