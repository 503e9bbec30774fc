use c3p::slope_subset;

#[slope_subset]
#[derive(Debug, Clone, Copy, PartialEq)]
enum EasySlope {
    BeginnersParadise,
    PracticeRun,
}

#[slope_subset]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T> {
    Point,
    Circle(T),
    Rect { w: T, h: T },
}

#[slope_subset]
enum Never {}

#[slope_subset]
#[derive(Debug, Clone, Copy, PartialEq)]
enum Type {
    Unit,
}

#[slope_subset]
#[derive(Debug, Clone, Copy, PartialEq)]
enum Crate {
    Root,
}

#[slope_subset]
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gated {
    Open,
    #[cfg(any())]
    Hidden,
}

#[test]
fn every_case_maps_to_itself() {
    for slope in [EasySlope::BeginnersParadise, EasySlope::PracticeRun] {
        assert_eq!(EasySlope::new(slope), Some(slope));
    }
}

#[test]
fn payloads_are_forwarded() {
    assert_eq!(Shape::<u8>::new(Shape::Point), Some(Shape::Point));
    assert_eq!(Shape::new(Shape::Circle(2.5)), Some(Shape::Circle(2.5)));
    assert_eq!(
        Shape::new(Shape::Rect { w: "a", h: "b" }),
        Some(Shape::Rect { w: "a", h: "b" })
    );
}

#[test]
fn empty_enum_still_gets_an_initializer() {
    let init: fn(Never) -> Option<Never> = Never::new;
    let _ = init;
}

#[test]
fn keyword_type_names_still_expand() {
    assert_eq!(Type::new(Type::Unit), Some(Type::Unit));
    assert_eq!(Crate::new(Crate::Root), Some(Crate::Root));
}

#[test]
fn cfg_gated_cases_are_skipped() {
    assert_eq!(Gated::new(Gated::Open), Some(Gated::Open));
}
