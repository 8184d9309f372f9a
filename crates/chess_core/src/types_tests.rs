use super::*;

#[test]
fn test_coord_round_trip() {
    assert_eq!(sq_to_coord(0), "a1");
    assert_eq!(sq_to_coord(63), "h8");
    assert_eq!(coord_to_sq("e4"), Some(E4));
    assert_eq!(coord_to_sq("d5"), Some(D5));
    assert_eq!(coord_to_sq("i9"), None);
    assert_eq!(coord_to_sq("e"), None);
}

#[test]
fn test_center_squares() {
    let names: Vec<String> = CENTER_SQUARES.iter().map(|&s| sq_to_coord(s)).collect();
    assert_eq!(names, vec!["d4", "e4", "d5", "e5"]);
    assert!(is_center(E5));
    assert!(!is_center(coord_to_sq("c4").unwrap()));
}

#[test]
fn test_rank_and_file() {
    let e4 = coord_to_sq("e4").unwrap();
    assert_eq!(file_of(e4), 4);
    assert_eq!(rank_of(e4), 3);
    assert_eq!(sq(4, 3), Some(e4));
    assert_eq!(sq(8, 0), None);
}

#[test]
fn test_side_opposite_and_serde_names() {
    assert_eq!(Side::Light.opposite(), Side::Dark);
    assert_eq!(Side::Dark.opposite(), Side::Light);
    assert_eq!(Side::Dark.to_string(), "dark");
}
