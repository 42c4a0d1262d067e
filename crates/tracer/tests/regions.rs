use pretty_assertions::assert_eq;
use proptest::prelude::*;
use stationmap_grid::{Cell, Grid};
use stationmap_tracer::{trace, House, Station};

fn block(width: u32, height: u32, left: u32, top: u32, w: u32, h: u32) -> Grid {
    let mut rows = vec![vec![0u8; width as usize]; height as usize];
    for row in rows.iter_mut().skip(top as usize).take(h as usize) {
        for cell in row.iter_mut().skip(left as usize).take(w as usize) {
            *cell = 1;
        }
    }
    Grid::from_rows(&rows).unwrap()
}

#[test]
fn empty_grid_yields_nothing() {
    let layout = trace(&Grid::empty(5, 4).unwrap());
    assert!(layout.houses().is_empty());
    assert!(layout.stations().is_empty());
    assert!(layout.is_empty());
}

#[test]
fn zero_sized_grid_yields_nothing() {
    assert!(trace(&Grid::empty(0, 0).unwrap()).is_empty());
    assert!(trace(&Grid::empty(0, 3).unwrap()).is_empty());
}

#[test]
fn isolated_cell_is_unit_house() {
    let layout = trace(&block(5, 5, 2, 3, 1, 1));
    assert_eq!(layout.houses(), &[House::from_seed(2, 3, 1, 1, 0)]);
    assert_eq!(layout.houses()[0].center(), (2, 3));
}

proptest! {
    #[test]
    fn proptest_solid_block_is_one_house(
        (width, height, left, top, w, h) in (1u32..20, 1u32..20).prop_flat_map(|(w, h)| {
            (Just(w + 4), Just(h + 3), 0u32..=4, 0u32..=3, Just(w), Just(h))
        })
    ) {
        let layout = trace(&block(width, height, left, top, w, h));
        prop_assert_eq!(layout.houses(), &[House::from_seed(left, top, w, h, 0)][..]);
        prop_assert_eq!(layout.houses()[0].center(), (left + w / 2, top + h / 2));
        prop_assert!(layout.stations().is_empty());
    }

    #[test]
    fn proptest_ids_follow_detection_order(
        cells in prop::collection::vec(prop_oneof![3 => Just(0u8), 1 => Just(1u8), 1 => Just(2u8)], 64)
    ) {
        let grid = Grid::new(8, 8, cells).expect("sized body");
        let layout = trace(&grid);
        for (i, house) in layout.houses().iter().enumerate() {
            prop_assert_eq!(house.id, i);
            prop_assert!(house.center().0 < 8 && house.center().1 < 8);
        }
        for (i, station) in layout.stations().iter().enumerate() {
            prop_assert_eq!(station.id, i);
            prop_assert_eq!(grid.cell(station.y, station.x), Cell::Station);
        }
    }
}

#[test]
fn block_touching_grid_edges_is_bounded() {
    let layout = trace(&block(3, 2, 0, 0, 3, 2));
    assert_eq!(layout.houses(), &[House::from_seed(0, 0, 3, 2, 0)]);
}

#[test]
fn stations_are_numbered_in_scan_order() {
    let grid = Grid::from_rows(&[[0u8, 0, 2], [2, 0, 0]]).unwrap();
    let layout = trace(&grid);
    assert_eq!(
        layout.stations(),
        &[Station::new(2, 0, 0), Station::new(0, 1, 1)]
    );
}

#[test]
fn houses_are_numbered_in_detection_order() {
    let grid = Grid::from_rows(&[
        [0u8, 0, 0, 1, 1],
        [1, 1, 0, 1, 1],
        [1, 1, 0, 0, 0],
        [0, 0, 0, 1, 0],
    ])
    .unwrap();
    let layout = trace(&grid);
    assert_eq!(
        layout.houses(),
        &[
            House::from_seed(3, 0, 2, 2, 0),
            House::from_seed(0, 1, 2, 2, 1),
            House::from_seed(3, 3, 1, 1, 2),
        ]
    );
}

#[test]
fn layout_serializes_for_export() {
    let layout = trace(&Grid::from_rows(&[[1u8, 0, 2]]).unwrap());
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["houses"][0]["center_x"], 0);
    assert_eq!(json["stations"][0]["x"], 2);
}
