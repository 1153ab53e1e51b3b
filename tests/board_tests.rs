//! Board construction, image deal and hit testing

use tui_memory::core::{deck_from_images, Board, ConfigurationError, SimpleRng};
use tui_memory::types::{ImageId, Point, Rect};

fn images(n: u8) -> Vec<ImageId> {
    (10..10 + n).map(ImageId::new).collect()
}

fn dealt_board(seed: u32) -> Board {
    let mut board = Board::new();
    let mut rng = SimpleRng::new(seed);
    board
        .assign_images(deck_from_images(&images(8)), &mut rng)
        .unwrap();
    board
}

#[test]
fn test_board_layout_is_row_major_grid() {
    let board = Board::new();
    assert_eq!(board.len(), 16);
    assert_eq!((board.width(), board.height()), (40, 20));

    for (index, tile) in board.tiles().iter().enumerate() {
        let row = (index / 4) as i32;
        let col = (index % 4) as i32;
        assert_eq!(tile.rect(), Rect::new(col * 10, row * 5, 10, 5));
        assert!(tile.is_hidden());
    }
}

#[test]
fn test_every_image_appears_exactly_twice_after_deal() {
    for seed in [1, 7, 42, 9_999] {
        let board = dealt_board(seed);
        for id in images(8) {
            let count = board
                .tiles()
                .iter()
                .filter(|t| t.image() == Some(id))
                .count();
            assert_eq!(count, 2, "seed {seed} image {id:?}");
        }
    }
}

#[test]
fn test_pairing_is_symmetric_and_complete() {
    let board = dealt_board(3);
    let pairing = board.pairing();
    for tile in board.tiles() {
        let image = tile.image().unwrap();
        assert_eq!(pairing.partner(image), Some(image));
        assert!(pairing.is_match(image, image));
    }
    assert!(!pairing.is_match(ImageId::new(10), ImageId::new(11)));
}

#[test]
fn test_seed_controls_the_deal() {
    let a: Vec<_> = dealt_board(5).tiles().iter().map(|t| t.image()).collect();
    let b: Vec<_> = dealt_board(5).tiles().iter().map(|t| t.image()).collect();
    assert_eq!(a, b);
}

#[test]
fn test_seven_images_is_a_configuration_error() {
    let mut board = Board::new();
    let before: Vec<_> = board.tiles().to_vec();
    let err = board
        .assign_images(deck_from_images(&images(7)), &mut SimpleRng::new(1))
        .unwrap_err();

    assert_eq!(
        err,
        ConfigurationError::ImageCountMismatch {
            expected: 16,
            actual: 14
        }
    );
    assert_eq!(board.tiles(), before.as_slice());
}

#[test]
fn test_triplicated_image_is_rejected() {
    let mut deck = deck_from_images(&images(8));
    deck[1] = deck[0];
    let err = Board::new()
        .assign_images(deck, &mut SimpleRng::new(1))
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::UnpairedImage { .. }));
}

#[test]
fn test_tile_at_matches_rect_contains() {
    let board = dealt_board(11);
    for y in -2..22 {
        for x in -2..42 {
            let p = Point::new(x, y);
            let hit = board.tile_at(p);
            let expected = board.tiles().iter().position(|t| t.rect().contains(p));
            assert_eq!(hit, expected, "point {p:?}");
            // Idempotent: asking again gives the same answer.
            assert_eq!(board.tile_at(p), hit);
        }
    }
}

#[test]
fn test_tile_edges_belong_to_the_next_tile() {
    let board = Board::new();
    assert_eq!(board.tile_at(Point::new(9, 0)), Some(0));
    assert_eq!(board.tile_at(Point::new(10, 0)), Some(1));
    assert_eq!(board.tile_at(Point::new(0, 5)), Some(4));
    assert_eq!(board.tile_at(Point::new(40, 0)), None);
    assert_eq!(board.tile_at(Point::new(0, 20)), None);
}
