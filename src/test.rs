#[cfg(test)]
mod tests {
    use crate::board::{Board, Coord, Direction};
    use crate::heuristic::{self, Mode};
    use crate::search::Search;
    use crate::state::PuzzleState;
    use crate::util::board_from_str;

    fn goal3() -> Board {
        board_from_str("0 1 2 3 4 5 6 7 8")
    }

    #[test]
    fn moves_fail_at_boundaries_without_mutation() {
        let mut board = goal3();
        let mut blank = board.blank().unwrap();
        let before = board.clone();

        // blank sits in the top-left corner
        assert!(!board.move_up(&mut blank));
        assert!(!board.move_left(&mut blank));
        assert_eq!(board, before);
        assert_eq!(blank, Coord { row: 0, col: 0 });

        let mut board = board_from_str("1 2 3 4 5 6 7 8 0");
        let mut blank = board.blank().unwrap();
        let before = board.clone();

        assert!(!board.move_down(&mut blank));
        assert!(!board.move_right(&mut blank));
        assert_eq!(board, before);
        assert_eq!(blank, Coord { row: 2, col: 2 });
    }

    #[test]
    fn moves_swap_and_reverse_cleanly() {
        let mut board = goal3();
        let mut blank = board.blank().unwrap();
        let original = board.clone();

        assert!(board.move_down(&mut blank));
        assert_eq!(blank, Coord { row: 1, col: 0 });
        assert_eq!(board.at(0, 0), 3);
        assert_eq!(board.at(1, 0), 0);

        assert!(board.move_up(&mut blank));
        assert_eq!(board, original);
        assert_eq!(blank, Coord { row: 0, col: 0 });
    }

    #[test]
    fn moves_preserve_the_permutation() {
        let mut board = board_from_str("1 2 3 4 0 5 7 8 6");
        let mut blank = board.blank().unwrap();

        for dir in [Direction::UP, Direction::RIGHT, Direction::DOWN, Direction::DOWN] {
            board.slide(&mut blank, dir);

            let mut cells = board.cells().to_vec();
            cells.sort_unstable();
            assert_eq!(cells, (0..9).collect::<Vec<u32>>());
            assert_eq!(board.at(blank.row, blank.col), 0);
        }
    }

    #[test]
    fn check_is_goal_works() {
        assert!(PuzzleState::new(goal3(), Mode::ZERO).is_goal());

        // blank away from (0, 0)
        let shifted = board_from_str("1 0 2 3 4 5 6 7 8");
        assert!(!PuzzleState::new(shifted, Mode::ZERO).is_goal());

        // blank home but tiles out of order
        let swapped = board_from_str("0 1 2 3 4 5 6 8 7");
        assert!(!PuzzleState::new(swapped, Mode::ZERO).is_goal());
    }

    #[test]
    fn zero_heuristic_is_always_zero() {
        for input in ["0 1 2 3 4 5 6 7 8", "8 7 6 5 4 3 2 1 0", "1 2 3 4 0 5 7 8 6"] {
            assert_eq!(heuristic::evaluate(Mode::ZERO, &board_from_str(input)), 0);
        }
    }

    #[test]
    fn displaced_counts_out_of_place_tiles() {
        assert_eq!(heuristic::evaluate(Mode::DISPLACED, &goal3()), 0);

        // exactly one misplaced non-blank tile
        let one_off = board_from_str("1 0 2 3 4 5 6 7 8");
        assert_eq!(heuristic::evaluate(Mode::DISPLACED, &one_off), 1);

        let scrambled = board_from_str("1 2 3 4 0 5 7 8 6");
        assert_eq!(heuristic::evaluate(Mode::DISPLACED, &scrambled), 7);
    }

    #[test]
    fn self_scan_heuristics_collapse_to_zero() {
        for input in ["0 1 2 3 4 5 6 7 8", "1 2 3 4 0 5 7 8 6", "8 6 7 2 5 4 3 0 1"] {
            let board = board_from_str(input);
            assert_eq!(heuristic::evaluate(Mode::MANHATTAN, &board), 0);
            assert_eq!(heuristic::evaluate(Mode::CUSTOM, &board), 0);
        }
    }

    #[test]
    fn cost_is_depth_plus_heuristic() {
        let root = PuzzleState::new(board_from_str("1 2 3 4 0 5 7 8 6"), Mode::DISPLACED);
        assert_eq!(root.depth(), 0);
        assert_eq!(root.f(), root.h());

        let mut child = root.clone();
        assert!(child.slide(Direction::UP));
        child.attach_parent(0, root.depth());
        assert_eq!(child.depth(), 1);
        assert_eq!(child.f(), 1 + child.h());
    }

    #[test]
    fn states_compare_by_board_alone() {
        let a = PuzzleState::new(board_from_str("1 2 3 4 0 5 7 8 6"), Mode::DISPLACED);
        let mut b = a.clone();
        b.attach_parent(0, 5);
        assert_eq!(a, b);

        let smaller = PuzzleState::new(goal3(), Mode::DISPLACED);
        assert!(smaller < a);
    }

    #[test]
    fn board_order_is_row_major_lexicographic() {
        let a = board_from_str("0 1 2 3 4 5 6 7 8");
        let b = board_from_str("0 1 2 3 4 5 6 8 7");
        assert!(a < b);

        let c = board_from_str("1 0 2 3 4 5 6 7 8");
        assert!(b < c);
    }

    #[test]
    fn parser_accepts_arbitrary_whitespace_and_stops_at_junk() {
        let board = board_from_str("1 2 3\n4 0 5\n\t7 8 6 end-of-input");
        assert_eq!(board.side(), 3);
        assert_eq!(board.at(1, 1), 0);
        assert_eq!(board.at(2, 2), 6);
    }

    #[test]
    #[should_panic]
    fn parser_rejects_non_square_input() {
        board_from_str("0 1 2 3 4 5 6 7");
    }

    #[test]
    fn can_solve_scrambled_board_with_displaced() {
        let root = PuzzleState::new(board_from_str("1 2 3 4 0 5 7 8 6"), Mode::DISPLACED);
        let solution = Search::new().solve(root, false).unwrap();

        assert!(solution.stats.depth >= 1);
        assert_eq!(solution.path.len() as u32, solution.stats.depth + 1);
        assert_eq!(
            solution.path.first().unwrap(),
            &board_from_str("1 2 3 4 0 5 7 8 6")
        );
        assert_eq!(solution.path.last().unwrap(), &goal3());
        assert!(solution.stats.visited > 1);
        assert!(solution.stats.generated >= solution.path.len());
    }

    #[test]
    fn solved_input_reports_a_single_visited_node() {
        let root = PuzzleState::new(goal3(), Mode::MANHATTAN);
        let solution = Search::new().solve(root, false).unwrap();

        assert_eq!(solution.stats.visited, 1);
        assert_eq!(solution.stats.depth, 0);
        assert_eq!(solution.stats.generated, 0);
        assert_eq!(solution.path, vec![goal3()]);
    }

    #[test]
    fn every_mode_solves_a_shallow_board() {
        for mode in [Mode::ZERO, Mode::DISPLACED, Mode::MANHATTAN, Mode::CUSTOM] {
            let root = PuzzleState::new(board_from_str("1 0 2 3 4 5 6 7 8"), mode);
            let solution = Search::new().solve(root, false).unwrap();
            assert_eq!(solution.stats.depth, 1, "mode {:?}", mode);
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut first = goal3();
        let mut first_blank = first.blank().unwrap();
        first.shuffle(&mut first_blank, 42, 25);

        let mut second = goal3();
        let mut second_blank = second.blank().unwrap();
        second.shuffle(&mut second_blank, 42, 25);

        assert_eq!(first, second);
        assert_eq!(first_blank, second_blank);

        // still a permutation, blank still tracked
        let mut cells = first.cells().to_vec();
        cells.sort_unstable();
        assert_eq!(cells, (0..9).collect::<Vec<u32>>());
        assert_eq!(first.at(first_blank.row, first_blank.col), 0);
    }

    #[test]
    fn shuffled_boards_solve_back_to_the_goal() {
        let mut board = goal3();
        let mut blank = board.blank().unwrap();
        board.shuffle(&mut blank, 7, 12);

        let root = PuzzleState::new(board, Mode::DISPLACED);
        let solution = Search::new().solve(root, false).unwrap();

        assert_eq!(solution.path.last().unwrap(), &goal3());
        // the walk is 12 moves long, so an optimal route is never longer
        assert!(solution.stats.depth <= 12);
    }
}
