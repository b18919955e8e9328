#[cfg(test)]
mod tests {
    use crate::error::{Error, MalformedReason};
    use crate::heading::Heading;
    use crate::lab::{Guard, Lab};
    use crate::location::Location;

    // the example lab from the puzzle statement
    const EXAMPLE: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    // obstacles force Up, Right, Down, Left around a 2x2 square
    const SPINNER: &str = ".#..
.^.#
#...
..#.
";

    fn lab(map: &str) -> Lab {
        map.parse().unwrap()
    }

    #[test]
    fn parse_and_print() {
        let example = lab(EXAMPLE);
        assert_eq!(format!("{}", example), EXAMPLE);
        assert_eq!(example.start(), Guard { location: Location(4, 6), heading: Heading::Up });
        assert_eq!((example.dims().0.get(), example.dims().1.get()), (10, 10));
    }

    #[test]
    fn example_patrol() {
        let patrol = lab(EXAMPLE).patrol().unwrap();
        assert!(!patrol.looped);
        assert_eq!(patrol.visited.len(), 41);
    }

    #[test]
    fn example_patrol_render() {
        let example = lab(EXAMPLE);
        let mut walk = example.walk();
        walk.run().unwrap();

        assert!(walk.exited());
        assert_eq!(format!("{}", walk), "....#.....
....XXXXX#
....X...X.
..#.X...X.
..XXXXX#X.
..X.X.X.X.
.#XXXXXXX.
.XXXXXXX#.
#XXXXXXX..
......#X..
");
    }

    #[test]
    fn example_obstructions() {
        assert_eq!(lab(EXAMPLE).count_loop_inducing_obstructions().unwrap(), 6);
    }

    #[test]
    fn obstruction_search_leaves_lab_alone() {
        let example = lab(EXAMPLE);
        let first = example.count_loop_inducing_obstructions().unwrap();
        let second = example.count_loop_inducing_obstructions().unwrap();

        assert_eq!(first, second);
        assert_eq!(format!("{}", example), EXAMPLE);
        assert_eq!(example, lab(EXAMPLE));
    }

    #[test]
    fn patrol_is_deterministic() {
        let example = lab(EXAMPLE);
        assert_eq!(example.patrol().unwrap(), example.patrol().unwrap());
    }

    #[test]
    fn visited_includes_start() {
        for map in [EXAMPLE, SPINNER, ".^.\n...\n", "#.\n>.\n"] {
            let lab = lab(map);
            assert!(lab.patrol().unwrap().visited.contains(&lab.start().location), "{map}");
        }
    }

    #[test]
    fn facing_the_edge() {
        let patrol = lab(".^.\n...\n").patrol().unwrap();
        assert!(!patrol.looped);
        assert_eq!(patrol.visited.into_iter().collect::<Vec<_>>(), vec![Location(1, 0)]);
    }

    #[test]
    fn single_sweep_to_the_edge() {
        let sweep = lab("...\n.>.\n...\n");
        let mut walk = sweep.walk();

        let stride = walk.step();
        assert_eq!(stride.location, Location(2, 1));
        assert!(stride.exited);
        assert_eq!(format!("{}", walk), "...\n.XX\n...\n");

        let patrol = sweep.patrol().unwrap();
        assert!(!patrol.looped);
        assert_eq!(patrol.visited.len(), 2);
    }

    #[test]
    fn stride_stops_before_obstacle_and_turns() {
        let mut walk = lab("..#\n...\n<..\n").walk();
        let stride = walk.step();

        assert_eq!(stride.location, Location(0, 2));
        assert!(stride.exited);

        let mut walk = lab("..#\n...\n..^\n").walk();
        let stride = walk.step();
        assert_eq!(stride.location, Location(2, 1));
        assert_eq!(stride.heading, Heading::Right);
        assert!(!stride.exited);
        assert_eq!(format!("{}", walk), "..#\n..>\n..X\n");

        // facing the edge right after the turn
        let stride = walk.step();
        assert_eq!(stride.location, Location(2, 1));
        assert!(stride.exited);
        assert!(walk.exited());
    }

    #[test]
    fn spinner_loops() {
        let spinner = lab(SPINNER);
        let mut walk = spinner.walk();
        let patrol = walk.run().unwrap();

        assert!(patrol.looped);
        assert_eq!(patrol.visited.len(), 4);
        assert!(!walk.exited());
        assert_eq!(walk.guard(), Guard { location: Location(1, 1), heading: Heading::Right });
        assert_eq!(format!("{}", walk), ".#..
.>X#
#XX.
..#.
");
    }

    #[test]
    fn obstruction_count_bounds() {
        for map in [EXAMPLE, SPINNER, "...\n.>.\n...\n", "^\n"] {
            let lab = lab(map);
            let cells = lab.dims().0.get() * lab.dims().1.get();
            assert!(lab.count_loop_inducing_obstructions().unwrap() <= cells - 1, "{map}");
        }

        assert_eq!(lab(SPINNER).count_loop_inducing_obstructions().unwrap(), 8);
        assert_eq!(lab("...\n.>.\n...\n").count_loop_inducing_obstructions().unwrap(), 0);
    }

    #[test]
    fn with_obstruction() {
        let example = lab(EXAMPLE);
        // next to the guard's start, one of the six known traps
        let trapped = example.with_obstruction(Location(3, 6)).unwrap();
        assert!(trapped.patrol().unwrap().looped);

        assert!(example.with_obstruction(Location(4, 6)).is_none());
        assert!(example.with_obstruction(Location(4, 0)).is_none());
        assert!(example.with_obstruction(Location(10, 0)).is_none());
    }

    #[test]
    fn loop_bound_surfaces() {
        let mut walk = lab(SPINNER).walk();
        assert_eq!(walk.stride_limit(), 65);
        assert_eq!(walk.run_with_limit(2), Err(Error::LoopBoundExceeded { limit: 2 }));
    }

    #[test]
    fn malformed_maps() {
        assert_eq!("".parse::<Lab>(), Err(Error::MalformedGrid { line: 1, column: 1, reason: MalformedReason::Empty }));
        assert_eq!("...\n.^\n".parse::<Lab>(), Err(Error::MalformedGrid {
            line: 2,
            column: 3,
            reason: MalformedReason::RaggedLine { expected: 3, found: 2 },
        }));
        assert_eq!("...\n.^..\n".parse::<Lab>(), Err(Error::MalformedGrid {
            line: 2,
            column: 4,
            reason: MalformedReason::RaggedLine { expected: 3, found: 4 },
        }));
        assert_eq!("...\n.^.\n..X\n".parse::<Lab>(), Err(Error::MalformedGrid {
            line: 3,
            column: 3,
            reason: MalformedReason::UnknownSymbol('X'),
        }));
    }

    #[test]
    fn guard_count() {
        assert_eq!("...\n.#.\n".parse::<Lab>(), Err(Error::MissingGuard));
        assert_eq!(".>.\n..<\n".parse::<Lab>(), Err(Error::MultipleGuards { first: Location(1, 0), second: Location(2, 1) }));
    }

    #[test]
    fn carriage_returns() {
        assert_eq!(lab("#.\r\n^.\r\n"), lab("#.\n^.\n"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            "..\n.?\n".parse::<Lab>().unwrap_err().to_string(),
            "malformed map at line 2, column 2: unrecognized symbol '?'"
        );
        assert_eq!(
            Error::MultipleGuards { first: Location(0, 0), second: Location(1, 2) }.to_string(),
            "more than one guard on the map, at (0, 0) and (1, 2)"
        );
    }
}
