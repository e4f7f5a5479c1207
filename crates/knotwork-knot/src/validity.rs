//! Structural validity of edge cycles.

use std::collections::HashSet;

use knotwork_core::{Direction, Node, StructureError};

/// Check that `directions` trace a closed, self-avoiding lattice loop.
///
/// Walks the cumulative position from the origin. Each edge occupies its
/// midpoint; midpoints are tracked on doubled coordinates so the test is
/// exact. Fails on fewer than four edges, a `Zero` direction, a repeated
/// midpoint, or a walk that does not end where it started.
///
/// # Examples
///
/// ```
/// use knotwork_core::{Direction::*, StructureError};
/// use knotwork_knot::check_structure;
///
/// assert!(check_structure([Up, Right, Down, Left]).is_ok());
/// assert!(matches!(
///     check_structure([Up, Right, Down]),
///     Err(StructureError::TooShort { len: 3 })
/// ));
/// ```
pub fn check_structure<I>(directions: I) -> Result<(), StructureError>
where
    I: IntoIterator<Item = Direction>,
{
    let directions: Vec<Direction> = directions.into_iter().collect();
    if directions.len() < 4 {
        return Err(StructureError::TooShort {
            len: directions.len(),
        });
    }

    let mut position = Node::ORIGIN;
    let mut occupied = HashSet::with_capacity(directions.len());
    for (index, &direction) in directions.iter().enumerate() {
        if direction.is_zero() {
            return Err(StructureError::ZeroDirection { index });
        }
        let midpoint = position * 2 + direction;
        if !occupied.insert(midpoint) {
            return Err(StructureError::SelfIntersection { index, midpoint });
        }
        position += direction;
    }

    if !position.is_origin() {
        return Err(StructureError::NotClosed {
            displacement: position,
        });
    }
    Ok(())
}

/// Boolean form of [`check_structure`].
pub fn is_valid_structure<I>(directions: I) -> bool
where
    I: IntoIterator<Item = Direction>,
{
    check_structure(directions).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotwork_core::Direction::*;

    #[test]
    fn unit_square_is_valid() {
        assert!(is_valid_structure([Up, Right, Down, Left]));
    }

    #[test]
    fn open_path_is_invalid() {
        assert_eq!(
            check_structure([Up, Right, Down]),
            Err(StructureError::TooShort { len: 3 })
        );
        assert_eq!(
            check_structure([Up, Up, Right, Down, Left]),
            Err(StructureError::NotClosed {
                displacement: Node::new(0, 1, 0)
            })
        );
    }

    #[test]
    fn there_and_back_collides() {
        let err = check_structure([Up, Down, Right, Left]).unwrap_err();
        assert!(matches!(err, StructureError::SelfIntersection { index: 1, .. }));
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert_eq!(
            check_structure([Up, Zero, Right, Down, Left]),
            Err(StructureError::ZeroDirection { index: 1 })
        );
    }

    #[test]
    fn touching_at_a_vertex_is_allowed() {
        // Two unit squares sharing the corner (1, 1, 0).
        let figure_eight = [Up, Right, Up, Right, Down, Left, Down, Left];
        assert!(is_valid_structure(figure_eight));
    }

    #[test]
    fn shared_edge_is_rejected() {
        // The fifth edge retraces the first.
        let dirs = [Right, Up, Left, Down, Right, Right, Up, Left, Down, Left];
        assert!(matches!(
            check_structure(dirs),
            Err(StructureError::SelfIntersection { .. })
        ));
    }

    #[test]
    fn three_dimensional_loop_is_valid() {
        assert!(is_valid_structure([
            Up, Right, Right, Down, Backward, Up, Left, Left, Down, Forward
        ]));
    }
}
