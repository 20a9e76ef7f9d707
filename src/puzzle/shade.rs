//! A two-region shading puzzle: every cell joins region 1 or region 2, and
//! each region must end up orthogonally connected.

use crate::puzzle::{Grid, GridRules, Value, ValueSet};
use crate::square::{Coord, Square};

/// First of the two region values.
pub const REGION_A: Value = 1;
/// Second of the two region values.
pub const REGION_B: Value = 2;

/// Candidate regions for a blank cell: an absent region may start anywhere,
/// and a present region stays a candidate as long as a blank path still
/// connects the cell to it. A region walled off by the other region can
/// never grow back to the cell, so dropping it discards no completion.
pub struct ShadeRules;

impl GridRules for ShadeRules {
    fn candidates(&self, grid: &Grid, coord: Coord) -> ValueSet {
        let mut set = ValueSet::new(2);
        for region in REGION_A..=REGION_B {
            let present = grid.iter().any(|&cell| cell == Some(region));
            if !present || reaches(grid, coord, region) {
                set.insert(region);
            }
        }
        set
    }
}

/// Whether a path of blank cells connects `coord` to a cell of `region`.
fn reaches(grid: &Grid, coord: Coord, region: Value) -> bool {
    let mut seen = Square::with_width_and_value(grid.width(), false);
    seen[coord] = true;
    let mut frontier = vec![coord];
    while let Some(coord) = frontier.pop() {
        for neighbor in grid.neighbors(coord) {
            if grid[neighbor] == Some(region) {
                return true;
            }
            if grid[neighbor].is_none() && !seen[neighbor] {
                seen[neighbor] = true;
                frontier.push(neighbor);
            }
        }
    }
    false
}
