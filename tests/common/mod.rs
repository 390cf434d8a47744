use lifegrid_lib::Grid;

/// Builds an otherwise dead grid with exactly `cells` alive.
#[allow(dead_code)]
pub fn grid_with(cells: &[(i32, i32)]) -> Grid {
    let mut grid = Grid::new();
    for &(x, y) in cells {
        grid.set_cell(x, y, 1);
    }
    grid
}

/// Live cells in row-major order.
#[allow(dead_code)]
pub fn live_cells(grid: &Grid) -> Vec<(i32, i32)> {
    grid.view()
        .live_cells()
        .map(|(x, y)| (x as i32, y as i32))
        .collect()
}

/// Translates `cells` by `(dx, dy)` on the torus and sorts them row-major.
#[allow(dead_code)]
pub fn shifted(
    cells: &[(i32, i32)],
    dx: i32,
    dy: i32,
    width: i32,
    height: i32,
) -> Vec<(i32, i32)> {
    let mut out: Vec<(i32, i32)> = cells
        .iter()
        .map(|&(x, y)| ((x + dx).rem_euclid(width), (y + dy).rem_euclid(height)))
        .collect();
    out.sort_by_key(|&(x, y)| (y, x));
    out
}

/// Runs `n` generations.
#[allow(dead_code)]
pub fn run(grid: &mut Grid, n: usize) {
    for _ in 0..n {
        grid.step();
    }
}
