// Example: arrow-key traversal over an in-memory grid, with a resize in between.
use self_aware_grid::{SelfAwareGrid, SelfAwareGridOptions};
use self_aware_grid_adapter::{Direction, MemoryGrid, Navigator, NavigatorOptions};

fn main() {
    let host = MemoryGrid::new(800.0).with_gap(16.0).with_children(21, 64.0);
    let mut grid = SelfAwareGrid::new(host, SelfAwareGridOptions::new());
    grid.begin_observing_resize().expect("fresh grid");

    let mut nav = Navigator::new(grid, NavigatorOptions::new().with_wrap_horizontal(false));
    for dir in [Direction::Right, Direction::Down, Direction::Down, Direction::Left] {
        println!("{dir:?} -> {:?}", nav.move_by(dir));
    }

    nav.grid_mut().host_mut().set_width(400.0);
    nav.poll();
    println!(
        "after resize: columns={} rows={} cursor={:?}",
        nav.grid().column_count(),
        nav.grid().row_count(),
        nav.cursor()
    );
    println!("{:?} -> {:?}", Direction::Up, nav.move_by(Direction::Up));
}
