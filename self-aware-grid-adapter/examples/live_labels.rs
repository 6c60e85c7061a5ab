// Example: labels follow structural edits delivered as notifications.
use self_aware_grid::{GridHost, SelfAwareGrid, SelfAwareGridOptions};
use self_aware_grid_adapter::MemoryGrid;

fn main() {
    let host = MemoryGrid::new(400.0).with_gap(8.0).with_children(6, 96.0);
    let mut grid = SelfAwareGrid::new(host, SelfAwareGridOptions::new().with_class_prefix("tiles"));
    print_labels(&grid);

    let front = grid.host_mut().insert_child(0, 96.0);
    grid.poll_notifications();
    println!("inserted {front:?} at the front");
    print_labels(&grid);

    grid.destroy();
}

fn print_labels(grid: &SelfAwareGrid<MemoryGrid>) {
    println!("columns={} rows={}", grid.column_count(), grid.row_count());
    for id in grid.children() {
        let classes = grid.host().class_names(id);
        println!("  {id:?}: {}", classes.join(" "));
    }
}
