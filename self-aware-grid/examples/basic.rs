// Example: a fixed host, then edge and neighbor queries.
use self_aware_grid::{GapProperty, GridHost, SelfAwareGrid, SelfAwareGridOptions};

struct FixedGrid {
    width: f32,
    gap: f32,
    tile: f32,
    classes: Vec<Vec<String>>,
}

impl GridHost for FixedGrid {
    type Child = usize;

    fn children(&self) -> Vec<usize> {
        (0..self.classes.len()).collect()
    }

    fn container_width(&self) -> f32 {
        self.width
    }

    fn element_width(&self, _child: &usize) -> f32 {
        self.tile
    }

    fn gap(&self, property: GapProperty) -> Option<f32> {
        matches!(property, GapProperty::ColumnGap | GapProperty::RowGap).then_some(self.gap)
    }

    fn add_container_class(&mut self, _class: &str) {}

    fn add_class(&mut self, child: &usize, class: &str) {
        let classes = &mut self.classes[*child];
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, child: &usize, class: &str) {
        self.classes[*child].retain(|c| c != class);
    }

    fn class_names(&self, child: &usize) -> Vec<String> {
        self.classes[*child].clone()
    }
}

fn main() {
    let host = FixedGrid {
        width: 800.0,
        gap: 16.0,
        tile: 64.0,
        classes: vec![Vec::new(); 21],
    };
    let grid = SelfAwareGrid::new(host, SelfAwareGridOptions::new());

    println!("columns={} rows={}", grid.column_count(), grid.row_count());
    for i in [0, 9, 15, 20] {
        println!(
            "{i}: row={} column={} position={:?} above={} below={}",
            grid.is_nth_row(i),
            grid.is_nth_column(i),
            grid.position(i),
            grid.grid_item_above(i),
            grid.grid_item_below(i),
        );
    }
    println!("classes of 20: {:?}", grid.host().class_names(&20));
}
